//! File manager uploads
//!
//! The panel's chunked upload endpoint, used in a single chunk: the whole
//! file goes in one multipart request with `f_start=0`.

use std::path::Path;
use std::time::Duration;

use btpanel_domain::constants::{UPLOAD_BLOB_FIELD, UPLOAD_BLOB_FILE_NAME};
use btpanel_domain::{Attachment, Endpoint, FileOp, PanelError, Params, Result};
use serde_json::Value;
use tracing::debug;

use crate::panel::PanelClient;

pub struct Files<'a> {
    client: &'a PanelClient,
}

impl<'a> Files<'a> {
    pub(crate) fn new(client: &'a PanelClient) -> Self {
        Self { client }
    }

    /// Upload `local_path` into the panel directory `target_dir`.
    ///
    /// `timeout` overrides the configured default for this request only.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the local file cannot be read, otherwise whatever
    /// the transport returns.
    pub async fn upload(
        &self,
        target_dir: &str,
        local_path: impl AsRef<Path>,
        timeout: Option<Duration>,
    ) -> Result<Value> {
        let local_path = local_path.as_ref();
        let (file_name, bytes) = match read_upload(local_path).await {
            Ok(read) => read,
            Err(err) => {
                return Err(self.client.record(FileOp::RESOURCE, FileOp::Upload.name(), err))
            }
        };
        debug!(file = %local_path.display(), size = bytes.len(), "upload.prepared");

        let params = Params::new()
            .with("f_path", target_dir)
            .with("f_name", file_name)
            .with("f_size", bytes.len() as u64)
            .with("f_start", 0);
        let attachment = Attachment {
            field: UPLOAD_BLOB_FIELD.to_string(),
            file_name: UPLOAD_BLOB_FILE_NAME.to_string(),
            bytes,
        };

        self.client.execute(FileOp::Upload, params, Some(attachment), timeout).await
    }
}

async fn read_upload(path: &Path) -> Result<(String, Vec<u8>)> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            PanelError::InvalidInput(format!("upload path has no file name: {}", path.display()))
        })?
        .to_string();

    let bytes = tokio::fs::read(path).await.map_err(|err| {
        PanelError::InvalidInput(format!("cannot read upload file {}: {err}", path.display()))
    })?;

    Ok((file_name, bytes))
}
