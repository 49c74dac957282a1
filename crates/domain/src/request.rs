//! Outgoing request envelope handed to the transport

use std::fmt;
use std::time::Duration;

use crate::params::Params;

/// File payload sent as one multipart part.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Multipart field name
    pub field: String,
    /// Filename announced in the part's content disposition
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("field", &self.field)
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// One call to the panel, before signing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRequest {
    /// Relative path including any fixed query string
    pub path: String,
    pub params: Params,
    /// Present only for multipart uploads
    pub attachment: Option<Attachment>,
    /// Overrides the configured default when set
    pub timeout: Option<Duration>,
}

impl PanelRequest {
    pub fn new(path: impl Into<String>, params: Params) -> Self {
        Self { path: path.into(), params, attachment: None, timeout: None }
    }

    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_multipart(&self) -> bool {
        self.attachment.is_some()
    }
}
