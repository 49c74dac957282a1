//! FTP accounts

use btpanel_domain::{FtpOp, Params, Result};
use serde_json::Value;

use crate::panel::PanelClient;

pub struct Ftp<'a> {
    client: &'a PanelClient,
}

impl<'a> Ftp<'a> {
    pub(crate) fn new(client: &'a PanelClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, search: &str, page: u32, limit: u32) -> Result<Value> {
        let params = Params::new().with("search", search).with("limit", limit).with("p", page);
        self.client.call(FtpOp::List, params).await
    }

    pub async fn set_password(&self, id: i64, username: &str, password: &str) -> Result<Value> {
        let params = Params::new()
            .with("id", id)
            .with("ftp_username", username)
            .with("new_password", password);
        self.client.call(FtpOp::SetUserPassword, params).await
    }

    /// `status` is `1` to enable the account, `0` to disable it.
    pub async fn set_status(&self, id: i64, username: &str, status: i64) -> Result<Value> {
        let params = Params::new().with("id", id).with("username", username).with("status", status);
        self.client.call(FtpOp::SetStatus, params).await
    }

    pub async fn delete(&self, id: i64, username: &str) -> Result<Value> {
        let params = Params::new().with("id", id).with("username", username);
        self.client.call(FtpOp::DeleteUser, params).await
    }
}
