//! MySQL/SQL Server databases managed by the panel

use btpanel_domain::{DatabaseOp, Params, Result};
use serde_json::Value;

use crate::panel::PanelClient;

/// Arguments for [`Database::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDatabase {
    pub name: String,
    pub username: String,
    pub password: String,
    /// Remark shown in the panel
    pub remark: String,
    /// Hosts allowed to connect
    pub access: String,
    pub address: String,
    pub encoding: String,
    /// `MySQL` or `SQLServer`
    pub db_type: String,
}

impl NewDatabase {
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            password: password.into(),
            remark: String::new(),
            access: "127.0.0.1".to_string(),
            address: "127.0.0.1".to_string(),
            encoding: "utf8".to_string(),
            db_type: "MySQL".to_string(),
        }
    }

    #[must_use]
    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = remark.into();
        self
    }

    #[must_use]
    pub fn with_access(mut self, access: impl Into<String>) -> Self {
        self.access = access.into();
        self
    }

    fn into_params(self) -> Params {
        Params::new()
            .with("name", self.name)
            .with("codeing", self.encoding)
            .with("db_user", self.username)
            .with("password", self.password)
            .with("dtype", self.db_type)
            .with("dataAccess", self.access)
            .with("address", self.address)
            .with("ps", self.remark)
    }
}

pub struct Database<'a> {
    client: &'a PanelClient,
}

impl<'a> Database<'a> {
    pub(crate) fn new(client: &'a PanelClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, search: &str, page: u32, limit: u32) -> Result<Value> {
        let params = Params::new().with("search", search).with("limit", limit).with("p", page);
        self.client.call(DatabaseOp::List, params).await
    }

    pub async fn add(&self, database: NewDatabase) -> Result<Value> {
        self.client.call(DatabaseOp::Add, database.into_params()).await
    }

    pub async fn set_password(&self, id: i64, name: &str, password: &str) -> Result<Value> {
        let params = Params::new().with("id", id).with("name", name).with("password", password);
        self.client.call(DatabaseOp::SetPassword, params).await
    }

    pub async fn delete(&self, id: i64, name: &str) -> Result<Value> {
        let params = Params::new().with("id", id).with("name", name);
        self.client.call(DatabaseOp::Delete, params).await
    }

    /// Backups of databases matching `search` (`type=1` selects database backups).
    pub async fn backups(&self, search: &str, page: u32, limit: u32) -> Result<Value> {
        let params = Params::new()
            .with("type", 1)
            .with("limit", limit)
            .with("p", page)
            .with("search", search);
        self.client.call(DatabaseOp::Backups, params).await
    }

    pub async fn create_backup(&self, id: i64) -> Result<Value> {
        self.client.call(DatabaseOp::ToBackup, Params::new().with("id", id)).await
    }

    pub async fn delete_backup(&self, id: i64) -> Result<Value> {
        self.client.call(DatabaseOp::DelBackup, Params::new().with("id", id)).await
    }

    /// Restore `name` from a backup file already on the server.
    pub async fn import_sql(&self, file: &str, name: &str) -> Result<Value> {
        let params = Params::new().with("file", file).with("name", name);
        self.client.call(DatabaseOp::InputSql, params).await
    }
}

#[cfg(test)]
mod tests {
    use btpanel_domain::ParamValue;

    use super::*;
    use crate::resources::testing::{pairs, recording_client, value};

    #[tokio::test]
    async fn list_sends_paging() {
        let (client, transport) = recording_client();
        client.database().list("shop", 2, 20).await.unwrap();

        let request = transport.last();
        assert_eq!(request.path, "/data?action=getData&table=databases");
        assert_eq!(
            pairs(&request),
            vec![
                ("search".to_string(), "shop".to_string()),
                ("limit".to_string(), "20".to_string()),
                ("p".to_string(), "2".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn add_uses_panel_field_names_and_defaults() {
        let (client, transport) = recording_client();
        client
            .database()
            .add(NewDatabase::new("shop", "shop_user", "pw").with_remark("orders"))
            .await
            .unwrap();

        let request = transport.last();
        assert_eq!(request.path, "/database?action=AddDatabase");
        assert_eq!(value(&request, "codeing"), Some(&ParamValue::from("utf8")));
        assert_eq!(value(&request, "db_user"), Some(&ParamValue::from("shop_user")));
        assert_eq!(value(&request, "dtype"), Some(&ParamValue::from("MySQL")));
        assert_eq!(value(&request, "dataAccess"), Some(&ParamValue::from("127.0.0.1")));
        assert_eq!(value(&request, "ps"), Some(&ParamValue::from("orders")));
    }

    #[tokio::test]
    async fn backups_select_database_type() {
        let (client, transport) = recording_client();
        client.database().backups("", 1, 5).await.unwrap();

        let request = transport.last();
        assert_eq!(request.path, "/data?action=getData&table=backup");
        assert_eq!(value(&request, "type"), Some(&ParamValue::Int(1)));
    }

    #[tokio::test]
    async fn import_sql_targets_input_endpoint() {
        let (client, transport) = recording_client();
        client.database().import_sql("/www/backup/shop.sql.gz", "shop").await.unwrap();

        let request = transport.last();
        assert_eq!(request.path, "/database?action=InputSql");
        assert_eq!(value(&request, "file"), Some(&ParamValue::from("/www/backup/shop.sql.gz")));
    }
}
