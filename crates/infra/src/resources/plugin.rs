//! One-click deployment plugin

use btpanel_domain::{Params, PluginOp, Result};
use serde_json::Value;

use crate::panel::PanelClient;

pub struct Plugin<'a> {
    client: &'a PanelClient,
}

impl<'a> Plugin<'a> {
    pub(crate) fn new(client: &'a PanelClient) -> Self {
        Self { client }
    }

    /// Packages available for one-click deployment.
    pub async fn deployment(&self) -> Result<Value> {
        self.client.call(PluginOp::Deployment, Params::new().with("type", 1)).await
    }

    /// Deploy package `source` onto `site_name`.
    pub async fn setup_package(
        &self,
        source: &str,
        site_name: &str,
        php_version: &str,
    ) -> Result<Value> {
        let params = Params::new()
            .with("dname", source)
            .with("site_name", site_name)
            .with("php_version", php_version);
        self.client.call(PluginOp::SetupPackage, params).await
    }

    /// Progress of the running deployment.
    pub async fn speed(&self) -> Result<Value> {
        self.client.call(PluginOp::GetSpeed, Params::new()).await
    }
}
