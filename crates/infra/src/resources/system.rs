//! Panel and host status

use btpanel_domain::{Params, Result, SystemOp};
use serde_json::Value;

use crate::panel::PanelClient;

pub struct System<'a> {
    client: &'a PanelClient,
}

impl<'a> System<'a> {
    pub(crate) fn new(client: &'a PanelClient) -> Self {
        Self { client }
    }

    async fn fetch(&self, op: SystemOp) -> Result<Value> {
        self.client.call(op, Params::new()).await
    }

    pub async fn total(&self) -> Result<Value> {
        self.fetch(SystemOp::GetSystemTotal).await
    }

    pub async fn disk_info(&self) -> Result<Value> {
        self.fetch(SystemOp::GetDiskInfo).await
    }

    /// Realtime CPU, memory, network and load figures.
    pub async fn network(&self) -> Result<Value> {
        self.fetch(SystemOp::GetNetWork).await
    }

    /// Number of pending install tasks.
    pub async fn task_count(&self) -> Result<Value> {
        self.fetch(SystemOp::GetTaskCount).await
    }

    pub async fn check_update(&self) -> Result<Value> {
        self.fetch(SystemOp::UpdatePanel).await
    }

    pub async fn config(&self) -> Result<Value> {
        self.fetch(SystemOp::GetConfig).await
    }
}
