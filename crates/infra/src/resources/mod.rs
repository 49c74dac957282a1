//! Typed resource catalogs
//!
//! Each view borrows a [`PanelClient`](crate::panel::PanelClient) and only
//! builds parameter maps; signing, sessions and decoding happen below.

pub mod database;
pub mod files;
pub mod ftp;
pub mod plugin;
pub mod site;
pub mod system;

pub use database::{Database, NewDatabase};
pub use files::Files;
pub use ftp::Ftp;
pub use plugin::Plugin;
pub use site::{
    NewSite, ProxyRule, RateLimit, RedirectRule, SecurityRule, Site, SiteDeletion, SiteQuery,
};
pub use system::System;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use async_trait::async_trait;
    use btpanel_core::PanelTransport;
    use btpanel_domain::{PanelConfig, PanelRequest, ParamValue, Result};
    use parking_lot::Mutex;
    use serde_json::{json, Value};

    use crate::panel::PanelClient;

    /// Captures requests instead of sending them.
    #[derive(Default)]
    pub struct RecordingTransport {
        pub requests: Mutex<Vec<PanelRequest>>,
    }

    impl RecordingTransport {
        pub fn last(&self) -> PanelRequest {
            self.requests.lock().last().cloned().expect("no request recorded")
        }
    }

    #[async_trait]
    impl PanelTransport for RecordingTransport {
        async fn post(&self, _config: &PanelConfig, request: PanelRequest) -> Result<Value> {
            self.requests.lock().push(request);
            Ok(json!({"status": true}))
        }
    }

    pub fn recording_client() -> (PanelClient, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport::default());
        let config = PanelConfig::new("https://127.0.0.1:8888", "k", std::env::temp_dir());
        (PanelClient::with_transport(config, transport.clone()), transport)
    }

    /// `key=value` pairs as they would be form-encoded.
    pub fn pairs(request: &PanelRequest) -> Vec<(String, String)> {
        request.params.to_form_pairs()
    }

    pub fn value<'a>(request: &'a PanelRequest, key: &str) -> Option<&'a ParamValue> {
        request.params.get(key)
    }
}
