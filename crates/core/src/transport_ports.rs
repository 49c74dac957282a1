//! Transport port consumed by the panel client.
//!
//! The client resolves endpoints and records failures; everything between a
//! [`PanelRequest`] and a decoded JSON value happens behind this trait, so
//! resource catalogs can be exercised against a recording double.

use async_trait::async_trait;
use btpanel_domain::{PanelConfig, PanelRequest, Result};
use serde_json::Value;

#[async_trait]
pub trait PanelTransport: Send + Sync {
    /// Sign `request` with `config`, POST it to `config.host`, keep the
    /// host's session jar current and decode the response body.
    ///
    /// # Errors
    ///
    /// - `MissingHost` / `MissingKey` before any I/O when `config` is
    ///   incomplete
    /// - `Transport` / `Timeout` when the exchange fails
    /// - `Decode` when the body is not JSON
    /// - `Session` when the cookie jar cannot be loaded or saved
    async fn post(&self, config: &PanelConfig, request: PanelRequest) -> Result<Value>;
}
