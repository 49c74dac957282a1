//! Panel client
//!
//! Holds one immutable [`PanelConfig`], the transport it talks through and a
//! "last error" slot. Resource views (`client.site()`, `client.database()`,
//! ...) borrow the client and route every call through [`PanelClient::call`].

use std::sync::Arc;
use std::time::Duration;

use btpanel_core::{PanelTransport, SessionStore};
use btpanel_domain::{Attachment, Endpoint, PanelConfig, PanelError, PanelRequest, Params, Result};
use parking_lot::Mutex;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::transport::SignedTransport;
use crate::http::HttpClient;
use crate::resources::{Database, Files, Ftp, Plugin, Site, System};
use crate::session::FileSessionStore;

/// Client for one panel host and key.
pub struct PanelClient {
    config: PanelConfig,
    transport: Arc<dyn PanelTransport>,
    last_error: Mutex<Option<String>>,
}

impl PanelClient {
    /// Create a client backed by a reqwest transport and on-disk sessions
    /// under `config.session_dir`.
    ///
    /// An incomplete config is accepted here; it fails on the first call.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built
    pub fn new(config: PanelConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> PanelClientBuilder {
        PanelClientBuilder::default()
    }

    /// Create a client over an existing transport.
    pub fn with_transport(config: PanelConfig, transport: Arc<dyn PanelTransport>) -> Self {
        Self { config, transport, last_error: Mutex::new(None) }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// New client aimed at `host`, sharing this client's transport and
    /// sessions. The returned client starts with no last error.
    #[must_use]
    pub fn with_host(&self, host: impl Into<String>) -> Self {
        Self::with_transport(self.config.clone().with_host(host), self.transport.clone())
    }

    /// New client using `key`, sharing this client's transport and sessions.
    #[must_use]
    pub fn with_key(&self, key: impl Into<String>) -> Self {
        Self::with_transport(self.config.clone().with_key(key), self.transport.clone())
    }

    /// Message of the most recent failed call, if any.
    ///
    /// Successful calls do not clear it; use [`Self::clear_last_error`].
    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().clone()
    }

    pub fn clear_last_error(&self) {
        *self.last_error.lock() = None;
    }

    /// Call `op` with `params` using the configured timeout.
    pub async fn call<E: Endpoint>(&self, op: E, params: Params) -> Result<Value> {
        self.execute(op, params, None, None).await
    }

    /// Call an operation by its logical name, e.g. `call_named::<SiteOp>("Websites", ..)`.
    ///
    /// # Errors
    ///
    /// `UnknownOperation` when `name` is not in `E`'s table, in addition to
    /// everything [`Self::call`] can return.
    pub async fn call_named<E: Endpoint>(&self, name: &str, params: Params) -> Result<Value> {
        match E::from_name(name) {
            Some(op) => self.call(op, params).await,
            None => Err(self.record(E::RESOURCE, name, PanelError::UnknownOperation(name.into()))),
        }
    }

    /// Full form of [`Self::call`]: optional multipart attachment and a
    /// timeout overriding the configured default.
    #[instrument(skip(self, params, attachment), fields(resource = E::RESOURCE, op = op.name()))]
    pub async fn execute<E: Endpoint>(
        &self,
        op: E,
        params: Params,
        attachment: Option<Attachment>,
        timeout: Option<Duration>,
    ) -> Result<Value> {
        let mut request = PanelRequest::new(op.path(), params).with_timeout(timeout);
        if let Some(attachment) = attachment {
            request = request.with_attachment(attachment);
        }

        debug!(path = op.path(), "panel.call.start");
        match self.transport.post(&self.config, request).await {
            Ok(value) => Ok(value),
            Err(err) => Err(self.record(E::RESOURCE, op.name(), err)),
        }
    }

    pub(crate) fn record(&self, resource: &str, op: &str, err: PanelError) -> PanelError {
        warn!(resource, op, kind = ?err.kind(), error = %err, "panel.call.failed");
        *self.last_error.lock() = Some(err.to_string());
        err
    }

    pub fn database(&self) -> Database<'_> {
        Database::new(self)
    }

    pub fn site(&self) -> Site<'_> {
        Site::new(self)
    }

    pub fn ftp(&self) -> Ftp<'_> {
        Ftp::new(self)
    }

    pub fn files(&self) -> Files<'_> {
        Files::new(self)
    }

    pub fn plugin(&self) -> Plugin<'_> {
        Plugin::new(self)
    }

    pub fn system(&self) -> System<'_> {
        System::new(self)
    }
}

/// Builder for [`PanelClient`]
#[derive(Default)]
pub struct PanelClientBuilder {
    config: Option<PanelConfig>,
    http: Option<HttpClient>,
    sessions: Option<Arc<dyn SessionStore>>,
    transport: Option<Arc<dyn PanelTransport>>,
}

impl PanelClientBuilder {
    pub fn config(mut self, config: PanelConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a preconfigured HTTP client instead of the default one.
    pub fn http_client(mut self, http: HttpClient) -> Self {
        self.http = Some(http);
        self
    }

    /// Replace the on-disk session store.
    pub fn session_store(mut self, sessions: Arc<dyn SessionStore>) -> Self {
        self.sessions = Some(sessions);
        self
    }

    /// Replace the whole transport; `http_client` and `session_store` are
    /// ignored when set.
    pub fn transport(mut self, transport: Arc<dyn PanelTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the panel client
    ///
    /// # Errors
    ///
    /// Returns error if the default HTTP client cannot be built
    pub fn build(self) -> Result<PanelClient> {
        let config = self.config.unwrap_or_default();

        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let http = match self.http {
                    Some(http) => http,
                    None => HttpClient::new()?,
                };
                let sessions = self.sessions.unwrap_or_else(|| {
                    Arc::new(FileSessionStore::new(config.session_dir.clone()))
                });
                Arc::new(SignedTransport::new(http, sessions))
            }
        };

        Ok(PanelClient::with_transport(config, transport))
    }
}
