//! Session store port
//!
//! The transport only needs to load a host's jar before a request and save
//! it after a response that changed it. Swapping the store (disk, memory,
//! something networked) never touches the transport.

use async_trait::async_trait;
use btpanel_domain::Result;

use super::jar::CookieJar;

/// Persistence for per-host cookie jars.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the jar for `host`; a host with no stored session yields an
    /// empty jar, not an error.
    async fn load(&self, host: &str) -> Result<CookieJar>;

    /// Persist the jar for `host`, replacing any previous state.
    async fn save(&self, host: &str, jar: &CookieJar) -> Result<()>;
}
