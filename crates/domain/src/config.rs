//! Panel connection configuration

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SESSION_DIR, DEFAULT_TIMEOUT_SECS};
use crate::errors::{PanelError, Result};

/// Immutable description of one configured panel connection.
///
/// `host` and `key` may be empty at construction time; [`PanelConfig::validate`]
/// is what turns their absence into a configuration error, and it runs before
/// every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Base URL of the panel, e.g. `https://127.0.0.1:8888`
    #[serde(default)]
    pub host: String,
    /// Shared API key configured in the panel
    #[serde(default)]
    pub key: String,
    /// Root directory for persisted session cookies
    #[serde(default = "default_session_dir")]
    pub session_dir: PathBuf,
    /// Default per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_session_dir() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_SESSION_DIR)
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl PanelConfig {
    pub fn new(
        host: impl Into<String>,
        key: impl Into<String>,
        session_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            host: host.into(),
            key: key.into(),
            session_dir: session_dir.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn with_session_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.session_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Host checked first so a fully empty config reports the missing host.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(PanelError::MissingHost);
        }
        if self.key.is_empty() {
            return Err(PanelError::MissingKey);
        }
        Ok(())
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            key: String::new(),
            session_dir: default_session_dir(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
