//! Configuration loader
//!
//! Loads a [`PanelConfig`] from environment variables or a file.
//!
//! ## Loading Strategy
//! 1. Environment variables, when both host and key are set
//! 2. Otherwise the first config file found by [`probe_config_paths`]
//! 3. JSON and TOML are both accepted, chosen by file extension
//!
//! ## Environment Variables
//! - `BT_PANEL_HOST`: panel base URL (required)
//! - `BT_PANEL_KEY`: API key (required)
//! - `BT_PANEL_SESSION_DIR`: cookie directory (optional)
//! - `BT_PANEL_TIMEOUT_SECS`: default request timeout (optional)
//!
//! ## File Locations
//! `btpanel.toml`, `btpanel.json`, `config.toml` and `config.json`, looked
//! up in the working directory, its parent and grandparent, then next to the
//! executable.

use std::path::{Path, PathBuf};

use btpanel_domain::{PanelConfig, PanelError, Result};
use url::Url;

pub const ENV_HOST: &str = "BT_PANEL_HOST";
pub const ENV_KEY: &str = "BT_PANEL_KEY";
pub const ENV_SESSION_DIR: &str = "BT_PANEL_SESSION_DIR";
pub const ENV_TIMEOUT_SECS: &str = "BT_PANEL_TIMEOUT_SECS";

const CONFIG_FILE_NAMES: [&str; 4] = ["btpanel.toml", "btpanel.json", "config.toml", "config.json"];

/// Load configuration from the environment, falling back to a config file.
///
/// # Errors
/// Returns `PanelError::Config` if neither source yields a valid config.
pub fn load() -> Result<PanelConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("config.loaded_from_env");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "config.env_incomplete");
            load_from_file(None)
        }
    }
}

/// Load configuration from `BT_PANEL_*` environment variables.
///
/// # Errors
/// Returns `PanelError::Config` if host or key is missing, or a value does
/// not parse.
pub fn load_from_env() -> Result<PanelConfig> {
    let mut config = PanelConfig::default()
        .with_host(env_var(ENV_HOST)?)
        .with_key(env_var(ENV_KEY)?);

    if let Ok(dir) = std::env::var(ENV_SESSION_DIR) {
        config = config.with_session_dir(dir);
    }

    if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
        let secs = raw.trim().parse::<u64>().map_err(|e| {
            PanelError::Config(format!("Invalid {ENV_TIMEOUT_SECS} value {raw:?}: {e}"))
        })?;
        config = config.with_timeout_secs(secs);
    }

    check_host(&config)?;
    Ok(config)
}

/// Load configuration from a file.
///
/// With `path` set to `None`, the first file found by [`probe_config_paths`]
/// is used.
///
/// # Errors
/// Returns `PanelError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<PanelConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(PanelError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            PanelError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "config.loading_file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| PanelError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    check_host(&config)?;
    Ok(config)
}

/// Parse by extension: `.toml`, otherwise JSON.
fn parse_config(contents: &str, path: &Path) -> Result<PanelConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| PanelError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| PanelError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(PanelError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// First existing config file among the standard locations, if any.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend(cwd.ancestors().take(3).map(Path::to_path_buf));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.is_file())
}

/// A configured host must be an absolute http(s) URL. An empty host is left
/// for request-time validation.
fn check_host(config: &PanelConfig) -> Result<()> {
    if config.host.trim().is_empty() {
        return Ok(());
    }
    let url = Url::parse(&config.host)
        .map_err(|e| PanelError::Config(format!("Invalid panel host {:?}: {e}", config.host)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(PanelError::Config(format!("Unsupported panel host scheme: {other}"))),
    }
}

fn env_var(key: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(PanelError::Config(format!("Missing required environment variable: {key}"))),
    }
}
