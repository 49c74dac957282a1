//! Error types used throughout the panel client

use std::time::Duration;

use thiserror::Error;

/// Categories of panel errors so callers can branch without string matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing host or key, or an unloadable config - fatal, never retried
    Configuration,
    /// Network, TLS or timeout failure
    Transport,
    /// The response body was not valid JSON
    Decode,
    /// Cookie jar could not be read or persisted
    Session,
    /// Caller supplied something unusable (missing upload file, unknown operation)
    InvalidInput,
}

/// Main error type for panel operations
#[derive(Error, Debug)]
pub enum PanelError {
    #[error("Configuration error: panel host is not set")]
    MissingHost,

    #[error("Configuration error: panel API key is not set")]
    MissingKey,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Transport error: request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid input: unknown operation '{0}'")]
    UnknownOperation(String),
}

impl PanelError {
    /// Get the error category for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingHost | Self::MissingKey | Self::Config(_) => ErrorKind::Configuration,
            Self::Transport(_) | Self::Timeout(_) => ErrorKind::Transport,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Session(_) => ErrorKind::Session,
            Self::InvalidInput(_) | Self::UnknownOperation(_) => ErrorKind::InvalidInput,
        }
    }

    /// True for configuration failures; these are raised before any I/O.
    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }
}

/// Result type alias for panel operations
pub type Result<T> = std::result::Result<T, PanelError>;
