//! # btpanel Infrastructure
//!
//! Implementations of the core ports plus the user-facing client.
//!
//! This crate contains:
//! - The reqwest HTTP client and the signed, cookie-carrying transport
//! - File and in-memory session stores
//! - Configuration loading from env vars and TOML/JSON files
//! - [`PanelClient`] and its typed resource catalogs
//!
//! ## Architecture
//! - Implements traits defined in `btpanel-core`
//! - Contains all I/O (network, filesystem, environment)

pub mod config;
pub mod errors;
pub mod http;
pub mod panel;
pub mod resources;
pub mod session;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use panel::{PanelClient, PanelClientBuilder, SignedTransport};
pub use resources::*;
pub use session::{FileSessionStore, MemorySessionStore};
