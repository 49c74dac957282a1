//! # btpanel Domain
//!
//! Domain types for the BT panel client.
//!
//! This crate contains:
//! - The panel error taxonomy and Result definition
//! - Connection configuration
//! - Request parameter maps and the request envelope
//! - Endpoint tables for every panel resource
//!
//! ## Architecture
//! - No dependencies on other btpanel crates
//! - No I/O

pub mod macros;

pub mod config;
pub mod constants;
pub mod endpoints;
pub mod errors;
pub mod params;
pub mod request;

// Re-export commonly used items
pub use config::PanelConfig;
pub use endpoints::{DatabaseOp, Endpoint, FileOp, FtpOp, PluginOp, SiteOp, SystemOp};
pub use errors::{ErrorKind, PanelError, Result};
pub use params::{ParamValue, Params};
pub use request::{Attachment, PanelRequest};
