//! # btpanel Core
//!
//! Pure request/response logic for the panel client - no HTTP, no disk.
//!
//! This crate contains:
//! - Request signing
//! - Response decoding
//! - The per-host cookie jar and its path derivation
//! - Port interfaces (traits) for the session store and the transport
//!
//! ## Architecture Principles
//! - Only depends on `btpanel-domain`
//! - All I/O lives behind the ports and is implemented in `btpanel-infra`

pub mod decoder;
pub mod session;
pub mod signer;

// Infrastructure ports
pub mod transport_ports;

pub use decoder::{decode, Payload};
pub use session::{cookie_path, session_key, CookieJar, SessionStore};
pub use signer::{sign, sign_now, RequestSignature};
pub use transport_ports::PanelTransport;
