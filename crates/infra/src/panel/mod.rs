//! Panel client and its signed transport

pub mod client;
pub mod transport;

pub use client::{PanelClient, PanelClientBuilder};
pub use transport::SignedTransport;
