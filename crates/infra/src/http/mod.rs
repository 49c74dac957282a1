//! HTTP plumbing shared by the panel transport

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
