//! Outbound HTTP transport

mod client;

pub use client::{HttpClient, HttpClientTrait, TransportConfig};

#[cfg(test)]
pub use client::mock;
