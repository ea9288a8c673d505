//! Tuboleto ticketing API client

mod client;

pub use client::{ServiceCredentials, TuboletoClient};
