//! Availability Relay
//!
//! Authenticated pass-through to the tuboleto ticket availability API:
//! - Origin allow-list gate with CORS headers for the known front-ends
//! - Fresh service-account token per request
//! - Upstream availability payload relayed verbatim

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::middleware::OriginAllowList;
use api::state::AppState;
use domain::{AvailabilityService, DomainError};
use infrastructure::ticketing::TuboletoClient;
use tracing::{info, warn};

/// Create the application state from configuration
pub fn create_app_state(config: &AppConfig) -> Result<AppState, DomainError> {
    let ticketing = &config.ticketing;

    if ticketing.username.is_none() || ticketing.password.is_none() {
        warn!("API_USERNAME / API_PASSWORD not set; every availability request will fail to authenticate");
    }

    let client = TuboletoClient::from_config(ticketing)?;
    let availability_service = AvailabilityService::new(Arc::new(client), ticketing.location_id);

    let allowed_origins = OriginAllowList::new(config.cors.allowed_origins.iter().cloned())?;

    info!(
        auth_url = %ticketing.auth_url,
        availability_url = %ticketing.availability_url,
        allowed_origins = allowed_origins.len(),
        "Relay configured"
    );

    Ok(AppState::new(availability_service, allowed_origins))
}
