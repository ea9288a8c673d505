//! Application state shared by handlers

use std::sync::Arc;

use super::middleware::OriginAllowList;
use crate::domain::AvailabilityService;

/// Application state. Holds no per-request data; every field is immutable after startup.
#[derive(Clone, Debug)]
pub struct AppState {
    pub availability_service: Arc<AvailabilityService>,
    pub allowed_origins: Arc<OriginAllowList>,
}

impl AppState {
    pub fn new(availability_service: AvailabilityService, allowed_origins: OriginAllowList) -> Self {
        Self {
            availability_service: Arc::new(availability_service),
            allowed_origins: Arc::new(allowed_origins),
        }
    }
}
