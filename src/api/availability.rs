//! `POST /api/availability`

use axum::extract::State;
use chrono::Local;

use super::state::AppState;
use super::types::{ApiError, AvailabilityResponse, Json};
use crate::domain::AvailabilityParams;

/// Authenticate upstream, query availability and relay the payload
pub async fn check_availability(
    State(state): State<AppState>,
    Json(params): Json<AvailabilityParams>,
) -> Result<axum::Json<AvailabilityResponse>, ApiError> {
    let today = Local::now().date_naive();

    let data = state.availability_service.check(params, today).await?;

    Ok(axum::Json(AvailabilityResponse::success(data)))
}
