use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use super::availability;
use super::health;
use super::middleware::{logging_middleware, origin_gate};
use super::state::AppState;

/// Create the full router with application state.
///
/// The origin gate is the outermost layer so disallowed browsers are
/// rejected before CORS preflight handling or any handler runs.
pub fn create_router(state: AppState) -> Router {
    let cors = state.allowed_origins.cors_layer();
    let allowed_origins = state.allowed_origins.clone();

    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .route("/api/availability", post(availability::check_availability))
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(cors)
        .layer(middleware::from_fn_with_state(allowed_origins, origin_gate))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
