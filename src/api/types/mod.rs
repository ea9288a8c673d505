//! Request and response types of the relay API

pub mod availability;
pub mod error;
pub mod json;

pub use availability::{AvailabilityResponse, SUCCESS_MESSAGE};
pub use error::{ApiError, ErrorBody, ORIGIN_DENIED_MESSAGE};
pub use json::Json;
