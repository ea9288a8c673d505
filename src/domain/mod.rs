//! Domain layer - Core relay logic and entities

pub mod availability;
pub mod error;

pub use availability::{
    AccessToken, AvailabilityParams, AvailabilityQuery, AvailabilityService, ParamValue,
    RelayError, TicketingApi,
};
pub use error::DomainError;
