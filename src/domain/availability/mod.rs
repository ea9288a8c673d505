//! Ticket availability relay domain

mod query;
mod service;
mod ticketing;

pub use query::{
    AvailabilityParams, AvailabilityQuery, ParamValue, DEFAULT_LOCATION_ID, DEFAULT_ROUTE,
};
pub use service::{AvailabilityService, RelayError, QUERY_ERROR_MESSAGE, TOKEN_ERROR_MESSAGE};
pub use ticketing::{AccessToken, TicketingApi};

#[cfg(test)]
pub use ticketing::MockTicketingApi;
