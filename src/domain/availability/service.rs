//! Authenticate-then-query sequencing for one inbound request

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, instrument};

use super::query::AvailabilityParams;
use super::ticketing::TicketingApi;

/// Fixed message returned when no token could be obtained
pub const TOKEN_ERROR_MESSAGE: &str = "Error al obtener el token de autenticación";

/// Message returned alongside the cause when the availability call fails
pub const QUERY_ERROR_MESSAGE: &str = "Error obteniendo disponibilidad";

/// The two ways a relay request can fail
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("{}", TOKEN_ERROR_MESSAGE)]
    TokenUnavailable,

    #[error("{}: {cause}", QUERY_ERROR_MESSAGE)]
    Query { cause: String },
}

/// Relays availability queries to the ticketing API
pub struct AvailabilityService {
    api: Arc<dyn TicketingApi>,
    location_id: u32,
}

impl AvailabilityService {
    pub fn new(api: Arc<dyn TicketingApi>, location_id: u32) -> Self {
        Self { api, location_id }
    }

    /// Resolve defaults against `today`, obtain a fresh token, then query.
    ///
    /// The query is never attempted without a token.
    #[instrument(skip(self, params), fields(location_id = self.location_id))]
    pub async fn check(
        &self,
        params: AvailabilityParams,
        today: NaiveDate,
    ) -> Result<Value, RelayError> {
        let query = params.resolve(today, self.location_id);

        let token = self
            .api
            .authenticate()
            .await
            .ok_or(RelayError::TokenUnavailable)?;

        info!(
            route = %query.route,
            year = %query.year,
            month = %query.month,
            "Querying availability"
        );

        self.api
            .query_availability(&token, &query)
            .await
            .map_err(|e| {
                error!(error = %e, "Availability query failed");
                RelayError::Query {
                    cause: e.to_string(),
                }
            })
    }
}

impl std::fmt::Debug for AvailabilityService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvailabilityService")
            .field("location_id", &self.location_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::availability::ticketing::{AccessToken, MockTicketingApi};
    use crate::domain::DomainError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[tokio::test]
    async fn test_token_failure_skips_query() {
        let mut api = MockTicketingApi::new();
        api.expect_authenticate().times(1).returning(|| None);
        api.expect_query_availability().never();

        let service = AvailabilityService::new(Arc::new(api), 1);
        let result = service.check(AvailabilityParams::default(), today()).await;

        assert_eq!(result, Err(RelayError::TokenUnavailable));
    }

    #[tokio::test]
    async fn test_query_failure_carries_query_cause() {
        let mut api = MockTicketingApi::new();
        api.expect_authenticate()
            .returning(|| AccessToken::new("tok"));
        api.expect_query_availability()
            .times(1)
            .returning(|_, _| Err(DomainError::upstream_status(503, "down")));

        let service = AvailabilityService::new(Arc::new(api), 1);
        let result = service.check(AvailabilityParams::default(), today()).await;

        assert_eq!(
            result,
            Err(RelayError::Query {
                cause: "Request failed with status code 503".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_success_passes_payload_and_defaults() {
        let payload = serde_json::json!([{"fecha": "2025-03-02", "cupos": 120}]);
        let expected = payload.clone();

        let mut api = MockTicketingApi::new();
        api.expect_authenticate()
            .returning(|| AccessToken::new("tok"));
        api.expect_query_availability()
            .withf(|token, query| {
                token.as_str() == "tok"
                    && query.route == "7"
                    && query.year == "2025"
                    && query.month == "3"
                    && query.location_id == 1
            })
            .returning(move |_, _| Ok(payload.clone()));

        let service = AvailabilityService::new(Arc::new(api), 1);
        let data = service
            .check(AvailabilityParams::default(), today())
            .await
            .unwrap();

        assert_eq!(data, expected);
    }

    #[test]
    fn test_relay_error_messages() {
        assert_eq!(RelayError::TokenUnavailable.to_string(), TOKEN_ERROR_MESSAGE);
        assert_eq!(
            RelayError::Query {
                cause: "boom".to_string()
            }
            .to_string(),
            "Error obteniendo disponibilidad: boom"
        );
    }
}
