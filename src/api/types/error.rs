//! Error envelope returned to relay callers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::availability::{QUERY_ERROR_MESSAGE, TOKEN_ERROR_MESSAGE};
use crate::domain::RelayError;

/// Message returned to browsers whose origin is not allow-listed
pub const ORIGIN_DENIED_MESSAGE: &str = "Acceso no permitido por CORS";

/// `{ message, error }` body; `error` is omitted when there is no detail to expose
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                message: message.into(),
                error: None,
            },
        }
    }

    /// Attach the underlying cause
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.body.error = Some(error.into());
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn origin_denied() -> Self {
        Self::forbidden(ORIGIN_DENIED_MESSAGE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::TokenUnavailable => Self::internal(TOKEN_ERROR_MESSAGE),
            RelayError::Query { cause } => Self::internal(QUERY_ERROR_MESSAGE).with_error(cause),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.body.error {
            Some(error) => write!(f, "{}: {}: {}", self.status, self.body.message, error),
            None => write!(f, "{}: {}", self.status, self.body.message),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_failure_hides_detail() {
        let err: ApiError = RelayError::TokenUnavailable.into();

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body.message, TOKEN_ERROR_MESSAGE);

        let json = serde_json::to_string(&err.body).unwrap();
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn test_query_failure_carries_cause() {
        let err: ApiError = RelayError::Query {
            cause: "Request failed with status code 502".to_string(),
        }
        .into();

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            serde_json::to_value(&err.body).unwrap(),
            serde_json::json!({
                "message": "Error obteniendo disponibilidad",
                "error": "Request failed with status code 502"
            })
        );
    }

    #[test]
    fn test_origin_denied() {
        let err = ApiError::origin_denied();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.body.message, ORIGIN_DENIED_MESSAGE);
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::bad_request("nope").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_display() {
        let err = ApiError::internal("boom").with_error("cause");
        assert_eq!(err.to_string(), "500 Internal Server Error: boom: cause");
    }
}
