//! Lenient JSON body extractor

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body extractor that treats a missing or non-JSON body as `{}`.
///
/// Browsers and scripts calling the relay often post without a body or
/// without `Content-Type: application/json`; those requests get the
/// defaults instead of a rejection. A JSON body that fails to parse is a
/// 400 in the relay's `{ message, error }` format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Consume the extractor and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let declared_json = is_json_content_type(req.headers());

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            ApiError::bad_request("Failed to read request body").with_error(rejection.body_text())
        })?;

        let payload: &[u8] = if !declared_json || bytes.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &bytes
        };

        serde_json::from_slice(payload).map(Json).map_err(|e| {
            ApiError::bad_request("Invalid JSON request").with_error(e.to_string())
        })
    }
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| {
            let mime = ct.split(';').next().unwrap_or_default().trim();
            mime.eq_ignore_ascii_case("application/json")
                || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false)
}
