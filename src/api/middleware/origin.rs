//! Origin allow-list gate and matching CORS headers

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tracing::warn;

use crate::api::types::ApiError;
use crate::domain::DomainError;

/// Exact-match set of browser origins allowed to call the relay
#[derive(Debug, Clone)]
pub struct OriginAllowList {
    origins: HashSet<String>,
    header_values: Vec<HeaderValue>,
}

impl OriginAllowList {
    pub fn new<I, S>(origins: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let origins: HashSet<String> = origins.into_iter().map(Into::into).collect();

        let header_values = origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| {
                    DomainError::configuration(format!("Invalid allowed origin: {:?}", origin))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            origins,
            header_values,
        })
    }

    /// An absent (or empty) origin is a non-browser caller and always passes
    pub fn permits(&self, origin: Option<&str>) -> bool {
        match origin {
            None | Some("") => true,
            Some(origin) => self.origins.contains(origin),
        }
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    /// CORS headers for allowed origins, credentials included
    pub fn cors_layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.header_values.clone()))
            .allow_credentials(true)
            .allow_methods([
                Method::GET,
                Method::HEAD,
                Method::PUT,
                Method::PATCH,
                Method::POST,
                Method::DELETE,
            ])
            .allow_headers(AllowHeaders::mirror_request())
    }
}

/// Reject browser requests from origins outside the allow-list
pub async fn origin_gate(
    State(allow_list): State<Arc<OriginAllowList>>,
    request: Request,
    next: Next,
) -> Response {
    let origin = match request.headers().get(header::ORIGIN) {
        None => None,
        Some(value) => match value.to_str() {
            Ok(origin) => Some(origin),
            Err(_) => {
                warn!("Rejected request with non-ASCII Origin header");
                return ApiError::origin_denied().into_response();
            }
        },
    };

    if !allow_list.permits(origin) {
        warn!(origin = origin.unwrap_or_default(), "Rejected request from disallowed origin");
        return ApiError::origin_denied().into_response();
    }

    next.run(request).await
}
