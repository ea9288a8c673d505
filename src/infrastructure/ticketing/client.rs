use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use crate::config::TicketingConfig;
use crate::domain::{AccessToken, AvailabilityQuery, DomainError, TicketingApi};
use crate::infrastructure::http::{HttpClient, HttpClientTrait, TransportConfig};
use crate::infrastructure::logging::{redact_json_sensitive_fields, truncate_for_log};

const MAX_LOGGED_BODY: usize = 2048;

/// Service account used to log in to the ticketing API
#[derive(Clone, Default, Serialize)]
pub struct ServiceCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<String>,
}

impl ServiceCredentials {
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self { username, password }
    }
}

impl std::fmt::Debug for ServiceCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceCredentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    body: LoginBody,
}

#[derive(Debug, Deserialize)]
struct LoginBody {
    access_token: Option<String>,
}

/// Client for the tuboleto ticketing API
#[derive(Debug)]
pub struct TuboletoClient<C: HttpClientTrait> {
    client: C,
    auth_url: String,
    availability_url: String,
    credentials: ServiceCredentials,
}

impl TuboletoClient<HttpClient> {
    /// Build a reqwest-backed client from configuration
    pub fn from_config(config: &TicketingConfig) -> Result<Self, DomainError> {
        let transport = TransportConfig {
            accept_invalid_certs: config.accept_invalid_certs,
        };

        Ok(Self::new(
            HttpClient::new(&transport)?,
            &config.auth_url,
            &config.availability_url,
            ServiceCredentials::new(config.username.clone(), config.password.clone()),
        ))
    }
}

impl<C: HttpClientTrait> TuboletoClient<C> {
    pub fn new(
        client: C,
        auth_url: impl Into<String>,
        availability_url: impl Into<String>,
        credentials: ServiceCredentials,
    ) -> Self {
        Self {
            client,
            auth_url: auth_url.into(),
            availability_url: availability_url.into(),
            credentials,
        }
    }

    async fn login(&self) -> Result<Option<AccessToken>, DomainError> {
        let body = serde_json::to_value(&self.credentials).map_err(|e| {
            DomainError::invalid_response(format!("Failed to encode credentials: {}", e))
        })?;

        let response = self
            .client
            .post_json(
                &self.auth_url,
                vec![("Content-Type", "application/json")],
                &body,
            )
            .await?;

        let login: LoginResponse = serde_json::from_value(response).map_err(|e| {
            DomainError::invalid_response(format!("Failed to parse login response: {}", e))
        })?;

        Ok(login.body.access_token.and_then(AccessToken::new))
    }
}

#[async_trait]
impl<C: HttpClientTrait> TicketingApi for TuboletoClient<C> {
    async fn authenticate(&self) -> Option<AccessToken> {
        match self.login().await {
            Ok(Some(token)) => {
                debug!("Obtained ticketing access token");
                Some(token)
            }
            Ok(None) => {
                error!("Login response did not contain an access token");
                None
            }
            Err(e) => {
                let upstream = e
                    .upstream_body()
                    .map(|b| truncate_for_log(&redact_json_sensitive_fields(b), MAX_LOGGED_BODY))
                    .unwrap_or_default();

                error!(error = %e, upstream_body = %upstream, "Failed to obtain access token");
                None
            }
        }
    }

    async fn query_availability(
        &self,
        token: &AccessToken,
        query: &AvailabilityQuery,
    ) -> Result<Value, DomainError> {
        let bearer = token.bearer();
        let headers = vec![
            ("Authorization", bearer.as_str()),
            ("Content-Type", "application/json"),
            ("Accept", "application/json"),
        ];

        self.client
            .get_json(&self.availability_url, headers, &query.query_pairs())
            .await
            .inspect_err(|e| {
                if let Some(body) = e.upstream_body() {
                    error!(
                        upstream_body = %truncate_for_log(body, MAX_LOGGED_BODY),
                        "Availability query rejected upstream"
                    );
                }
            })
    }
}
