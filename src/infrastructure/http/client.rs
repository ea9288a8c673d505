use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::domain::DomainError;

/// Transport settings scoped to a single outbound client
#[derive(Debug, Clone, Default)]
pub struct TransportConfig {
    /// Disable certificate verification for this client only
    pub accept_invalid_certs: bool,
}

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &Value,
    ) -> Result<Value, DomainError>;

    async fn get_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        query: &[(&str, String)],
    ) -> Result<Value, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &TransportConfig) -> Result<Self, DomainError> {
        if config.accept_invalid_certs {
            warn!("TLS certificate verification is disabled for the ticketing client");
        }

        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &Value,
    ) -> Result<Value, DomainError> {
        let mut request = self.client.post(url);

        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::transport(e.to_string()))?;

        read_body(response).await
    }

    async fn get_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        query: &[(&str, String)],
    ) -> Result<Value, DomainError> {
        let mut request = self.client.get(url).query(query);

        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::transport(e.to_string()))?;

        read_body(response).await
    }
}

/// Non-2xx becomes an error carrying the body; a 2xx body that is not
/// JSON is handed back as a JSON string.
async fn read_body(response: reqwest::Response) -> Result<Value, DomainError> {
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| DomainError::transport(e.to_string()))?;

    if !status.is_success() {
        return Err(DomainError::upstream_status(
            status.as_u16(),
            String::from_utf8_lossy(&bytes),
        ));
    }

    Ok(parse_payload(&bytes))
}

fn parse_payload(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
