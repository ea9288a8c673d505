use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// The request never produced an HTTP response (DNS, TLS, connection reset, ...)
    #[error("{message}")]
    Transport { message: String },

    /// The upstream answered with a non-2xx status
    #[error("Request failed with status code {status}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Invalid upstream response: {message}")]
    InvalidResponse { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn upstream_status(status: u16, body: impl Into<String>) -> Self {
        Self::UpstreamStatus {
            status,
            body: body.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Body returned by the upstream, if the failure carried one
    pub fn upstream_body(&self) -> Option<&str> {
        match self {
            Self::UpstreamStatus { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_message_is_verbatim() {
        let error = DomainError::transport("error sending request for url");
        assert_eq!(error.to_string(), "error sending request for url");
    }

    #[test]
    fn test_upstream_status_message() {
        let error = DomainError::upstream_status(401, r#"{"message":"Unauthorized"}"#);
        assert_eq!(error.to_string(), "Request failed with status code 401");
        assert_eq!(error.upstream_body(), Some(r#"{"message":"Unauthorized"}"#));
    }

    #[test]
    fn test_configuration_error() {
        let error = DomainError::configuration("bad origin");
        assert_eq!(error.to_string(), "Configuration error: bad origin");
        assert!(error.upstream_body().is_none());
    }
}
