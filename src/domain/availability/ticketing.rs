//! Port to the third-party ticketing API

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use super::query::AvailabilityQuery;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Bearer token issued by the ticketing API.
///
/// Lives for exactly one inbound request and is never inspected.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token; an empty string is not a token
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();

        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

/// Operations the relay needs from the ticketing API
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TicketingApi: Send + Sync {
    /// Log in with the service credentials.
    ///
    /// Failures are logged and reported as `None`; the caller decides
    /// what an absent token means.
    async fn authenticate(&self) -> Option<AccessToken>;

    /// Fetch availability, returning the upstream payload untouched
    async fn query_availability(
        &self,
        token: &AccessToken,
        query: &AvailabilityQuery,
    ) -> Result<Value, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_is_absent() {
        assert!(AccessToken::new("").is_none());
    }

    #[test]
    fn test_bearer_header() {
        let token = AccessToken::new("abc.def").unwrap();
        assert_eq!(token.bearer(), "Bearer abc.def");
        assert_eq!(token.as_str(), "abc.def");
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let token = AccessToken::new("super-secret").unwrap();
        let debug = format!("{:?}", token);
        assert!(!debug.contains("super-secret"));
    }
}
