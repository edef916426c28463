//! The geolocation collaborator.
//!
//! Callers depend on the [`GeoLookup`] abstraction. The only concrete
//! implementation today is the [`ip_api`] HTTP client.

use async_trait::async_trait;
use ipterm_common::messages;
use ipterm_common::network::record::LookupRecord;
use thiserror::Error;

pub mod ip_api;

pub use ip_api::IpApiClient;

#[derive(Debug, Error)]
pub enum LookupError {
    /// The service answered but reported that the lookup did not succeed.
    #[error("lookup service reported failure: {}", message.as_deref().unwrap_or("<no message>"))]
    Service { message: Option<String> },
    #[error("lookup service answered with HTTP {0}")]
    Status(u16),
    #[error("lookup request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("lookup response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LookupError {
    /// Text for the error banner.
    ///
    /// Only service-reported failures pass their own message through.
    pub fn user_message(&self) -> String {
        match self {
            LookupError::Service { message: Some(message) } if !message.is_empty() => {
                message.clone()
            }
            LookupError::Service { .. } => messages::LOOKUP_FAILED.to_string(),
            _ => messages::LOOKUP_ERROR.to_string(),
        }
    }
}

#[async_trait]
pub trait GeoLookup: Send + Sync {
    /// Resolves geolocation metadata for an already validated address.
    async fn lookup(&self, address: &str) -> Result<LookupRecord, LookupError>;

    /// Provider name, used in logs.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_message_passes_through() {
        let err = LookupError::Service {
            message: Some("private range".to_string()),
        };
        assert_eq!(err.user_message(), "private range");
    }

    #[test]
    fn test_service_failure_without_message_uses_fallback() {
        let err = LookupError::Service { message: None };
        assert_eq!(err.user_message(), messages::LOOKUP_FAILED);

        let err = LookupError::Service {
            message: Some(String::new()),
        };
        assert_eq!(err.user_message(), messages::LOOKUP_FAILED);
    }

    #[test]
    fn test_other_failures_hide_the_cause() {
        assert_eq!(LookupError::Status(503).user_message(), messages::LOOKUP_ERROR);

        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(LookupError::Decode(decode).user_message(), messages::LOOKUP_ERROR);
    }
}
