//! Gateway endpoint configuration.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

/// The destination URL for gateway submissions.
///
/// An endpoint may be left unset at construction time (deployments often
/// wire the URL in from configuration later than the credentials), but a
/// submission requires a set, valid URL. [`Endpoint::require`] is the
/// validated accessor the transport goes through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Endpoint(Option<Url>);

impl Endpoint {
    /// Creates an endpoint from a configured string.
    ///
    /// An empty string yields the unset endpoint; anything else must
    /// parse as a valid URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the string is
    /// non-empty but not a valid URL.
    pub fn new(configured: &str) -> Result<Self, ConfigError> {
        if configured.is_empty() {
            return Ok(Self(None));
        }
        let url =
            Url::parse(configured).map_err(|e| ConfigError::InvalidEndpoint { source: e })?;
        Ok(Self(Some(url)))
    }

    /// Creates an unset endpoint.
    #[must_use]
    pub const fn unset() -> Self {
        Self(None)
    }

    /// Returns `true` if a URL has been configured.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Returns the configured URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EndpointNotSet`] if no URL is configured.
    pub fn require(&self) -> Result<&Url, ConfigError> {
        self.0.as_ref().ok_or(ConfigError::EndpointNotSet)
    }
}

impl From<Url> for Endpoint {
    fn from(url: Url) -> Self {
        Self(Some(url))
    }
}

impl std::str::FromStr for Endpoint {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Endpoint {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_unset() {
        let endpoint = Endpoint::new("").unwrap();
        assert!(!endpoint.is_set());
        assert!(matches!(
            endpoint.require(),
            Err(ConfigError::EndpointNotSet)
        ));
    }

    #[test]
    fn test_valid_url_is_set() {
        let endpoint = Endpoint::new("https://gateway.example/cgi/payment").unwrap();
        assert!(endpoint.is_set());
        assert_eq!(
            endpoint.require().unwrap().as_str(),
            "https://gateway.example/cgi/payment"
        );
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let result = Endpoint::new("not a url");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_from_str_conversion() {
        let endpoint: Endpoint = "https://gateway.example/".parse().unwrap();
        assert!(endpoint.is_set());
    }

    #[test]
    fn test_serde_transparent() {
        let endpoint = Endpoint::new("https://gateway.example/pay").unwrap();
        let json = serde_json::to_string(&endpoint).unwrap();
        assert_eq!(json, r#""https://gateway.example/pay""#);

        let unset: Endpoint = serde_json::from_str("null").unwrap();
        assert!(!unset.is_set());
    }
}
