//! Error types for the gateway HTTP transport.

use payform::error::{ConfigError, ValidationError};

/// Errors from the network round trip to the gateway.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TransportError {
    /// The HTTP request could not be completed (connection refused, DNS
    /// failure, timeout, TLS error).
    #[error("request to payment gateway failed: {source}")]
    Request {
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// The gateway answered with a status outside the accepted set.
    #[error("payment gateway returned HTTP status {status}: {body}")]
    UnexpectedStatus {
        /// The observed HTTP status code.
        status: u16,
        /// The response body, as far as it could be read.
        body: String,
    },

    /// The response body could not be read.
    #[error("failed to read gateway response body: {source}")]
    BodyRead {
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
}

impl TransportError {
    /// Returns the observed HTTP status code, if one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Request { source } | Self::BodyRead { source } => {
                source.status().map(|s| s.as_u16())
            }
        }
    }
}

/// Everything a submission can fail with.
///
/// Each underlying error passes through transparently, so callers see
/// the originating error's message and can match on its structured
/// variant. Validation failures in particular reach the caller exactly
/// as the request collaborator produced them.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SubmitError {
    /// Missing or invalid configuration, detected before any network
    /// activity.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request collaborator rejected its field set.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The network round trip failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
