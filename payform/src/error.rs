//! Configuration and validation error types.
//!
//! Both kinds are fatal to the call that surfaced them: nothing in this
//! workspace retries or suppresses an error internally. Validation
//! errors originate in the request collaborator and reach the caller of
//! the transport unchanged.

/// Errors for missing or invalid connector configuration.
///
/// Raised synchronously at construction (HMAC settings, endpoint, HTTP
/// client) or at the start of a submission (endpoint still unset), never
/// mid-flight.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// No endpoint URL has been configured.
    #[error("endpoint not set")]
    EndpointNotSet,

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint URL: {source}")]
    InvalidEndpoint {
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// HMAC signing is enabled but no secret key was provided.
    #[error("HMAC is enabled but no secret key was provided")]
    MissingHmacSecret,

    /// The configured digest name is not a supported algorithm.
    #[error("unsupported digest algorithm: {name}")]
    UnsupportedAlgorithm {
        /// The configured algorithm name.
        name: String,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to initialize HTTP client: {message}")]
    HttpClient {
        /// Description of the construction failure.
        message: String,
    },
}

/// Errors raised while a request assembles its field mapping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("required field {name} is missing or empty")]
    MissingField {
        /// Wire name of the missing field.
        name: &'static str,
    },

    /// The amount is not a positive number of minor currency units.
    #[error("amount must be greater than zero")]
    InvalidAmount,

    /// The currency code is not three ASCII letters.
    #[error("invalid ISO 4217 currency code: {value}")]
    InvalidCurrency {
        /// The rejected value.
        value: String,
    },

    /// The customer email address is malformed.
    #[error("invalid customer email: {value}")]
    InvalidEmail {
        /// The rejected value.
        value: String,
    },
}
