//! Digest selection and HMAC message authentication.
//!
//! The gateway authenticates a submission through an HMAC computed over
//! the form-encoded field bytes with a pre-shared secret, carried as the
//! final field of the submission (see
//! [`GatewayRequest::fields_with_hmac`](crate::request::GatewayRequest::fields_with_hmac)).

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::{Sha256, Sha384, Sha512};

use crate::error::ConfigError;

/// Wire name of the field carrying the computed signature.
pub const SIGNATURE_FIELD: &str = "HMAC";

/// Digest algorithms supported for HMAC signing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// HMAC-SHA-256.
    Sha256,
    /// HMAC-SHA-384.
    Sha384,
    /// HMAC-SHA-512.
    Sha512,
}

impl HashAlgorithm {
    /// Returns the lowercase name used in configuration.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }
}

impl core::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            _ => Err(ConfigError::UnsupportedAlgorithm { name: s.to_owned() }),
        }
    }
}

/// HMAC configuration for a transport.
///
/// The "enabled implies a non-empty secret" invariant is enforced here
/// at construction, so a misconfigured deployment fails before its first
/// submission rather than during it. Settings are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HmacSettings {
    /// Submissions are sent unsigned.
    Disabled,
    /// Submissions carry an HMAC signature field.
    Enabled {
        /// Digest used to compute the signature.
        algorithm: HashAlgorithm,
        /// Pre-shared secret keying the HMAC. Never empty.
        secret: String,
    },
}

impl HmacSettings {
    /// Creates settings with signing disabled.
    #[must_use]
    pub const fn disabled() -> Self {
        Self::Disabled
    }

    /// Creates settings with signing enabled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingHmacSecret`] if `secret` is empty.
    pub fn enabled(
        algorithm: HashAlgorithm,
        secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::MissingHmacSecret);
        }
        Ok(Self::Enabled { algorithm, secret })
    }

    /// Creates settings from the raw `{enabled, hash, secret}` shape a
    /// deployment configures.
    ///
    /// When `enabled` is false the hash and secret values are ignored
    /// entirely, so construction succeeds regardless of their contents.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingHmacSecret`] if signing is enabled
    /// with an empty secret, or [`ConfigError::UnsupportedAlgorithm`] if
    /// the hash name is not a supported digest.
    pub fn from_parts(enabled: bool, hash: &str, secret: &str) -> Result<Self, ConfigError> {
        if !enabled {
            return Ok(Self::Disabled);
        }
        if secret.is_empty() {
            return Err(ConfigError::MissingHmacSecret);
        }
        Ok(Self::Enabled {
            algorithm: hash.parse()?,
            secret: secret.to_owned(),
        })
    }

    /// Returns `true` if signing is enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled { .. })
    }
}

/// Computes the uppercase hex HMAC of `message`, keyed by the secret's
/// raw bytes.
#[must_use]
pub fn sign(algorithm: HashAlgorithm, secret: &str, message: &[u8]) -> String {
    let key = secret.as_bytes();
    let digest = match algorithm {
        HashAlgorithm::Sha256 => {
            let mut mac =
                Hmac::<Sha256>::new_from_slice(key).expect("HMAC accepts any key length");
            mac.update(message);
            mac.finalize().into_bytes().to_vec()
        }
        HashAlgorithm::Sha384 => {
            let mut mac =
                Hmac::<Sha384>::new_from_slice(key).expect("HMAC accepts any key length");
            mac.update(message);
            mac.finalize().into_bytes().to_vec()
        }
        HashAlgorithm::Sha512 => {
            let mut mac =
                Hmac::<Sha512>::new_from_slice(key).expect("HMAC accepts any key length");
            mac.update(message);
            mac.finalize().into_bytes().to_vec()
        }
    };
    hex::encode_upper(digest)
}
