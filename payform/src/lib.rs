#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core types for the payform gateway connector.
//!
//! This crate provides the building blocks for submitting payments to a
//! form-POST payment gateway: the ordered field mapping that becomes the
//! wire body, the request type that assembles and validates it, HMAC
//! message authentication over the encoded fields, and the endpoint
//! value object. The HTTP transport itself lives in the `payform-http`
//! crate.
//!
//! # Modules
//!
//! - [`endpoint`] - Validated gateway endpoint URL
//! - [`error`] - Configuration and validation error types
//! - [`fields`] - Insertion-ordered field mapping and form encoding
//! - [`request`] - Request assembly, validation, and the submission capability
//! - [`sign`] - Digest selection and HMAC signing

pub mod endpoint;
pub mod error;
pub mod fields;
pub mod request;
pub mod sign;

pub use endpoint::Endpoint;
pub use error::{ConfigError, ValidationError};
pub use fields::FieldMap;
pub use request::{GatewayRequest, PaymentRequest};
pub use sign::{HashAlgorithm, HmacSettings};
