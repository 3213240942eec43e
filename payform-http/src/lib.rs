#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! HTTP transport for the payform gateway connector.
//!
//! Provides [`PaymentTransport`], which obtains the validated (and
//! optionally HMAC-signed) field mapping from a request, serializes it
//! as a URL-encoded form body preserving field order, posts it to the
//! configured gateway endpoint in a single round trip, and returns the
//! raw response body.
//!
//! # Modules
//!
//! - [`constants`] — accepted status codes, content type
//! - [`error`] — transport and submission error types
//! - [`transport`] — the submission transport
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation for submissions

pub mod constants;
pub mod error;
pub mod transport;

pub use error::{SubmitError, TransportError};
pub use transport::PaymentTransport;
