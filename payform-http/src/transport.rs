//! The gateway submission transport.
//!
//! [`PaymentTransport`] performs exactly one HTTP form-POST per
//! submission: it obtains the (optionally signed) field mapping from the
//! request, serializes it preserving field order, posts it to the
//! configured endpoint, and returns the raw response body. There are no
//! retries, no redirect policy beyond the client default, and no state
//! carried between calls.

use http::header::CONTENT_TYPE;
use payform::endpoint::Endpoint;
use payform::error::ConfigError;
use payform::request::GatewayRequest;
use payform::sign::HmacSettings;
use reqwest::Client;

use crate::constants::{FORM_CONTENT_TYPE, is_accepted_status};
use crate::error::{SubmitError, TransportError};

#[cfg(feature = "telemetry")]
use tracing::Instrument;

/// Submits signed payment requests to the gateway over HTTP.
///
/// The transport is stateless apart from its immutable configuration;
/// concurrent [`submit`](Self::submit) calls are independent, and the
/// shared `reqwest` client hands each call its own pooled connection.
///
/// # Example
///
/// ```no_run
/// use payform::{Endpoint, HmacSettings, PaymentRequest};
/// use payform_http::PaymentTransport;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = PaymentTransport::new(
///     Endpoint::new("https://gateway.example/cgi/payment")?,
///     HmacSettings::from_parts(true, "sha512", "s3cr3t")?,
/// )?;
///
/// let request = PaymentRequest {
///     site: "1999888".into(),
///     rank: "32".into(),
///     identifier: "107904482".into(),
///     amount: 1000,
///     currency: "EUR".into(),
///     reference: "order-42".into(),
///     ..PaymentRequest::default()
/// };
///
/// let body = transport.submit(&request).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PaymentTransport {
    /// Destination for submissions.
    endpoint: Endpoint,
    /// Message authentication configuration.
    hmac: HmacSettings,
    /// Shared reqwest HTTP client.
    client: Client,
}

impl PaymentTransport {
    /// Creates a transport for the given endpoint and HMAC settings.
    ///
    /// The endpoint may still be unset at this point; it must be set by
    /// the time [`submit`](Self::submit) is called.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the underlying HTTP
    /// client cannot be constructed (e.g. the TLS backend fails to
    /// initialize).
    pub fn new(endpoint: Endpoint, hmac: HmacSettings) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ConfigError::HttpClient {
                message: e.to_string(),
            })?;
        Ok(Self {
            endpoint,
            hmac,
            client,
        })
    }

    /// Replaces the HTTP client with a preconfigured one (custom
    /// timeout, proxy, or TLS setup).
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Returns the configured endpoint.
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the configured HMAC settings.
    pub const fn hmac(&self) -> &HmacSettings {
        &self.hmac
    }

    /// Submits a request and returns the raw response body.
    ///
    /// When HMAC is enabled the signed field-retrieval path is used;
    /// otherwise the plain one. The body is the URL-encoding of the
    /// returned mapping in its given order, and the response body is
    /// returned exactly as received.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::Config`] if no endpoint is set (checked before
    ///   any network activity).
    /// - [`SubmitError::Validation`] if the request rejects its field
    ///   set; propagated unchanged, no network call is made.
    /// - [`SubmitError::Transport`] on a network failure or a status
    ///   code outside the accepted set.
    #[cfg(feature = "telemetry")]
    pub async fn submit<R: GatewayRequest>(&self, request: &R) -> Result<String, SubmitError> {
        let span =
            tracing::info_span!("payform.transport.submit", hmac = self.hmac.is_enabled());
        let result = self.submit_inner(request).instrument(span).await;
        record_result(&result);
        result
    }

    /// Submits a request and returns the raw response body.
    ///
    /// When HMAC is enabled the signed field-retrieval path is used;
    /// otherwise the plain one. The body is the URL-encoding of the
    /// returned mapping in its given order, and the response body is
    /// returned exactly as received.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::Config`] if no endpoint is set (checked before
    ///   any network activity).
    /// - [`SubmitError::Validation`] if the request rejects its field
    ///   set; propagated unchanged, no network call is made.
    /// - [`SubmitError::Transport`] on a network failure or a status
    ///   code outside the accepted set.
    #[cfg(not(feature = "telemetry"))]
    pub async fn submit<R: GatewayRequest>(&self, request: &R) -> Result<String, SubmitError> {
        self.submit_inner(request).await
    }

    async fn submit_inner<R: GatewayRequest>(&self, request: &R) -> Result<String, SubmitError> {
        let url = self.endpoint.require()?;

        let fields = match &self.hmac {
            HmacSettings::Enabled { algorithm, secret } => {
                request.fields_with_hmac(secret, *algorithm)?
            }
            HmacSettings::Disabled => request.fields()?,
        };

        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(fields.to_form_encoded())
            .send()
            .await
            .map_err(|e| TransportError::Request { source: e })?;

        let status = response.status().as_u16();
        if !is_accepted_status(status) {
            // Consuming the body releases the connection either way.
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::UnexpectedStatus { status, body }.into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::BodyRead { source: e })?;
        Ok(body)
    }
}

/// Records the outcome of a submission as a tracing event.
#[cfg(feature = "telemetry")]
fn record_result(result: &Result<String, SubmitError>) {
    match result {
        Ok(body) => tracing::debug!(bytes = body.len(), "gateway submission succeeded"),
        Err(err) => tracing::error!(error = %err, "gateway submission failed"),
    }
}
