//! Request assembly, validation, and the submission capability.
//!
//! [`PaymentRequest`] owns the outbound field set; the transport only
//! ever sees the validated [`FieldMap`] it produces. [`GatewayRequest`]
//! is the structural seam between the two: anything that can produce an
//! ordered field mapping can be submitted.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::fields::FieldMap;
use crate::sign::{self, HashAlgorithm, SIGNATURE_FIELD};

/// Wire name of the site code field.
pub const FIELD_SITE: &str = "SITE";
/// Wire name of the terminal rank field.
pub const FIELD_RANK: &str = "RANK";
/// Wire name of the merchant identifier field.
pub const FIELD_IDENTIFIER: &str = "IDENTIFIER";
/// Wire name of the amount field (minor currency units).
pub const FIELD_AMOUNT: &str = "AMOUNT";
/// Wire name of the currency code field.
pub const FIELD_CURRENCY: &str = "CURRENCY";
/// Wire name of the order reference field.
pub const FIELD_REFERENCE: &str = "REFERENCE";
/// Wire name of the customer email field.
pub const FIELD_EMAIL: &str = "EMAIL";
/// Wire name of the submission timestamp field.
pub const FIELD_TIME: &str = "TIME";

/// Capability interface for anything a transport can submit.
///
/// Any type producing an ordered field mapping, signed or not, can be
/// handed to the transport; no base type is required. Both retrieval
/// paths validate the request first and fail with the request's own
/// [`ValidationError`], which callers observe unchanged.
pub trait GatewayRequest {
    /// Validates the request and returns its field mapping.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a required field is missing or
    /// malformed.
    fn fields(&self) -> Result<FieldMap, ValidationError>;

    /// Validates the request and returns its field mapping with an HMAC
    /// signature appended as the final field.
    ///
    /// The signature is computed over the form-encoded serialization of
    /// the unsigned mapping, so field order is part of the signed data.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a required field is missing or
    /// malformed.
    fn fields_with_hmac(
        &self,
        secret: &str,
        algorithm: HashAlgorithm,
    ) -> Result<FieldMap, ValidationError> {
        let mut map = self.fields()?;
        let signature = sign::sign(algorithm, secret, map.to_form_encoded().as_bytes());
        map.push(SIGNATURE_FIELD, signature);
        Ok(map)
    }
}

/// A payment submission for the gateway.
///
/// Carries the merchant identification, the order being paid, and any
/// gateway-specific extra fields. Emission order is fixed: the canonical
/// fields in declaration order, the optional fields when present, the
/// extras in their insertion order, then (when signing) the signature
/// field. The order is stable because the signature covers it.
///
/// # Example
///
/// ```rust
/// use payform::request::{GatewayRequest, PaymentRequest};
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
/// let fields = request.fields()?;
/// assert_eq!(fields.get("AMOUNT"), Some("1000"));
/// # Ok::<(), payform::error::ValidationError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Site code assigned by the gateway.
    pub site: String,

    /// Terminal rank within the site.
    pub rank: String,

    /// Merchant identifier.
    pub identifier: String,

    /// Amount in minor currency units (e.g. cents).
    pub amount: u64,

    /// ISO 4217 alphabetic currency code (e.g. `"EUR"`).
    pub currency: String,

    /// Merchant-side order reference.
    pub reference: String,

    /// Customer email address, forwarded to the gateway when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,

    /// Submission timestamp in the gateway's expected format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// Additional gateway-specific fields, appended after the canonical
    /// ones in their own insertion order.
    #[serde(default, skip_serializing_if = "FieldMap::is_empty")]
    pub extra: FieldMap,
}

impl PaymentRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in [
            (FIELD_SITE, &self.site),
            (FIELD_RANK, &self.rank),
            (FIELD_IDENTIFIER, &self.identifier),
            (FIELD_CURRENCY, &self.currency),
            (FIELD_REFERENCE, &self.reference),
        ] {
            if value.is_empty() {
                return Err(ValidationError::MissingField { name });
            }
        }
        if self.amount == 0 {
            return Err(ValidationError::InvalidAmount);
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidCurrency {
                value: self.currency.clone(),
            });
        }
        if let Some(email) = &self.customer_email {
            if !email.contains('@') {
                return Err(ValidationError::InvalidEmail {
                    value: email.clone(),
                });
            }
        }
        Ok(())
    }
}

impl GatewayRequest for PaymentRequest {
    fn fields(&self) -> Result<FieldMap, ValidationError> {
        self.validate()?;

        let mut map = FieldMap::new();
        map.push(FIELD_SITE, self.site.as_str());
        map.push(FIELD_RANK, self.rank.as_str());
        map.push(FIELD_IDENTIFIER, self.identifier.as_str());
        map.push(FIELD_AMOUNT, self.amount.to_string());
        map.push(FIELD_CURRENCY, self.currency.as_str());
        map.push(FIELD_REFERENCE, self.reference.as_str());
        if let Some(email) = &self.customer_email {
            map.push(FIELD_EMAIL, email.as_str());
        }
        if let Some(timestamp) = &self.timestamp {
            map.push(FIELD_TIME, timestamp.as_str());
        }
        for (name, value) in self.extra.iter() {
            map.push(name, value);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PaymentRequest {
        PaymentRequest {
            site: "1999888".into(),
            rank: "32".into(),
            identifier: "107904482".into(),
            amount: 1000,
            currency: "EUR".into(),
            reference: "order-42".into(),
            ..PaymentRequest::default()
        }
    }

    #[test]
    fn test_fields_emission_order() {
        let mut req = request();
        req.customer_email = Some("customer@example.com".into());
        req.timestamp = Some("2015-03-21T09:30:00Z".into());
        req.extra.push("LOCALE", "fr_FR");

        let fields = req.fields().unwrap();
        let names: Vec<&str> = fields.iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec![
                "SITE",
                "RANK",
                "IDENTIFIER",
                "AMOUNT",
                "CURRENCY",
                "REFERENCE",
                "EMAIL",
                "TIME",
                "LOCALE",
            ]
        );
    }

    #[test]
    fn test_missing_required_field() {
        let mut req = request();
        req.site = String::new();

        let err = req.fields().unwrap_err();
        assert_eq!(err, ValidationError::MissingField { name: FIELD_SITE });
    }

    #[test]
    fn test_zero_amount_rejected() {
        let mut req = request();
        req.amount = 0;

        assert_eq!(req.fields().unwrap_err(), ValidationError::InvalidAmount);
    }

    #[test]
    fn test_bad_currency_rejected() {
        for bad in ["EURO", "E1", "978"] {
            let mut req = request();
            req.currency = bad.into();
            assert!(matches!(
                req.fields().unwrap_err(),
                ValidationError::InvalidCurrency { value } if value == bad
            ));
        }
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut req = request();
        req.customer_email = Some("not-an-email".into());

        assert!(matches!(
            req.fields().unwrap_err(),
            ValidationError::InvalidEmail { .. }
        ));
    }

    #[test]
    fn test_signature_is_appended_last_and_covers_encoded_fields() {
        let req = request();
        let unsigned = req.fields().unwrap();
        let signed = req
            .fields_with_hmac("secret", HashAlgorithm::Sha256)
            .unwrap();

        assert_eq!(signed.len(), unsigned.len() + 1);

        let last = signed.iter().last().unwrap();
        assert_eq!(last.0, SIGNATURE_FIELD);
        assert_eq!(
            last.1,
            sign::sign(
                HashAlgorithm::Sha256,
                "secret",
                unsigned.to_form_encoded().as_bytes()
            )
        );
    }

    #[test]
    fn test_signed_retrieval_reports_validation_errors_too() {
        let mut req = request();
        req.reference = String::new();

        let err = req
            .fields_with_hmac("secret", HashAlgorithm::Sha256)
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                name: FIELD_REFERENCE
            }
        );
    }

    #[test]
    fn test_serde_shape() {
        let req = request();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["site"], "1999888");
        assert_eq!(json["amount"], 1000);
        assert!(json.get("customerEmail").is_none());
    }
}
