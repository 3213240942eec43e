//! Constants for the gateway HTTP transport.

/// Content type of every gateway submission body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP status codes treated as a successful submission.
///
/// `0` is the "no status" sentinel some HTTP stacks report for
/// protocol-level successes that carry no status line; it stays in the
/// accepted set to keep parity with gateway integrations that rely on
/// it.
pub const ACCEPTED_STATUS_CODES: [u16; 4] = [0, 200, 201, 204];

/// Returns `true` if the observed status code counts as success.
#[must_use]
pub fn is_accepted_status(status: u16) -> bool {
    ACCEPTED_STATUS_CODES.contains(&status)
}
