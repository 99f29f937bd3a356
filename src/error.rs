//! Error types shared across the request validators and the order queue.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Client input errors detected while validating a request.
///
/// The `Display` strings are the exact response bodies sent back to the
/// caller, so changing them changes the wire contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Login payload is missing the username or the password.
    #[error("Please provide username and password")]
    MissingCredentials,

    /// Login username does not look like an email address.
    #[error("Invalid email format")]
    InvalidIdentifierFormat,

    /// Order payload is missing the orderId or the items list.
    #[error("Please provide orderId and items")]
    MissingFields,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        // All validation failures are caller errors, never retried server-side
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

/// Failure while acknowledging a queued order message.
///
/// Surfaced to the queue worker instead of being swallowed so that the
/// worker's redelivery policy governs recovery.
#[derive(Debug, Error)]
#[error("order message processing failed: {0}")]
pub struct ProcessingError(pub String);
