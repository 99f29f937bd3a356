//! Core order validation shared by the HTTP endpoint and the queue worker.

use crate::error::{ProcessingError, ValidationError};

/// Per-item acknowledgments for one accepted order submission.
#[derive(Debug, PartialEq, Eq)]
pub struct AckReport {
    pub order_id: String,
    /// One line per submitted item, in submission order
    pub acks: Vec<String>,
}

impl AckReport {
    /// Acknowledgment lines joined for the response body.
    pub fn body(&self) -> String {
        self.acks.join("\n")
    }
}

/// Validate a structured order and acknowledge each item in input order.
///
/// An empty items list is accepted and yields an empty report; only a
/// missing field is an error.
pub fn validate_order(
    order_id: Option<&str>,
    items: Option<&[String]>,
) -> Result<AckReport, ValidationError> {
    let (order_id, items) = match (order_id, items) {
        (Some(order_id), Some(items)) => (order_id, items),
        _ => return Err(ValidationError::MissingFields),
    };

    let acks: Vec<String> = items
        .iter()
        .map(|item| {
            let ack = format!("{item} order processing started");
            // side channel only; the returned report is the contract
            tracing::info!(order_id, "{ack}");
            ack
        })
        .collect();

    Ok(AckReport {
        order_id: order_id.to_string(),
        acks,
    })
}

/// Acknowledge a raw order message delivered off the queue.
///
/// The payload is opaque; no schema is enforced. Errors from the logging
/// side channel would be propagated to the caller so the delivery
/// mechanism's redelivery policy applies.
pub fn acknowledge(message: &str) -> Result<(), ProcessingError> {
    tracing::info!("Processing message from order queue: {message}");
    tracing::info!("Order processing started for message: {message}");
    Ok(())
}
