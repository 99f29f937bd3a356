//! In-process order queue - consumes raw order messages off a bounded
//! channel and hands them to the core acknowledgment function.
//!
//! Stands in for the external message broker the service used to sit
//! behind: delivery is at-least-once, and a message whose handler fails is
//! redelivered up to the configured budget before being dead-lettered.

use tokio::sync::mpsc;

use crate::error::ProcessingError;

/// Sending half of the order queue, shared through app state.
#[derive(Clone)]
pub struct OrderQueue {
    tx: mpsc::Sender<String>,
}

impl OrderQueue {
    /// Create the queue and the receiver the worker will drain.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    /// Enqueue a raw order message, waiting if the queue is full.
    pub async fn enqueue(&self, message: String) -> Result<(), ProcessingError> {
        self.tx
            .send(message)
            .await
            .map_err(|_| ProcessingError("order queue worker is gone".to_string()))
    }
}

/// Drain the queue until every sender is dropped.
///
/// Each message gets up to `max_deliveries` attempts; the handler's error is
/// what drives redelivery, the worker itself never inspects the payload.
pub async fn run_worker<F>(mut rx: mpsc::Receiver<String>, max_deliveries: u32, handler: F)
where
    F: Fn(&str) -> Result<(), ProcessingError>,
{
    tracing::info!("[OrderQueue] worker started (max deliveries: {max_deliveries})");

    while let Some(message) = rx.recv().await {
        let mut delivery = 1;
        loop {
            match handler(&message) {
                Ok(()) => break,
                Err(err) if delivery < max_deliveries => {
                    tracing::warn!(
                        "[OrderQueue] delivery {delivery}/{max_deliveries} failed, redelivering: {err}"
                    );
                    delivery += 1;
                }
                Err(err) => {
                    tracing::error!(
                        "[OrderQueue] dead-lettering message after {delivery} deliveries: {err}"
                    );
                    break;
                }
            }
        }
    }

    tracing::info!("[OrderQueue] worker stopped");
}
