//! Order intake routes.
//!
//! Two shapes over the same core validator: a synchronous structured
//! submission, and an enqueue endpoint that feeds the queue worker the raw
//! message body, fire-and-forget.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use crate::orders::validator;
use crate::server::AppState;

/// Structured order submission payload.
///
/// Optional fields for the same reason as the login payload: the validator
/// owns the missing-field error, not the deserializer.
#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    #[serde(rename = "orderId")]
    pub order_id: Option<String>,
    pub items: Option<Vec<String>>,
}

/// **POST** `/api/orders`
///
/// Returns one acknowledgment line per item, in submission order.
pub async fn submit_order(Json(payload): Json<OrderRequest>) -> Response {
    match validator::validate_order(payload.order_id.as_deref(), payload.items.as_deref()) {
        Ok(report) => (StatusCode::OK, report.body()).into_response(),
        Err(err) => err.into_response(),
    }
}

/// **POST** `/api/orders/enqueue`
///
/// Accepts an opaque message body and hands it to the order queue. The
/// reply only confirms the enqueue; processing happens in the worker.
pub async fn enqueue_order(State(state): State<AppState>, body: String) -> Response {
    match state.order_queue.enqueue(body).await {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(err) => {
            tracing::error!("failed to enqueue order message: {err}");
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        }
    }
}

pub fn create_order_routes() -> Router<AppState> {
    Router::new()
        .route("/api/orders", post(submit_order))
        .route("/api/orders/enqueue", post(enqueue_order))
}
