use axum::response::Json;
use serde_json::json;

/// Liveness probe for load balancers and monitoring.
///
/// **GET** `/ping` → `{"status":"pong"}`
pub async fn ping() -> Json<serde_json::Value> {
    Json(json!({ "status": "pong" }))
}
