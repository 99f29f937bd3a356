//! Login route: credential validation and token issuance.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};

use crate::auth::jwt::IssueError;
use crate::auth::models::{LoginRequest, TokenResponse};
use crate::server::AppState;

/// **POST** `/api/login`
///
/// Validates the payload and returns `{"token": "..."}` on success.
/// Validation failures come back as 400 with a fixed message body.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Response {
    tracing::info!("Processing login request");

    let issued = state
        .token_issuer
        .issue(payload.username.as_deref(), payload.password.as_deref());

    match issued {
        Ok(token) => Json(TokenResponse { token }).into_response(),
        Err(IssueError::Rejected(err)) => err.into_response(),
        Err(IssueError::Signing(err)) => {
            tracing::error!("token signing failed: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub fn create_auth_routes() -> Router<AppState> {
    Router::new().route("/api/login", post(login))
}
