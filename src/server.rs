//! # Server Module
//!
//! HTTP server setup, route configuration, and background task startup.

use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::auth::jwt::TokenIssuer;
use crate::auth::signing_key::SigningKey;
use crate::config::Config;
use crate::orders::queue::{self, OrderQueue};
use crate::orders::validator;
use crate::report::scheduler;
use crate::routes;

/// Application state shared across all route handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only after construction; safe to share without coordination
    pub token_issuer: Arc<TokenIssuer>,
    pub order_queue: OrderQueue,
}

/// Assemble the full router over the given state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(routes::health::ping))
        .route("/api/hello", get(routes::hello::hello))
        .merge(routes::auth::create_auth_routes())
        .merge(routes::orders::create_order_routes())
        .merge(routes::report::create_report_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        )
        .with_state(state)
}

/// Starts the Orderdesk HTTP server and its background tasks.
///
/// Binds per config, spawns the order queue worker and the report
/// scheduler, then serves until the process is terminated.
pub async fn start() {
    let config = Config::from_env().expect("Failed to load configuration from environment");

    // Signing key lives for the whole process; every token shares it
    let signing_key = SigningKey::from_env_or_generate();
    let token_issuer = Arc::new(TokenIssuer::new(&signing_key));

    // Order queue worker consumes raw messages off the channel
    let (order_queue, queue_rx) = OrderQueue::new(config.queue.capacity);
    tokio::spawn(queue::run_worker(
        queue_rx,
        config.queue.max_deliveries,
        |message| validator::acknowledge(message),
    ));

    // Scheduled sales report emission
    tokio::spawn(scheduler::run(Duration::from_secs(
        config.report.interval_secs,
    )));

    let app_state = AppState {
        token_issuer,
        order_queue,
    };
    let app = create_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.expect(
        "Failed to bind to address - port may already be in use",
    );

    tracing::info!("🚀 Orderdesk Server starting...");
    tracing::info!("📡 Listening on http://{addr}");
    tracing::info!("🏥 Health check available at http://{addr}/ping");
    tracing::info!("🔑 Login endpoint at http://{addr}/api/login");
    tracing::info!("📦 Order intake at http://{addr}/api/orders");
    tracing::info!("📊 Sales report at http://{addr}/api/daily-sales-report");

    axum::serve(listener, app).await.expect("server error");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn make_app() -> Router {
        let signing_key = SigningKey::generate();
        let (order_queue, queue_rx) = OrderQueue::new(8);
        tokio::spawn(queue::run_worker(queue_rx, 3, |message| {
            validator::acknowledge(message)
        }));

        create_router(AppState {
            token_issuer: Arc::new(TokenIssuer::new(&signing_key)),
            order_queue,
        })
    }

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn json_post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn hello_returns_greeting() {
        let response = make_app()
            .oneshot(Request::builder().uri("/api/hello").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Hello World");
    }

    #[tokio::test]
    async fn ping_answers_pong() {
        let response = make_app()
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "pong");
    }

    #[tokio::test]
    async fn login_returns_a_token() {
        let response = make_app()
            .oneshot(json_post(
                "/api/login",
                json!({"username": "user@example.com", "password": "hunter2"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        let token = body["token"].as_str().unwrap();
        // compact JWT: header.claims.signature
        assert_eq!(token.split('.').count(), 3);
    }

    #[tokio::test]
    async fn login_without_password_is_a_bad_request() {
        let response = make_app()
            .oneshot(json_post(
                "/api/login",
                json!({"username": "user@example.com"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_text(response).await,
            "Please provide username and password"
        );
    }

    #[tokio::test]
    async fn login_with_malformed_email_is_a_bad_request() {
        let response = make_app()
            .oneshot(json_post(
                "/api/login",
                json!({"username": "not-an-email", "password": "hunter2"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Invalid email format");
    }

    #[tokio::test]
    async fn order_submission_acknowledges_each_item() {
        let response = make_app()
            .oneshot(json_post(
                "/api/orders",
                json!({"orderId": "ORD-123", "items": ["Laptop", "Mouse", "Keyboard"]}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_text(response).await,
            "Laptop order processing started\n\
             Mouse order processing started\n\
             Keyboard order processing started"
        );
    }

    #[tokio::test]
    async fn order_submission_without_items_is_a_bad_request() {
        let response = make_app()
            .oneshot(json_post("/api/orders", json!({"orderId": "ORD-123"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Please provide orderId and items");
    }

    #[tokio::test]
    async fn order_enqueue_is_accepted() {
        let response = make_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/orders/enqueue")
                    .body(Body::from("{\"orderId\": \"ORD-123\"}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn sales_report_has_all_sections() {
        let response = make_app()
            .oneshot(
                Request::builder()
                    .uri("/api/daily-sales-report")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.starts_with("Daily Sales Report\n"));
        assert!(body.contains("\nDate: "));
        assert!(body.contains("\nTotal Sales: "));
        assert!(body.contains("\nPerformance: "));
    }
}
