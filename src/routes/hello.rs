//! Greeting endpoint.

/// **GET** `/api/hello` → plain-text `Hello World`.
pub async fn hello() -> &'static str {
    tracing::info!("hello endpoint processed a request");
    "Hello World"
}
