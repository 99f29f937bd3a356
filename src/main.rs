//! # Orderdesk Server
//!
//! Small HTTP API server built with Axum and Tokio, ported from a
//! serverless-functions deployment into a single long-running process.
//!
//! ## Features
//! - Greeting and health endpoints
//! - Login endpoint issuing HS256 JWT tokens (1 hour lifetime)
//! - Order intake, both synchronous and via an in-process queue worker
//! - Daily sales report, on demand or on a schedule
//!
//! ## Architecture
//! - `server`: app state, router assembly, background task startup
//! - `config`: environment variable configuration
//! - `auth`: credential validation and token issuance
//! - `orders`: order validation core plus the queue worker
//! - `report`: sales report generation and the scheduler
//! - `routes`: thin HTTP handlers over the core modules
//!
//! ## Running the Server
//! ```bash
//! cargo run
//! ```
//!
//! The server listens on `0.0.0.0:3000` by default; see `config.rs` for the
//! environment variables that override it.

mod auth;
mod config;
mod error;
mod orders;
mod report;
mod routes;
mod server;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application entry point.
///
/// Initializes the tracing subscriber and runs the HTTP server until the
/// process is terminated.
#[tokio::main]
async fn main() {
    // .env is optional; real deployments set variables directly
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();

    tracing::info!("🏁 Starting Orderdesk Server...");
    tracing::info!(
        "📦 Package: {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    server::start().await;
}
