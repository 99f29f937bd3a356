//! # Routes Module
//!
//! HTTP route handlers, organized by feature. Handlers stay thin: decode
//! the request, call into the core module, map the result onto a response.

/// Health check and monitoring endpoints
pub mod health;

/// Greeting endpoint
pub mod hello;

/// Login and token issuance endpoints
pub mod auth;

/// Order intake endpoints (sync and queue-backed)
pub mod orders;

/// Sales report endpoint
pub mod report;
