//! Authentication Models
//!
//! Data structures for the login request and token response.

use serde::{Deserialize, Serialize};

/// Login request payload.
///
/// Fields are optional so an absent field reaches the validator as `None`
/// instead of failing deserialization; the validator owns the error message.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Token response after successful authentication
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
