//! JWT Token Issuer
//!
//! Validates login credentials and mints signed, time-bounded tokens.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::signing_key::SigningKey;
use crate::auth::validation::is_email_shaped;
use crate::error::ValidationError;

/// Token lifetime in seconds (1 hour).
pub const TOKEN_TTL_SECS: i64 = 3600;

/// JWT claims carried by an issued token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Login identifier the token was issued for
    pub sub: String,
    /// Token issued at timestamp
    pub iat: i64,
    /// Token expiration timestamp
    pub exp: i64,
}

/// Why a login attempt did not produce a token.
#[derive(Debug, Error)]
pub enum IssueError {
    /// Caller input was rejected; maps to a 400 at the HTTP boundary.
    #[error(transparent)]
    Rejected(#[from] ValidationError),

    /// Signing itself failed; a server fault, not a caller error.
    #[error("failed to sign token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// Issues and verifies JWT tokens with an injected signing key.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenIssuer {
    pub fn new(key: &SigningKey) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(key.as_bytes()),
            decoding_key: DecodingKey::from_secret(key.as_bytes()),
            // HS256 with expiry checking
            validation: Validation::default(),
        }
    }

    /// Validate a login request and mint a token for the identifier.
    ///
    /// The password is checked for presence only — there is no credential
    /// store to compare it against, and that behavior is part of the
    /// service's observed contract rather than an oversight to patch here.
    pub fn issue(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<String, IssueError> {
        let username = match (username, password) {
            (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => u,
            _ => return Err(ValidationError::MissingCredentials.into()),
        };

        if !is_email_shaped(username) {
            return Err(ValidationError::InvalidIdentifierFormat.into());
        }

        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(TOKEN_TTL_SECS)).timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Validate a token's signature and expiry and return its claims.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .context("Failed to validate JWT token")?;
        Ok(data.claims)
    }
}
