//! Process-lifetime JWT signing key.

use rand::RngCore;
use std::fmt;

/// Symmetric secret used to sign and verify tokens.
///
/// Built once at startup and handed to the [`TokenIssuer`] at construction,
/// so every token minted by one process shares it and tokens do not survive
/// a restart unless `JWT_SECRET` is pinned in the environment.
///
/// [`TokenIssuer`]: crate::auth::jwt::TokenIssuer
pub struct SigningKey(String);

impl SigningKey {
    /// Use `JWT_SECRET` if set, otherwise generate a fresh random secret.
    pub fn from_env_or_generate() -> Self {
        match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => Self(secret),
            _ => Self::generate(),
        }
    }

    /// Generate a random 32-byte secret, hex-encoded.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

// The secret must never end up in logs or error output.
impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(..)")
    }
}
