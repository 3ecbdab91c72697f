//! # Credential Hasher
//!
//! bcrypt hashing and verification for account passwords.
//!
//! The cost factor is configuration, not a constant: it trades login latency
//! against brute-force resistance and differs between development and
//! production. Each digest embeds its own random salt and cost, so
//! verification never needs the original parameters.

use crate::config::PasswordSettings;
use crate::core::{AppError, AppResult};

/// Salted one-way password hasher.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn from_settings(settings: &PasswordSettings) -> Self {
        Self::new(settings.bcrypt_cost)
    }

    /// Produces a salted digest. Two calls with the same plaintext yield
    /// different digests (fresh salt each time).
    pub fn hash(&self, plaintext: &str) -> AppResult<String> {
        bcrypt::hash(plaintext, self.cost)
            .map_err(|e| AppError::InternalError(format!("password hashing failed: {}", e)))
    }

    /// Constant-time verification of a plaintext against a stored digest.
    ///
    /// Deliberately total: a missing digest (Google-only account being
    /// probed with a password) and a malformed digest both return `false`
    /// instead of erroring, so the caller can map every mismatch to the
    /// same `InvalidCredentials` outcome.
    pub fn verify(&self, plaintext: &str, digest: Option<&str>) -> bool {
        match digest {
            Some(digest) => bcrypt::verify(plaintext, digest).unwrap_or(false),
            None => false,
        }
    }
}
