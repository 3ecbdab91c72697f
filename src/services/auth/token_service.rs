//! # Token Service
//!
//! Issues and verifies the HMAC-SHA256 JWTs that carry an authenticated
//! session. A token embeds the user's id (`sub`), role, issue time and
//! expiry; nothing else. The secret and lifetime come from
//! [`JwtSettings`](crate::config::JwtSettings).
//!
//! Verification failures are classified into [`TokenError`] variants so the
//! middleware can log precisely why a token was rejected, while every
//! variant still collapses to the same 401 response for the client.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::config::JwtSettings;
use crate::core::{AppError, AppResult};
use crate::domain::entities::User;
use crate::domain::models::TokenClaims;

/// Why a presented token was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,
    #[error("token signature is invalid")]
    SignatureInvalid,
    #[error("token is malformed")]
    Malformed,
}

impl From<TokenError> for AppError {
    fn from(e: TokenError) -> Self {
        AppError::Unauthenticated(e.to_string())
    }
}

/// Stateless JWT issuer and verifier.
///
/// Cloning is cheap enough for per-app-state storage; the keys are derived
/// once from the configured secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(settings: &JwtSettings) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            expiration_hours: settings.expiration_hours,
        }
    }

    /// Signs a token for `user`, valid for the configured lifetime.
    ///
    /// # Errors
    ///
    /// `InternalError` when the user has no id (never persisted) or when
    /// signing itself fails.
    pub fn issue(&self, user: &User) -> AppResult<String> {
        let sub = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("cannot issue token for unsaved user".into()))?;

        let now = Utc::now();
        let claims = TokenClaims {
            sub,
            role: user.role,
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.expiration_hours)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("token signing failed: {}", e)))
    }

    /// Verifies signature and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                _ => TokenError::Malformed,
            })
    }

    /// Strips the `Bearer ` scheme from an `Authorization` header value.
    pub fn extract_bearer_token(header_value: &str) -> Result<&str, TokenError> {
        header_value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(TokenError::Malformed)
    }
}
