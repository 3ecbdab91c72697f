//! # Authentication Configuration
//!
//! Typed settings for the authentication core: JWT signing, Google sign-in
//! and password hashing. Loaded from the environment exactly once via
//! [`AuthConfig::from_env`] and threaded through explicit constructors, so a
//! test can build an [`AuthConfig`] by hand without touching the process
//! environment.
//!
//! ## Security notes
//!
//! - `JWT_SECRET` is the HMAC signing key for every issued token. Rotating
//!   it is a configuration change (and invalidates outstanding tokens); no
//!   code change is required.
//! - `GOOGLE_CLIENT_ID` doubles as the expected `aud` claim of incoming
//!   Google ID tokens. It must never be echoed back in a client response.

use std::env;

/// JWT signing settings.
///
/// The secret is process-wide configuration; tokens are HMAC-SHA256 signed
/// and expire `expiration_hours` after issuance.
#[derive(Debug, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub expiration_hours: i64,
}

impl JwtSettings {
    /// Reads `JWT_SECRET` (required) and `JWT_EXPIRATION_HOURS`
    /// (default 168, i.e. 7 days).
    ///
    /// # Panics
    ///
    /// Panics when `JWT_SECRET` is unset. Starting without a signing key
    /// would silently issue unverifiable tokens, so startup aborts instead.
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        let expiration_hours = env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "168".to_string())
            .parse::<i64>()
            .unwrap_or_else(|e| {
                log::error!("JWT_EXPIRATION_HOURS parse failed: {}. Using default 168", e);
                168
            });

        Self {
            secret,
            expiration_hours,
        }
    }
}

/// Google sign-in settings.
#[derive(Debug, Clone)]
pub struct GoogleSettings {
    /// OAuth client id; also the expected `aud` claim of incoming ID tokens.
    pub client_id: String,
    /// Token verification endpoint. Overridable so tests can point it at a
    /// local stub.
    pub tokeninfo_uri: String,
}

impl GoogleSettings {
    /// Reads `GOOGLE_CLIENT_ID` (required) and `GOOGLE_TOKENINFO_URI`
    /// (defaults to Google's public endpoint).
    ///
    /// # Panics
    ///
    /// Panics when `GOOGLE_CLIENT_ID` is unset.
    pub fn from_env() -> Self {
        let client_id = env::var("GOOGLE_CLIENT_ID").expect("GOOGLE_CLIENT_ID must be set");

        let tokeninfo_uri = env::var("GOOGLE_TOKENINFO_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/tokeninfo".to_string());

        Self {
            client_id,
            tokeninfo_uri,
        }
    }
}

/// Password hashing settings.
#[derive(Debug, Clone)]
pub struct PasswordSettings {
    /// bcrypt cost factor. Higher is slower and stronger; tune per
    /// environment (development 4-8, production 10-14).
    pub bcrypt_cost: u32,
}

impl PasswordSettings {
    /// Reads `BCRYPT_COST` (default 10), clamped to bcrypt's valid 4..=31
    /// range.
    pub fn from_env() -> Self {
        let bcrypt_cost = env::var("BCRYPT_COST")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::error!("BCRYPT_COST parse failed: {}. Using default 10", e);
                10
            })
            .clamp(4, 31);

        Self { bcrypt_cost }
    }
}

/// Complete authentication configuration, assembled once in `main`.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt: JwtSettings,
    pub google: GoogleSettings,
    pub password: PasswordSettings,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            jwt: JwtSettings::from_env(),
            google: GoogleSettings::from_env(),
            password: PasswordSettings::from_env(),
        }
    }
}
