//! Request DTOs
//!
//! JSON bodies accepted by the auth endpoints, with `validator`-derived
//! input checks. Handlers call `.validate()` before touching any service;
//! a failure becomes a 400 with field-level detail.

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Optional handle. When present: 3-20 chars of letters, digits and
    /// underscore, unique across all accounts.
    #[validate(length(min = 3, max = 20, message = "Username must be 3-20 characters"))]
    #[validate(custom(function = "validate_username"))]
    pub username: Option<String>,

    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Please provide email and password"))]
    pub password: String,
}

/// Body of `POST /auth/google`. The credential is the ID token produced by
/// Google Identity Services on the client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GoogleLoginRequest {
    #[validate(length(min = 1, message = "Credential is required"))]
    pub credential: String,
}

/// Username charset check: ASCII letters, digits and underscore only.
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ValidationError::new("invalid_username")
            .with_message("Username may only contain letters, digits and underscore".into()));
    }
    Ok(())
}
