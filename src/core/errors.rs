//! # Application Error Handling
//!
//! Unified error type for the whole service. Every failure path in the core
//! resolves to exactly one [`AppError`] variant, and each variant maps to one
//! HTTP status code and one client-safe JSON body through the
//! `actix_web::ResponseError` implementation.
//!
//! ## Status code mapping
//!
//! | Variant | HTTP Status | Scenario |
//! |---------|-------------|----------|
//! | `ValidationError` | 400 Bad Request | malformed/missing input |
//! | `EmailTaken` | 400 Bad Request | email uniqueness violation |
//! | `UsernameTaken` | 400 Bad Request | username uniqueness violation |
//! | `InvalidCredentials` | 401 Unauthorized | wrong email or password |
//! | `Unauthenticated` | 401 Unauthorized | missing/invalid/expired token |
//! | `Forbidden` | 403 Forbidden | valid identity, insufficient role |
//! | `GoogleVerificationFailed` | 401 Unauthorized | rejected Google credential |
//! | `UpstreamFailure` | 500 Internal Server Error | store/provider unavailable |
//! | `InternalError` | 500 Internal Server Error | unexpected system error |
//!
//! Authentication failures are deliberately indistinguishable at the
//! boundary: `InvalidCredentials` carries the same message whether the
//! account is missing or the password is wrong, and the three internal token
//! verification outcomes all collapse into `Unauthenticated`. Server-side
//! diagnostics (upstream detail, Google rejection reasons) are logged here
//! and never serialized into a response.

use thiserror::Error;

/// Application-wide error type.
///
/// Services return `Result<T, AppError>`; handlers let the `?` operator
/// bubble the error up to actix, which renders it via [`ResponseError`].
#[derive(Error, Debug)]
pub enum AppError {
    /// Client sent malformed or missing input. The message carries
    /// field-level detail and is safe to return.
    #[error("{0}")]
    ValidationError(String),

    /// An account with this email already exists. Registration endpoints may
    /// reveal which field conflicted; the caller is establishing a new
    /// identity, not probing an existing one.
    #[error("Email already registered")]
    EmailTaken,

    /// An account with this username already exists.
    #[error("Username already taken")]
    UsernameTaken,

    /// Wrong email or password. Covers both "account does not exist" and
    /// "hash mismatch" so the response carries no enumeration signal.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Missing, malformed, expired or otherwise rejected bearer token, or an
    /// account deleted out-of-band. The inner detail is for server logs; the
    /// client sees one generic message.
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// Authenticated identity lacks the required role.
    #[error("Insufficient permissions")]
    Forbidden,

    /// Google rejected the credential, or its claims failed local checks
    /// (audience mismatch, unverified email). The inner diagnostic must
    /// never reach the client: it may name the claim that failed.
    #[error("Google credential verification failed: {0}")]
    GoogleVerificationFailed(String),

    /// Account store or identity provider infrastructure unavailable.
    #[error("Upstream failure: {0}")]
    UpstreamFailure(String),

    /// Unexpected system error.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Message that is safe to put in the response body.
    ///
    /// Validation and conflict errors are returned verbatim; everything that
    /// could leak configuration or internals is replaced with a fixed
    /// generic string.
    fn client_message(&self) -> String {
        match self {
            AppError::ValidationError(_)
            | AppError::EmailTaken
            | AppError::UsernameTaken
            | AppError::InvalidCredentials
            | AppError::Forbidden => self.to_string(),
            AppError::Unauthenticated(_) => "Not authorized to access this route".to_string(),
            AppError::GoogleVerificationFailed(_) => "Google authentication failed".to_string(),
            AppError::UpstreamFailure(_) | AppError::InternalError(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) | AppError::EmailTaken | AppError::UsernameTaken => {
                StatusCode::BAD_REQUEST
            }
            AppError::InvalidCredentials
            | AppError::Unauthenticated(_)
            | AppError::GoogleVerificationFailed(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::UpstreamFailure(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        // Full detail server-side; generic detail client-side.
        match self {
            AppError::UpstreamFailure(_) | AppError::InternalError(_) => {
                log::error!("{}", self);
            }
            AppError::GoogleVerificationFailed(_) | AppError::Unauthenticated(_) => {
                log::warn!("{}", self);
            }
            _ => {}
        }

        actix_web::HttpResponse::build(self.status_code()).json(serde_json::json!({
            "message": self.client_message()
        }))
    }
}

/// Convenience alias used across services and repositories.
pub type AppResult<T> = Result<T, AppError>;
