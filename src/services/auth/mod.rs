//! Authentication services: password hashing, JWT issuance/verification and
//! Google credential verification.

pub mod google_auth_service;
pub mod password;
pub mod token_service;

pub use google_auth_service::GoogleAuthService;
pub use password::PasswordHasher;
pub use token_service::{TokenError, TokenService};
