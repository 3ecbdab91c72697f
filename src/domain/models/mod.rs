//! Internal auth models: token claims, Google claims and the
//! request-scoped authenticated user.

pub mod authenticated_user;
pub mod google_claims;
pub mod token;

pub use authenticated_user::AuthenticatedUser;
pub use google_claims::GoogleClaims;
pub use token::TokenClaims;
