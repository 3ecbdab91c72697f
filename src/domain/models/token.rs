//! JWT claim set.

use serde::{Deserialize, Serialize};

use crate::domain::role::Role;

/// Claims carried by every issued token.
///
/// Tokens are stateless and self-contained: `sub` is the account id and
/// `role` a snapshot of the role at issuance. The authorization gate
/// re-loads the account anyway, so a stale role claim cannot grant access
/// the current account no longer has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Account id (ObjectId hex).
    pub sub: String,
    pub role: Role,
    /// Issued-at, unix seconds.
    pub iat: i64,
    /// Expiry, unix seconds.
    pub exp: i64,
}
