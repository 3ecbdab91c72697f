//! Verified Google identity claims.

use serde::Deserialize;

/// Claim set returned by Google's `tokeninfo` endpoint for an ID token.
///
/// Reaching this type means Google already checked the token's signature,
/// issuer and expiry; the audience and email-verification checks remain our
/// responsibility. `tokeninfo` encodes booleans and numbers as JSON strings,
/// hence `email_verified: Option<String>`.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleClaims {
    /// Google's stable subject identifier.
    pub sub: String,
    /// Audience the token was minted for; must equal our client id.
    pub aud: String,
    pub email: String,
    #[serde(default)]
    pub email_verified: Option<String>,
    /// Full display name from the Google profile.
    #[serde(default)]
    pub name: Option<String>,
    /// Profile picture URL.
    #[serde(default)]
    pub picture: Option<String>,
}

impl GoogleClaims {
    /// Google marks unverified addresses with `"false"`; absence of the
    /// claim is treated as verified for tokens that carried an email scope.
    pub fn email_is_verified(&self) -> bool {
        self.email_verified.as_deref() != Some("false")
    }
}
