//! User Entity
//!
//! The single account model for both credential and Google-federated users.
//! A credential account carries a `password_hash` and no `google_id`; a
//! Google-only account carries a `google_id` and no `password_hash`; a
//! credential account that later signs in with Google ends up with both
//! (see the account resolver's merge path).

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::domain::role::Role;

/// One registered account.
///
/// Invariants (enforced by the store's unique indexes and the resolver):
/// - exactly one account per normalized (lowercased, trimmed) email;
/// - `username`, when present, is unique and matches 3-20 chars of
///   `[A-Za-z0-9_]`;
/// - `google_id`, when present, is unique;
/// - `created_at` is set once at insertion and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Normalized email, globally unique.
    pub email: String,
    /// Chosen at registration; absent for Google-only accounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Profile name, typically from the Google profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// bcrypt digest; None for accounts created purely through Google.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// Google's stable subject identifier (`sub` claim).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    pub is_google_user: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub role: Role,
    pub created_at: DateTime,
}

impl User {
    /// New credential account. Caller supplies the already-normalized email
    /// and the bcrypt digest.
    pub fn new_local(email: String, username: Option<String>, password_hash: String) -> Self {
        Self {
            id: None,
            email,
            username,
            display_name: None,
            password_hash: Some(password_hash),
            google_id: None,
            is_google_user: false,
            avatar_url: None,
            role: Role::User,
            created_at: DateTime::now(),
        }
    }

    /// New Google-federated account; no password hash.
    pub fn new_google(
        email: String,
        google_id: String,
        display_name: Option<String>,
        avatar_url: Option<String>,
    ) -> Self {
        Self {
            id: None,
            email,
            username: None,
            display_name,
            password_hash: None,
            google_id: Some(google_id),
            is_google_user: true,
            avatar_url,
            role: Role::User,
            created_at: DateTime::now(),
        }
    }

    /// Hex representation of the store-assigned id.
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// Whether this account is already linked to the given Google subject.
    pub fn is_linked_to(&self, google_id: &str) -> bool {
        self.google_id.as_deref() == Some(google_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_user_has_hash_and_no_google_link() {
        let user = User::new_local(
            "alice@example.com".to_string(),
            Some("alice01".to_string()),
            "$2b$10$digest".to_string(),
        );

        assert!(user.password_hash.is_some());
        assert!(user.google_id.is_none());
        assert!(!user.is_google_user);
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_google_user_has_no_password_hash() {
        let user = User::new_google(
            "bob@example.com".to_string(),
            "google-sub-1".to_string(),
            Some("Bob".to_string()),
            None,
        );

        assert!(user.password_hash.is_none());
        assert!(user.is_google_user);
        assert!(user.is_linked_to("google-sub-1"));
        assert!(!user.is_linked_to("google-sub-2"));
    }
}
