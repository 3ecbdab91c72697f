//! User roles.
//!
//! A closed enumeration instead of free-form role strings: an unknown role
//! cannot exist past deserialization, and the authorization gate matches on
//! variants rather than comparing strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role attached to every account. New accounts default to [`Role::User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
