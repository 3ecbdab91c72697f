//! Response DTOs
//!
//! One canonical user representation is used by every endpoint (register,
//! login, Google login, profile). The field scheme is fixed: `username`,
//! `display_name` and `avatar_url`, never the `name`/`avatar` aliases.
//! Sensitive fields (`password_hash`, `google_id`) are never serialized.

use serde::Serialize;

use crate::domain::entities::User;
use crate::domain::role::Role;

/// Public view of an account.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            username: user.username,
            email: user.email,
            display_name: user.display_name,
            avatar_url: user.avatar_url,
            role: user.role,
        }
    }
}

/// Body of a successful `POST /auth/register`.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Body of a successful `POST /auth/login` or `POST /auth/google`.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserResponse,
    pub token: String,
}
