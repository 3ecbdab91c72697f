//! Request-scoped authenticated identity.

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use std::future::{Ready, ready};

use crate::domain::entities::User;
use crate::domain::role::Role;

/// The account loaded by the authorization gate for the current request.
///
/// Inserted into the request extensions by `AuthMiddleware` after the
/// bearer token has been verified and the account re-loaded from the store.
/// Handlers receive it through the [`FromRequest`] implementation.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

impl AuthenticatedUser {
    pub fn user_id(&self) -> String {
        self.user.id_string().unwrap_or_default()
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.user.role == role
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            // Extractor used on a route that is not behind AuthMiddleware:
            // a wiring mistake, not a client error.
            None => ready(Err(actix_web::error::ErrorInternalServerError(
                "AuthenticatedUser extracted outside an authenticated scope",
            ))),
        }
    }
}
