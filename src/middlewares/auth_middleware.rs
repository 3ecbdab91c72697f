//! JWT authentication middleware.
//!
//! Wraps a scope or route and rejects requests that do not carry a valid
//! `Authorization: Bearer <token>` header for a still-existing account.
//! On success the loaded account is stored in the request extensions as an
//! [`AuthenticatedUser`](crate::domain::models::AuthenticatedUser) for
//! handlers to extract.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::domain::Role;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// Role constraint a guarded scope imposes on top of authentication.
#[derive(Debug, Clone)]
pub enum RequiredRole {
    /// The account must hold exactly this role.
    Single(Role),
    /// The account must hold one of these roles.
    Any(Vec<Role>),
}

impl RequiredRole {
    pub fn is_satisfied(&self, role: Role) -> bool {
        match self {
            RequiredRole::Single(required) => role == *required,
            RequiredRole::Any(allowed) => allowed.contains(&role),
        }
    }
}

/// Authentication gate for protected routes.
pub struct AuthMiddleware {
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    /// Requires a valid token; any role passes.
    pub fn required() -> Self {
        Self {
            required_role: None,
        }
    }

    /// Requires a valid token held by an account with `role`.
    pub fn required_with_role(role: Role) -> Self {
        Self {
            required_role: Some(RequiredRole::Single(role)),
        }
    }

    /// Requires a valid token held by an account with any of `roles`.
    pub fn required_with_roles(roles: Vec<Role>) -> Self {
        Self {
            required_role: Some(RequiredRole::Any(roles)),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_role: self.required_role.clone(),
        }))
    }
}
