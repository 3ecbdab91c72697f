//! Inner service of the authentication middleware.
//!
//! Performs the per-request work: bearer token extraction, signature and
//! expiry verification, account lookup and role enforcement. Failures are
//! rendered through [`AppError::error_response`] so guarded routes produce
//! the same `{"message": ...}` error bodies as the handlers.

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::{Error, HttpMessage, ResponseError, web};
use futures_util::future::LocalBoxFuture;

use crate::core::{AppError, AppState};
use crate::domain::models::AuthenticatedUser;
use crate::middlewares::auth_middleware::RequiredRole;
use crate::services::auth::TokenService;

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let user = match authenticate(&req).await {
                Ok(user) => user,
                Err(err) => {
                    log::warn!("authentication failed: {}", err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            };

            if let Some(ref required) = required_role {
                if !required.is_satisfied(user.role()) {
                    log::warn!(
                        "insufficient role for user {}: has {}, needs {:?}",
                        user.user_id(),
                        user.role(),
                        required
                    );
                    let response = AppError::Forbidden.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            log::debug!("authenticated user {}", user.user_id());
            req.extensions_mut().insert(user);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Verifies the bearer token and loads the account it names.
///
/// A token for a deleted account is as unauthenticated as no token at all;
/// only a store failure surfaces as a 500.
async fn authenticate(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::InternalError("AppState is not registered".to_string()))?;

    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            AppError::Unauthenticated("missing Authorization header".to_string())
        })?;

    let token = TokenService::extract_bearer_token(auth_header)?;
    let claims = state.token_service.verify(token)?;

    let user = state
        .user_repo
        .find_by_id(&claims.sub)
        .await?
        .ok_or_else(|| {
            AppError::Unauthenticated(format!("token subject {} no longer exists", claims.sub))
        })?;

    Ok(AuthenticatedUser { user })
}
