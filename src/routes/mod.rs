//! Route wiring.
//!
//! Three groups:
//!
//! - `GET /health` — liveness probe, no auth;
//! - `POST /auth/{register,login,google}` — public by nature, they are how
//!   a client obtains a token;
//! - `GET /auth/profile` — behind [`AuthMiddleware::required()`].
//!
//! Role-restricted scopes are wired the same way with
//! `AuthMiddleware::required_with_role(Role::Admin)`.

use actix_web::web;
use serde_json::json;

use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// Registers every route of the service.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);
    configure_auth_routes(cfg);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    // Protected scope first: its prefix is more specific than /auth.
    cfg.service(
        web::scope("/auth/profile")
            .wrap(AuthMiddleware::required())
            .service(handlers::auth::profile),
    );

    // Public: these endpoints mint tokens, they cannot require one.
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::google_login),
    );
}

/// Liveness probe.
///
/// # Endpoint
/// `GET /health`
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "account_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
