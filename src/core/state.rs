//! Shared application state.
//!
//! Everything a request handler or middleware needs is built once at startup
//! and handed to actix as `web::Data<AppState>`. Services receive their
//! configuration and collaborators at construction time; there are no
//! ambient/global lookups, which keeps tests free to substitute their own
//! configuration and store.

use std::sync::Arc;

use crate::config::AuthConfig;
use crate::repositories::users::UserRepository;
use crate::services::auth::{GoogleAuthService, PasswordHasher, TokenService};
use crate::services::users::UserService;

/// Read-only per-process state shared by all in-flight requests.
pub struct AppState {
    pub user_repo: Arc<dyn UserRepository>,
    pub user_service: UserService,
    pub token_service: TokenService,
    pub google_auth: GoogleAuthService,
}

impl AppState {
    /// Wires the service graph from configuration and a user store.
    pub fn new(config: &AuthConfig, user_repo: Arc<dyn UserRepository>) -> Self {
        let password_hasher = PasswordHasher::from_settings(&config.password);
        let user_service = UserService::new(user_repo.clone(), password_hasher);
        let token_service = TokenService::new(&config.jwt);
        let google_auth = GoogleAuthService::new(&config.google, user_repo.clone());

        Self {
            user_repo,
            user_service,
            token_service,
            google_auth,
        }
    }
}
