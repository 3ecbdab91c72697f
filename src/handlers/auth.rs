//! Authentication HTTP Handlers
//!
//! The four account endpoints: registration, credential login, Google
//! federated login and the token-protected profile. Handlers stay thin:
//! validate the payload, call the matching service, shape the response.
//! Every error path rides the `?` operator into [`AppError`]'s
//! `ResponseError` rendering.

use actix_web::{HttpResponse, get, post, web};
use serde_json::json;
use validator::Validate;

use crate::core::{AppError, AppState};
use crate::domain::dto::requests::{GoogleLoginRequest, LoginRequest, RegisterRequest};
use crate::domain::dto::responses::{LoginResponse, RegisterResponse, UserResponse};
use crate::domain::models::AuthenticatedUser;

/// Creates a credential account.
///
/// # Endpoint
/// `POST /auth/register`
///
/// Responds 201 with the created account. No token is issued; the client
/// logs in as a separate step.
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = state.user_service.register(payload.into_inner()).await?;
    log::info!("registered account {}", user.id_string().unwrap_or_default());

    Ok(HttpResponse::Created().json(RegisterResponse {
        message: "Registration successful".to_string(),
        user: UserResponse::from(user),
    }))
}

/// Email plus password login.
///
/// # Endpoint
/// `POST /auth/login`
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = state
        .user_service
        .verify_credentials(&payload.email, &payload.password)
        .await?;
    let token = state.token_service.issue(&user)?;

    log::info!("login for account {}", user.id_string().unwrap_or_default());

    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "Login successful".to_string(),
        user: UserResponse::from(user),
        token,
    }))
}

/// Google federated login. The body carries the ID token produced by
/// Google Identity Services on the client.
///
/// # Endpoint
/// `POST /auth/google`
#[post("/google")]
pub async fn google_login(
    state: web::Data<AppState>,
    payload: web::Json<GoogleLoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = state
        .google_auth
        .authenticate_with_credential(&payload.credential)
        .await?;
    let token = state.token_service.issue(&user)?;

    log::info!(
        "google login for account {}",
        user.id_string().unwrap_or_default()
    );

    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "Google login successful".to_string(),
        user: UserResponse::from(user),
        token,
    }))
}

/// Returns the authenticated account. Doubles as token verification: a 200
/// means the presented token is valid and its account still exists.
///
/// # Endpoint
/// `GET /auth/profile` (behind `AuthMiddleware::required()`)
#[get("")]
pub async fn profile(auth: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(json!({
        "user": UserResponse::from(auth.user)
    })))
}
