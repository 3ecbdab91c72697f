//! # User Service
//!
//! Credential-account lifecycle: registration and password login. Federated
//! sign-in lives in the Google auth service; both converge on the same
//! [`UserRepository`] and [`User`] entity.

use std::sync::Arc;

use crate::core::{AppError, AppResult};
use crate::domain::dto::requests::RegisterRequest;
use crate::domain::entities::User;
use crate::repositories::users::UserRepository;
use crate::services::auth::PasswordHasher;
use crate::utils::string_utils::normalize_email;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    password_hasher: PasswordHasher,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, password_hasher: PasswordHasher) -> Self {
        Self {
            user_repo,
            password_hasher,
        }
    }

    /// Creates a credential account.
    ///
    /// The pre-checks give the common case a precise error without paying
    /// for a bcrypt hash; the store's unique indexes remain the authority,
    /// so a conflicting concurrent insert still comes back as
    /// `EmailTaken`/`UsernameTaken`.
    ///
    /// # Errors
    ///
    /// - `EmailTaken` when the normalized email already has an account;
    /// - `UsernameTaken` when the requested username is in use;
    /// - `UpstreamFailure`/`InternalError` for store or hashing trouble.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        let email = normalize_email(&request.email);

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::EmailTaken);
        }
        if let Some(ref username) = request.username {
            if self.user_repo.find_by_username(username).await?.is_some() {
                return Err(AppError::UsernameTaken);
            }
        }

        let password_hash = self.password_hasher.hash(&request.password)?;
        let user = User::new_local(email, request.username, password_hash);

        self.user_repo.insert(user).await
    }

    /// Password login.
    ///
    /// Every failure mode collapses to `InvalidCredentials`: unknown email,
    /// wrong password, and a Google-only account with no password all look
    /// identical to the caller, so the endpoint cannot be used to probe
    /// which emails are registered.
    pub async fn verify_credentials(&self, email: &str, password: &str) -> AppResult<User> {
        let email = normalize_email(email);

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !self
            .password_hasher
            .verify(password, user.password_hash.as_deref())
        {
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::InMemoryUserRepository;

    fn service() -> (Arc<InMemoryUserRepository>, UserService) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let svc = UserService::new(repo.clone(), PasswordHasher::new(4));
        (repo, svc)
    }

    fn request(username: Option<&str>, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.map(|u| u.to_string()),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_register_normalizes_email_and_hashes_password() {
        let (_, svc) = service();

        let user = svc
            .register(request(Some("alice01"), " Alice@Example.COM ", "secret1"))
            .await
            .unwrap();

        assert_eq!(user.email, "alice@example.com");
        assert!(user.id.is_some());
        let digest = user.password_hash.as_deref().unwrap();
        assert_ne!(digest, "secret1");
        assert!(digest.starts_with("$2"));
    }

    #[actix_web::test]
    async fn test_register_rejects_duplicate_email_case_insensitively() {
        let (_, svc) = service();

        svc.register(request(Some("alice01"), "alice@example.com", "secret1"))
            .await
            .unwrap();

        let result = svc
            .register(request(Some("other"), "ALICE@example.com", "secret1"))
            .await;
        assert!(matches!(result, Err(AppError::EmailTaken)));
    }

    #[actix_web::test]
    async fn test_register_rejects_duplicate_username() {
        let (_, svc) = service();

        svc.register(request(Some("alice01"), "a@example.com", "secret1"))
            .await
            .unwrap();

        let result = svc
            .register(request(Some("alice01"), "b@example.com", "secret1"))
            .await;
        assert!(matches!(result, Err(AppError::UsernameTaken)));
    }

    #[actix_web::test]
    async fn test_login_roundtrip() {
        let (_, svc) = service();

        svc.register(request(Some("alice01"), "alice@example.com", "secret1"))
            .await
            .unwrap();

        let user = svc
            .verify_credentials(" ALICE@example.com ", "secret1")
            .await
            .unwrap();
        assert_eq!(user.username.as_deref(), Some("alice01"));
    }

    #[actix_web::test]
    async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
        let (_, svc) = service();

        svc.register(request(Some("alice01"), "alice@example.com", "secret1"))
            .await
            .unwrap();

        let wrong_password = svc
            .verify_credentials("alice@example.com", "secret2")
            .await;
        let unknown_email = svc.verify_credentials("nobody@example.com", "secret1").await;

        assert!(matches!(wrong_password, Err(AppError::InvalidCredentials)));
        assert!(matches!(unknown_email, Err(AppError::InvalidCredentials)));
    }

    #[actix_web::test]
    async fn test_google_only_account_cannot_password_login() {
        let (repo, svc) = service();

        repo.insert(User::new_google(
            "carol@example.com".to_string(),
            "google-sub-1".to_string(),
            Some("Carol".to_string()),
            None,
        ))
        .await
        .unwrap();

        let result = svc.verify_credentials("carol@example.com", "anything").await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }
}
