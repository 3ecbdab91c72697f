//! # Google Auth Service
//!
//! Accepts a Google ID token (the `credential` string a Google Identity
//! Services button hands the frontend) and resolves it to a local account.
//!
//! Verification is delegated to Google's `tokeninfo` endpoint, which checks
//! the token's signature against Google's published keys along with its
//! issuer and expiry. Two checks remain local and are never skipped:
//!
//! - the `aud` claim must equal our configured client id, otherwise a valid
//!   token minted for some other application would log into ours;
//! - the email must be verified, otherwise anyone who can register an
//!   unverified address at Google could take over the matching local account.
//!
//! ## Account resolution
//!
//! | Local account for the email | Outcome |
//! |-----------------------------|---------|
//! | none | new Google account inserted |
//! | linked to the same `sub` | returned as-is |
//! | linked to a different `sub` | rejected, 401 |
//! | unlinked (password account) | Google link merged onto it |

use std::sync::Arc;

use crate::config::GoogleSettings;
use crate::core::{AppError, AppResult};
use crate::domain::entities::User;
use crate::domain::models::GoogleClaims;
use crate::repositories::users::UserRepository;
use crate::utils::string_utils::normalize_email;

pub struct GoogleAuthService {
    expected_audience: String,
    tokeninfo_uri: String,
    http: reqwest::Client,
    user_repo: Arc<dyn UserRepository>,
}

impl GoogleAuthService {
    pub fn new(settings: &GoogleSettings, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            expected_audience: settings.client_id.clone(),
            tokeninfo_uri: settings.tokeninfo_uri.clone(),
            http: reqwest::Client::new(),
            user_repo,
        }
    }

    /// Full federated sign-in: verify the credential with Google, then
    /// resolve or create the local account.
    pub async fn authenticate_with_credential(&self, credential: &str) -> AppResult<User> {
        let claims = self.verify_id_token(credential).await?;
        self.resolve_account(claims).await
    }

    /// Sends the credential to the `tokeninfo` endpoint and applies the
    /// local audience and email-verification checks.
    ///
    /// # Errors
    ///
    /// - `UpstreamFailure` when Google cannot be reached (our problem, 500);
    /// - `GoogleVerificationFailed` for everything wrong with the credential
    ///   itself (the caller's problem, 401).
    async fn verify_id_token(&self, credential: &str) -> AppResult<GoogleClaims> {
        let response = self
            .http
            .get(&self.tokeninfo_uri)
            .query(&[("id_token", credential)])
            .send()
            .await
            .map_err(|e| {
                AppError::UpstreamFailure(format!("tokeninfo request failed: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(AppError::GoogleVerificationFailed(format!(
                "tokeninfo rejected the credential with status {}",
                response.status()
            )));
        }

        let claims: GoogleClaims = response.json().await.map_err(|e| {
            AppError::GoogleVerificationFailed(format!("tokeninfo payload unreadable: {}", e))
        })?;

        self.check_audience(&claims)?;

        if !claims.email_is_verified() {
            return Err(AppError::GoogleVerificationFailed(format!(
                "unverified email address for subject {}",
                claims.sub
            )));
        }

        Ok(claims)
    }

    /// The diagnostic names the token's audience, never our client id.
    fn check_audience(&self, claims: &GoogleClaims) -> AppResult<()> {
        if claims.aud.trim() != self.expected_audience.trim() {
            return Err(AppError::GoogleVerificationFailed(format!(
                "audience mismatch: token was minted for {}",
                claims.aud
            )));
        }
        Ok(())
    }

    /// Maps verified claims to a local account per the resolution table in
    /// the module docs.
    async fn resolve_account(&self, claims: GoogleClaims) -> AppResult<User> {
        let email = normalize_email(&claims.email);

        let existing = match self.user_repo.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                let candidate = User::new_google(
                    email.clone(),
                    claims.sub.clone(),
                    claims.name.clone(),
                    claims.picture.clone(),
                );
                match self.user_repo.insert(candidate).await {
                    Ok(user) => return Ok(user),
                    // Lost an insert race against a concurrent registration
                    // for the same email; fall through to the link path.
                    Err(AppError::EmailTaken) => self
                        .user_repo
                        .find_by_email(&email)
                        .await?
                        .ok_or_else(|| {
                            AppError::InternalError(
                                "account vanished after duplicate-email insert".into(),
                            )
                        })?,
                    Err(e) => return Err(e),
                }
            }
        };

        if existing.is_linked_to(&claims.sub) {
            return Ok(existing);
        }

        if existing.google_id.is_some() {
            // The email's account belongs to a different Google identity.
            return Err(AppError::GoogleVerificationFailed(format!(
                "email {} is linked to another Google account",
                email
            )));
        }

        let id = existing.id_string().ok_or_else(|| {
            AppError::InternalError("stored account has no id".into())
        })?;

        self.user_repo
            .link_google(&id, &claims.sub, claims.picture.as_deref())
            .await?
            .ok_or_else(|| {
                AppError::InternalError("account vanished while linking Google identity".into())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::InMemoryUserRepository;

    fn service(repo: Arc<dyn UserRepository>) -> GoogleAuthService {
        GoogleAuthService::new(
            &GoogleSettings {
                client_id: "our-client-id.apps.googleusercontent.com".to_string(),
                tokeninfo_uri: "http://127.0.0.1:0/tokeninfo".to_string(),
            },
            repo,
        )
    }

    fn claims(sub: &str, email: &str) -> GoogleClaims {
        GoogleClaims {
            sub: sub.to_string(),
            aud: "our-client-id.apps.googleusercontent.com".to_string(),
            email: email.to_string(),
            email_verified: Some("true".to_string()),
            name: Some("Carol Example".to_string()),
            picture: Some("https://lh3.googleusercontent.com/a/carol.jpg".to_string()),
        }
    }

    #[test]
    fn test_audience_comparison_trims_whitespace() {
        let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let svc = service(repo);

        let mut c = claims("sub-1", "carol@example.com");
        c.aud = " our-client-id.apps.googleusercontent.com ".to_string();
        assert!(svc.check_audience(&c).is_ok());

        c.aud = "someone-elses-client-id".to_string();
        assert!(matches!(
            svc.check_audience(&c),
            Err(AppError::GoogleVerificationFailed(_))
        ));
    }

    #[test]
    fn test_audience_error_never_names_expected_value() {
        let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let svc = service(repo);

        let mut c = claims("sub-1", "carol@example.com");
        c.aud = "attacker-client-id".to_string();

        let Err(AppError::GoogleVerificationFailed(detail)) = svc.check_audience(&c) else {
            panic!("expected audience rejection");
        };
        assert!(detail.contains("attacker-client-id"));
        assert!(!detail.contains("our-client-id"));
    }

    #[actix_web::test]
    async fn test_first_sign_in_creates_google_account() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let svc = service(repo.clone());

        let user = svc
            .resolve_account(claims("sub-1", "Carol@Example.com"))
            .await
            .unwrap();

        assert_eq!(user.email, "carol@example.com");
        assert!(user.is_google_user);
        assert!(user.is_linked_to("sub-1"));
        assert!(user.password_hash.is_none());
        assert_eq!(user.display_name.as_deref(), Some("Carol Example"));
        assert!(user.id.is_some());
    }

    #[actix_web::test]
    async fn test_repeat_sign_in_is_idempotent() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let svc = service(repo.clone());

        let first = svc
            .resolve_account(claims("sub-1", "carol@example.com"))
            .await
            .unwrap();
        let second = svc
            .resolve_account(claims("sub-1", "carol@example.com"))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
    }

    #[actix_web::test]
    async fn test_sign_in_links_existing_password_account() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let existing = repo
            .insert(User::new_local(
                "carol@example.com".to_string(),
                Some("carol".to_string()),
                "$2b$04$digest".to_string(),
            ))
            .await
            .unwrap();

        let svc = service(repo.clone());
        let linked = svc
            .resolve_account(claims("sub-1", "carol@example.com"))
            .await
            .unwrap();

        assert_eq!(linked.id, existing.id);
        assert!(linked.is_linked_to("sub-1"));
        assert!(linked.is_google_user);
        // The password stays; the account can still log in with credentials.
        assert_eq!(linked.password_hash.as_deref(), Some("$2b$04$digest"));
        assert_eq!(linked.username.as_deref(), Some("carol"));
    }

    #[actix_web::test]
    async fn test_sign_in_with_foreign_google_identity_rejected() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let svc = service(repo.clone());

        svc.resolve_account(claims("sub-1", "carol@example.com"))
            .await
            .unwrap();

        let result = svc
            .resolve_account(claims("sub-2", "carol@example.com"))
            .await;
        assert!(matches!(
            result,
            Err(AppError::GoogleVerificationFailed(_))
        ));
    }
}
