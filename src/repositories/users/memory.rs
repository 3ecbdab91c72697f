//! In-memory user store.
//!
//! Implements the same contract as the MongoDB repository, including
//! insert-time uniqueness arbitration, so service and integration tests can
//! run against a real [`UserRepository`] without a database. Not used by
//! the production binary.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Mutex;

use crate::core::{AppError, AppResult};
use crate::domain::entities::User;
use crate::repositories::users::UserRepository;

/// Mutex-guarded vector standing in for the `users` collection.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.username.as_deref() == Some(username))
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.id_string().as_deref() == Some(id))
            .cloned())
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();

        // Same arbitration order as the unique indexes: email first.
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::EmailTaken);
        }
        if let Some(ref username) = user.username {
            if users.iter().any(|u| u.username.as_ref() == Some(username)) {
                return Err(AppError::UsernameTaken);
            }
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn link_google(
        &self,
        id: &str,
        google_id: &str,
        avatar_url: Option<&str>,
    ) -> AppResult<Option<User>> {
        let mut users = self.users.lock().unwrap();

        let Some(user) = users
            .iter_mut()
            .find(|u| u.id_string().as_deref() == Some(id))
        else {
            return Ok(None);
        };

        user.google_id = Some(google_id.to_string());
        user.is_google_user = true;
        if let Some(url) = avatar_url {
            user.avatar_url = Some(url.to_string());
        }

        Ok(Some(user.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_insert_assigns_id_and_enforces_email_uniqueness() {
        let repo = InMemoryUserRepository::new();

        let first = repo
            .insert(User::new_local(
                "alice@example.com".to_string(),
                Some("alice01".to_string()),
                "hash".to_string(),
            ))
            .await
            .unwrap();
        assert!(first.id.is_some());

        let second = repo
            .insert(User::new_local(
                "alice@example.com".to_string(),
                Some("other".to_string()),
                "hash".to_string(),
            ))
            .await;
        assert!(matches!(second, Err(AppError::EmailTaken)));
    }

    #[actix_web::test]
    async fn test_username_conflict() {
        let repo = InMemoryUserRepository::new();

        repo.insert(User::new_local(
            "a@example.com".to_string(),
            Some("taken".to_string()),
            "hash".to_string(),
        ))
        .await
        .unwrap();

        let result = repo
            .insert(User::new_local(
                "b@example.com".to_string(),
                Some("taken".to_string()),
                "hash".to_string(),
            ))
            .await;
        assert!(matches!(result, Err(AppError::UsernameTaken)));
    }

    #[actix_web::test]
    async fn test_link_google_merges_fields() {
        let repo = InMemoryUserRepository::new();

        let user = repo
            .insert(User::new_local(
                "alice@example.com".to_string(),
                Some("alice01".to_string()),
                "hash".to_string(),
            ))
            .await
            .unwrap();

        let linked = repo
            .link_google(&user.id_string().unwrap(), "google-sub-1", Some("http://a/p.jpg"))
            .await
            .unwrap()
            .unwrap();

        assert!(linked.is_google_user);
        assert_eq!(linked.google_id.as_deref(), Some("google-sub-1"));
        assert_eq!(linked.avatar_url.as_deref(), Some("http://a/p.jpg"));
        // Password login capability is preserved.
        assert!(linked.password_hash.is_some());
    }

    #[actix_web::test]
    async fn test_find_by_unparseable_id_is_none() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.find_by_id("not-an-object-id").await.unwrap().is_none());
    }
}
