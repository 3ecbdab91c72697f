//! # MongoDB User Repository
//!
//! Production [`UserRepository`] over the `users` collection.
//!
//! ## Indexes
//!
//! Created once at startup by [`MongoUserRepository::create_indexes`]:
//!
//! - `email_unique` — unique ascending index on `email`
//! - `username_unique` — unique **sparse** index on `username` (Google-only
//!   accounts have no username)
//! - `google_id_unique` — unique sparse index on `google_id`
//!
//! These indexes are the authoritative uniqueness arbiter: the service
//! layer may pre-check for conflicts as a courtesy, but under a dual
//! registration race it is the duplicate-key error (code 11000) on insert
//! that decides the winner. [`conflict_from_duplicate_key`] translates that
//! error back into the conflict the client should see.

use async_trait::async_trait;
use mongodb::{
    IndexModel,
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
};
use std::sync::Arc;

use crate::core::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::User;
use crate::repositories::users::UserRepository;

const COLLECTION: &str = "users";

/// Duplicate-key error code raised by MongoDB's unique indexes.
const DUPLICATE_KEY: i32 = 11000;

/// MongoDB-backed user store.
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION)
    }

    /// Creates the unique indexes backing the account invariants. Called
    /// once at startup, before the server accepts requests.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .sparse(true)
                    .name("username_unique".to_string())
                    .build(),
            )
            .build();

        let google_id_index = IndexModel::builder()
            .keys(doc! { "google_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .sparse(true)
                    .name("google_id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([email_index, username_index, google_id_index])
            .await
            .map_err(|e| AppError::UpstreamFailure(format!("index creation failed: {}", e)))?;

        Ok(())
    }
}

/// Maps a MongoDB duplicate-key error to the conflict it represents, based
/// on which unique index rejected the write. Returns `None` for every other
/// error kind.
fn conflict_from_duplicate_key(error: &mongodb::error::Error) -> Option<AppError> {
    if let mongodb::error::ErrorKind::Write(mongodb::error::WriteFailure::WriteError(write_error)) =
        &*error.kind
    {
        if write_error.code == DUPLICATE_KEY {
            return Some(if write_error.message.contains("username") {
                AppError::UsernameTaken
            } else {
                AppError::EmailTaken
            });
        }
    }
    None
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::UpstreamFailure(format!("user lookup by email failed: {}", e)))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| {
                AppError::UpstreamFailure(format!("user lookup by username failed: {}", e))
            })
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        // A sub claim that is not a valid ObjectId cannot reference any
        // stored account.
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::UpstreamFailure(format!("user lookup by id failed: {}", e)))
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self.collection().insert_one(&user).await.map_err(|e| {
            conflict_from_duplicate_key(&e)
                .unwrap_or_else(|| AppError::UpstreamFailure(format!("user insert failed: {}", e)))
        })?;

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }

    async fn link_google(
        &self,
        id: &str,
        google_id: &str,
        avatar_url: Option<&str>,
    ) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let mut fields = doc! {
            "google_id": google_id,
            "is_google_user": true,
        };
        if let Some(url) = avatar_url {
            fields.insert("avatar_url", url);
        }

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": fields })
            .with_options(options)
            .await
            .map_err(|e| AppError::UpstreamFailure(format!("google link update failed: {}", e)))
    }
}
