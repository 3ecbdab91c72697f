//! User store.
//!
//! [`UserRepository`] is the contract the authentication core depends on;
//! [`user_repo::MongoUserRepository`] is the production implementation and
//! [`memory::InMemoryUserRepository`] a contract-faithful substitute for
//! tests.

pub mod memory;
pub mod user_repo;

use async_trait::async_trait;

use crate::core::AppResult;
use crate::domain::entities::User;

pub use memory::InMemoryUserRepository;
pub use user_repo::MongoUserRepository;

/// Contract between the authentication core and the account store.
///
/// Uniqueness of `email` and `username` is the store's responsibility:
/// `insert` must fail with `AppError::EmailTaken`/`AppError::UsernameTaken`
/// when a concurrent writer got there first, which is what makes dual
/// registration race-safe without application-level locking.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Looks up an account by normalized email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Looks up an account by username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Looks up an account by its id. An id that cannot be parsed simply
    /// does not exist in the store, so it yields `Ok(None)` rather than an
    /// error; the authorization gate turns that into a 401.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// Inserts a new account and returns it with the store-assigned id.
    /// Uniqueness violations surface as `EmailTaken`/`UsernameTaken`.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// Merges Google link fields onto an existing account and returns the
    /// updated record. `Ok(None)` when the account vanished in between.
    async fn link_google(
        &self,
        id: &str,
        google_id: &str,
        avatar_url: Option<&str>,
    ) -> AppResult<Option<User>>;
}
