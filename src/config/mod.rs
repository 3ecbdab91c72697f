//! # Configuration Module
//!
//! Environment-variable based configuration, read once at startup.
//!
//! Unlike ad-hoc `env::var` calls scattered through the code, everything the
//! authentication core depends on (signing secret, token lifetime, expected
//! Google audience, bcrypt cost) is collected into [`AuthConfig`] in `main`
//! and passed into the services at construction time. Server and database
//! settings stay in [`data_config`] since only the binary entry point reads
//! them.
//!
//! ## Environment variables
//!
//! ```bash
//! # Required
//! export JWT_SECRET="your-signing-secret"
//! export GOOGLE_CLIENT_ID="123456789-abc.apps.googleusercontent.com"
//!
//! # Optional (defaults in parentheses)
//! export JWT_EXPIRATION_HOURS="168"      # token TTL (7 days)
//! export BCRYPT_COST="10"                # 4-31
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="account_service_dev"
//! ```

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;
