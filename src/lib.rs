//! # Account Service
//!
//! User account backend: credential registration and login, Google
//! federated sign-in and JWT-protected routes, backed by MongoDB.
//!
//! # Features
//!
//! - **Registration**: email/username/password accounts with bcrypt hashing
//! - **Credential login**: uniform failure responses, no account enumeration
//! - **Google sign-in**: ID-token verification with account auto-creation
//!   and linking onto existing password accounts
//! - **JWT protection**: middleware-gated routes with optional role checks
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST endpoints + auth middleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← request validation, response shaping
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← registration, login, tokens, Google
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserRepository trait
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← users collection, unique indexes
//! └─────────────────┘
//! ```
//!
//! All collaborators are wired explicitly in [`core::AppState`] and shared
//! through `web::Data`; tests swap the MongoDB repository for the in-memory
//! one without touching anything else.

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
