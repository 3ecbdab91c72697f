//! Core infrastructure: the application error type and shared state.

pub mod errors;
pub mod state;

pub use errors::{AppError, AppResult};
pub use state::AppState;
