//! Request and response DTOs for the HTTP surface.

pub mod requests;
pub mod responses;

pub use requests::{GoogleLoginRequest, LoginRequest, RegisterRequest};
pub use responses::{LoginResponse, RegisterResponse, UserResponse};
