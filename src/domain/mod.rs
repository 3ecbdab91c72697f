//! Domain layer: entities, request/response DTOs and auth models.

pub mod dto;
pub mod entities;
pub mod models;
pub mod role;

pub use role::Role;
