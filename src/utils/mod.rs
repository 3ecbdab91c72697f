//! Small shared helpers.

pub mod string_utils;

pub use string_utils::normalize_email;
