//! Shared building blocks for the eventide crates: errors, configuration
//! and the small enums every layer agrees on.

pub mod config;
pub mod error;
pub mod types;
