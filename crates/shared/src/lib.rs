//! Shared types, errors, and configuration for Condos.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error types
//! - Configuration management
//! - Session and procedure payload types
//! - The `Month` value type used by payments and expenses

pub mod auth;
pub mod config;
pub mod error;
pub mod requests;
pub mod types;

pub use auth::{Session, SessionUser};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::Month;
