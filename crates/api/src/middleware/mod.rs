//! Request authentication.

pub mod auth;

pub use auth::{CurrentSession, OptionalSession, extract_token};
