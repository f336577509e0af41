//! Common types used across the application.

pub mod month;

pub use month::{Month, MonthError};
