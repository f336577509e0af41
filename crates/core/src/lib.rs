//! Core business rules for Condos.
//!
//! This crate contains pure domain logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `building` - Building defaults and creation input
//! - `resident` - Resident defaults and payment attribution
//! - `ledger` - Monthly payment/expense balances
//! - `messages` - Strings returned by diagnostic procedures

pub mod building;
pub mod ledger;
pub mod messages;
pub mod resident;
