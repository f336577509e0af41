//! `SeaORM` entity definitions.
//!
//! Every table carries the `condos_` prefix so the schema can share a
//! database with other projects.

pub mod prelude;

pub mod accounts;
pub mod buildings;
pub mod expenses;
pub mod payments;
pub mod residents;
pub mod sessions;
pub mod users;
pub mod verification_tokens;
