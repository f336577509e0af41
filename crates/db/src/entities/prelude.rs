//! Entity re-exports.

pub use super::accounts::Entity as Accounts;
pub use super::buildings::Entity as Buildings;
pub use super::expenses::Entity as Expenses;
pub use super::payments::Entity as Payments;
pub use super::residents::Entity as Residents;
pub use super::sessions::Entity as Sessions;
pub use super::users::Entity as Users;
pub use super::verification_tokens::Entity as VerificationTokens;
