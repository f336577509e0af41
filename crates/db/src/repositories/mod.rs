//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod account;
pub mod building;
pub mod expense;
pub mod payment;
pub mod resident;
pub mod session;
pub mod user;
pub mod verification_token;

pub use account::{AccountRepository, LinkAccountInput};
pub use building::BuildingRepository;
pub use expense::{CreateExpenseInput, ExpenseRepository};
pub use payment::{CreatePaymentInput, PaymentRepository};
pub use resident::ResidentRepository;
pub use session::SessionRepository;
pub use user::{CreateUserInput, UserRepository};
pub use verification_token::VerificationTokenRepository;
