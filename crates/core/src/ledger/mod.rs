//! Monthly payment and expense balances.
//!
//! Amounts are integer minor currency units. Totals are widened to `i64`
//! so a month of `i32` rows cannot overflow.

mod summary;

#[cfg(test)]
mod summary_props;

pub use summary::MonthlySummary;
