//! Monthly summary of a building's ledger.

use condos_shared::Month;
use serde::Serialize;

/// Totals of one building's payments and expenses for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    /// Building the summary covers.
    pub building_id: i32,
    /// Month the summary covers.
    pub month: Month,
    /// Sum of payment amounts.
    pub payments_total: i64,
    /// Number of payments.
    pub payment_count: usize,
    /// Sum of expense amounts.
    pub expenses_total: i64,
    /// Number of expenses.
    pub expense_count: usize,
    /// `payments_total - expenses_total`.
    pub balance: i64,
}

impl MonthlySummary {
    /// Computes the summary from the month's payment and expense amounts.
    pub fn compute<P, E>(building_id: i32, month: Month, payments: P, expenses: E) -> Self
    where
        P: IntoIterator<Item = i32>,
        E: IntoIterator<Item = i32>,
    {
        let (payments_total, payment_count) = total(payments);
        let (expenses_total, expense_count) = total(expenses);

        Self {
            building_id,
            month,
            payments_total,
            payment_count,
            expenses_total,
            expense_count,
            balance: payments_total - expenses_total,
        }
    }
}

fn total<I: IntoIterator<Item = i32>>(amounts: I) -> (i64, usize) {
    amounts
        .into_iter()
        .fold((0, 0), |(sum, count), amount| {
            (sum + i64::from(amount), count + 1)
        })
}
