//! Property-based tests for monthly summaries.

use proptest::prelude::*;

use super::MonthlySummary;
use condos_shared::Month;

proptest! {
    /// Totals never overflow for any month of `i32` amounts.
    #[test]
    fn test_totals_match_widened_sums(
        payments in prop::collection::vec(0..=i32::MAX, 0..64),
        expenses in prop::collection::vec(0..=i32::MAX, 0..64),
    ) {
        let month = Month::new(2024, 1).unwrap();
        let summary = MonthlySummary::compute(1, month, payments.clone(), expenses.clone());

        let expected_payments: i64 = payments.iter().copied().map(i64::from).sum();
        let expected_expenses: i64 = expenses.iter().copied().map(i64::from).sum();

        prop_assert_eq!(summary.payments_total, expected_payments);
        prop_assert_eq!(summary.expenses_total, expected_expenses);
        prop_assert_eq!(summary.balance, expected_payments - expected_expenses);
        prop_assert_eq!(summary.payment_count, payments.len());
        prop_assert_eq!(summary.expense_count, expenses.len());
    }

    /// Order of rows does not change the summary.
    #[test]
    fn test_order_independent(mut payments in prop::collection::vec(0..100_000i32, 0..32)) {
        let month = Month::new(2024, 6).unwrap();
        let forward = MonthlySummary::compute(1, month, payments.clone(), []);
        payments.reverse();
        let backward = MonthlySummary::compute(1, month, payments, []);
        prop_assert_eq!(forward, backward);
    }
}
