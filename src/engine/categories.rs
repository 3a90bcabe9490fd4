use rust_decimal::Decimal;

use crate::models::Transaction;
use crate::types::Category;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    /// Sum of absolute expense amounts in the category.
    pub total: Decimal
}

/// Groups expenses by category for the spending chart.
///
/// Categories appear in the order they are first met in `transactions`; the
/// chart axis relies on that order, so the result is never re-sorted.
/// Categories without expenses are left out.
pub fn categorize(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for transaction in transactions.iter().filter(|transaction| transaction.is_expense()) {
        let amount = transaction.amount.abs();

        match totals.iter_mut().find(|entry| entry.category == transaction.category) {
            Some(entry) => entry.total += amount,
            None => totals.push(CategoryTotal {
                category: transaction.category,
                total: amount
            })
        }
    }

    totals
}
