use rust_decimal::Decimal;

use crate::models::Transaction;

/// Totals shown on the summary cards.
///
/// `expenses` keeps the stored (negative) sign; presentation negates it.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Summary {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal
}

pub fn summarize(transactions: &[Transaction]) -> Summary {
    transactions.iter().fold(Summary::default(), |mut summary, transaction| {
        if transaction.is_income() {
            summary.income += transaction.amount;
        } else {
            summary.expenses += transaction.amount;
        }

        summary.balance += transaction.amount;
        summary
    })
}
