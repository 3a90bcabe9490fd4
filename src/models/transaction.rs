use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::TransactionType;
use crate::types::{Category, TransactionId};

/// A single dated financial event.
///
/// The sign of `amount` always agrees with `transaction_type`: income is
/// never negative and expenses are never positive. Records are only built
/// from a validated form, which is where the sign is applied.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Transaction {
    /// Identifier assigned on creation and kept across edits.
    pub id: TransactionId,
    pub date: NaiveDate,
    pub description: String,
    /// Signed amount, positive for income and negative for expenses.
    pub amount: Decimal,
    pub transaction_type: TransactionType,
    pub category: Category
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}
