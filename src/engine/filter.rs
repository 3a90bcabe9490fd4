use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::models::{Transaction, TransactionType};
use crate::types::ParseError;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense
}

impl TypeFilter {
    fn matches(&self, transaction_type: TransactionType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => transaction_type == TransactionType::Income,
            TypeFilter::Expense => transaction_type == TransactionType::Expense
        }
    }
}

impl Display for TypeFilter {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            TypeFilter::All => "all",
            TypeFilter::Income => "income",
            TypeFilter::Expense => "expense"
        })
    }
}

impl FromStr for TypeFilter {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "income" => Ok(TypeFilter::Income),
            "expense" => Ok(TypeFilter::Expense),
            _ => Err(ParseError::UnknownTypeFilter(value.trim().to_string()))
        }
    }
}

/// The description query and type selector of the transactions table.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TransactionFilter {
    pub description: String,
    pub transaction_type: TypeFilter
}

impl TransactionFilter {
    #[cfg(test)]
    pub fn new(description: impl Into<String>, transaction_type: TypeFilter) -> Self {
        Self {
            description: description.into(),
            transaction_type
        }
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        let query = self.description.to_lowercase();

        self.transaction_type.matches(transaction.transaction_type)
            && transaction.description.to_lowercase().contains(&query)
    }
}

/// Returns the transactions passing both the description and the type
/// predicate, in their original relative order.
pub fn filter(transactions: &[Transaction], criteria: &TransactionFilter) -> Vec<Transaction> {
    transactions.iter()
        .filter(|transaction| criteria.matches(transaction))
        .cloned()
        .collect()
}
