use std::fmt;
use std::fmt::{Display, Formatter};

const PREFIX: &str = "txn_";

/// Opaque identifier of a transaction, unique within a dashboard and never
/// changed once assigned.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Builds the identifier handed out to freshly added transactions.
    pub fn from_millis(millis: i64) -> Self {
        Self(format!("{PREFIX}{millis}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
