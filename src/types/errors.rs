use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
    #[error("Unknown transaction type '{0}'")]
    UnknownTransactionType(String),
    #[error("Unknown type filter '{0}'")]
    UnknownTypeFilter(String),
    #[error("Unknown form field '{0}'")]
    UnknownFormField(String)
}
