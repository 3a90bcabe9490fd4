use crate::models::FormErrors;
use crate::types::{ParseError, TransactionId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Transaction {id} was not found")]
    TransactionNotFound {
        id: TransactionId
    },
    #[error(transparent)]
    InvalidForm(#[from] FormErrors)
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}', type 'help' for the list of commands")]
    UnknownCommand(String),
    #[error("Command '{command}' requires {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str
    },
    #[error("Command '{command}' takes {expected} fields but {found} were given")]
    UnexpectedFields {
        command: &'static str,
        expected: usize,
        found: usize
    },
    #[error("Expected <field>=<value> but found '{0}'")]
    MalformedOverride(String),
    #[error(transparent)]
    InvalidArgument(#[from] ParseError),
    #[error("Could not read arguments: {0}")]
    Csv(#[from] csv::Error)
}
