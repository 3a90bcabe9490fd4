use crate::models::FormField;
use thiserror::Error;

/// A validation failure attached to a single form field.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: FormField,
    pub message: String
}

impl FieldError {
    pub fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into()
        }
    }
}

/// Every field error found in one submission, in form order.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
#[error("Invalid transaction form: {}", join(.0))]
pub struct FormErrors(pub Vec<FieldError>);

impl FormErrors {
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    #[cfg(test)]
    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.0.iter().find(|error| error.field == field)
    }
}

fn join(errors: &[FieldError]) -> String {
    errors.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
