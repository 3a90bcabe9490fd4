use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{FieldError, FormErrors, Transaction, TransactionType};
use crate::types::{Category, ParseError, TransactionId};

const DATE_FORMAT: &str = "%Y-%m-%d";
/// Largest accepted magnitude; keeps sums over any realistic number of
/// transactions inside `Decimal` range.
const MAX_AMOUNT: i64 = 1_000_000_000_000;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FormField {
    Description,
    Amount,
    Date,
    Type,
    Category
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Description => "description",
            FormField::Amount => "amount",
            FormField::Date => "date",
            FormField::Type => "type",
            FormField::Category => "category"
        }
    }
}

impl Display for FormField {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "description" => Ok(FormField::Description),
            "amount" => Ok(FormField::Amount),
            "date" => Ok(FormField::Date),
            "type" => Ok(FormField::Type),
            "category" => Ok(FormField::Category),
            _ => Err(ParseError::UnknownFormField(value.trim().to_string()))
        }
    }
}

/// Raw, unvalidated user input for adding or editing a transaction.
///
/// The amount is entered as a magnitude; the sign is derived from the type
/// during validation.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TransactionForm {
    pub description: String,
    pub amount: String,
    pub date: String,
    pub transaction_type: String,
    pub category: String
}

/// A form that passed validation, ready to become a [`Transaction`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ValidTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub transaction_type: TransactionType,
    pub category: Category
}

impl ValidTransaction {
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            date: self.date,
            description: self.description,
            amount: self.amount,
            transaction_type: self.transaction_type,
            category: self.category
        }
    }
}

impl TransactionForm {
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();

        match field {
            FormField::Description => self.description = value,
            FormField::Amount => self.amount = value,
            FormField::Date => self.date = value,
            FormField::Type => self.transaction_type = value,
            FormField::Category => self.category = value
        }
    }

    /// Checks every field and either returns the typed payload or all of the
    /// field errors at once.
    pub fn validate(&self) -> Result<ValidTransaction, FormErrors> {
        let description = validate_description(&self.description);
        let magnitude = validate_amount(&self.amount);
        let date = validate_date(&self.date);
        let transaction_type = validate_type(&self.transaction_type);
        let category = validate_category(&self.category);

        match (description, magnitude, date, transaction_type, category) {
            (Ok(description), Ok(magnitude), Ok(date), Ok(transaction_type), Ok(category)) => {
                Ok(ValidTransaction {
                    date,
                    description,
                    amount: signed_amount(magnitude, transaction_type),
                    transaction_type,
                    category
                })
            }
            (description, magnitude, date, transaction_type, category) => {
                let errors = [
                    description.err(),
                    magnitude.err(),
                    date.err(),
                    transaction_type.err(),
                    category.err()
                ];

                Err(FormErrors(errors.into_iter().flatten().collect()))
            }
        }
    }
}

impl From<&Transaction> for TransactionForm {
    /// Pre-fills the form for editing, showing the amount as a magnitude.
    fn from(transaction: &Transaction) -> Self {
        Self {
            description: transaction.description.clone(),
            amount: transaction.amount.abs().to_string(),
            date: transaction.date.format(DATE_FORMAT).to_string(),
            transaction_type: transaction.transaction_type.to_string(),
            category: transaction.category.to_string()
        }
    }
}

fn signed_amount(magnitude: Decimal, transaction_type: TransactionType) -> Decimal {
    let magnitude = magnitude.abs();

    match transaction_type {
        TransactionType::Income => magnitude,
        TransactionType::Expense if magnitude.is_zero() => Decimal::ZERO,
        TransactionType::Expense => -magnitude
    }
}

fn validate_description(value: &str) -> Result<String, FieldError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(FieldError::new(FormField::Description, "Description is required."));
    }

    Ok(value.to_string())
}

fn validate_amount(value: &str) -> Result<Decimal, FieldError> {
    let value = value.trim();

    let amount = Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|_| FieldError::new(FormField::Amount, "Amount must be a valid number."))?;

    if amount.abs() > Decimal::from(MAX_AMOUNT) {
        return Err(FieldError::new(FormField::Amount, "Amount is too large."));
    }

    Ok(amount)
}

fn validate_date(value: &str) -> Result<NaiveDate, FieldError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(FieldError::new(FormField::Date, "Date is required."));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| FieldError::new(FormField::Date, "Date must be in YYYY-MM-DD format."))
}

fn validate_type(value: &str) -> Result<TransactionType, FieldError> {
    TransactionType::from_str(value)
        .map_err(|_| FieldError::new(FormField::Type, "Type must be either income or expense."))
}

fn validate_category(value: &str) -> Result<Category, FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new(FormField::Category, "Category is required."));
    }

    Category::from_str(value).map_err(|_| {
        let names: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
        FieldError::new(FormField::Category, format!("Category must be one of: {}.", names.join(", ")))
    })
}
