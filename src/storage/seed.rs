use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{error, info};

use crate::models::{FormErrors, Transaction, TransactionForm};
use crate::storage::SeedError;
use crate::types::TransactionId;

/// The starting data set shown when no seed file is given.
const MOCK_ROWS: [(&str, &str, &str, &str, &str, &str); 7] = [
    ("txn_1", "2024-07-01", "Monthly Salary", "5000", "income", "Salary"),
    ("txn_2", "2024-07-01", "Apartment Rent", "-1500", "expense", "Rent"),
    ("txn_3", "2024-07-03", "Weekly Groceries", "-125.50", "expense", "Groceries"),
    ("txn_4", "2024-07-05", "Electricity Bill", "-75.20", "expense", "Utilities"),
    ("txn_5", "2024-07-07", "Dinner with friends", "-55", "expense", "Dining"),
    ("txn_6", "2024-07-10", "New pair of shoes", "-200", "expense", "Shopping"),
    ("txn_7", "2024-07-12", "Train ticket", "-30", "expense", "Transport")
];

/// One row of a seed CSV file: `id,date,description,amount,type,category`.
///
/// Rows go through the same validation as the add form, so a stored sign that
/// disagrees with the type is corrected rather than trusted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SeedRecord {
    id: String,
    date: String,
    description: String,
    amount: String,
    #[serde(rename = "type")]
    transaction_type: String,
    category: String
}

impl SeedRecord {
    fn into_transaction(self) -> Result<Transaction, FormErrors> {
        let form = TransactionForm {
            description: self.description,
            amount: self.amount,
            date: self.date,
            transaction_type: self.transaction_type,
            category: self.category
        };

        Ok(form.validate()?.into_transaction(TransactionId::new(self.id.trim())))
    }
}

pub fn mock_transactions() -> Vec<Transaction> {
    let records = MOCK_ROWS.iter().map(|(id, date, description, amount, transaction_type, category)| SeedRecord {
        id: id.to_string(),
        date: date.to_string(),
        description: description.to_string(),
        amount: amount.to_string(),
        transaction_type: transaction_type.to_string(),
        category: category.to_string()
    });

    collect_valid(records.map(Ok::<_, csv::Error>))
}

/// Reads seed transactions from a CSV file, skipping rows that fail
/// validation or repeat an earlier id.
pub fn load_csv(path: &Path) -> Result<Vec<Transaction>, SeedError> {
    let display_path = path.display().to_string();

    let file = File::open(path).map_err(|source| SeedError::Open {
        path: display_path.clone(),
        source
    })?;

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(BufReader::new(file));

    reader.headers().map_err(|source| SeedError::Read {
        path: display_path.clone(),
        source
    })?;

    let transactions = collect_valid(reader.deserialize::<SeedRecord>());

    info!("Loaded {} transactions from {display_path}", transactions.len());

    Ok(transactions)
}

fn collect_valid(records: impl Iterator<Item = Result<SeedRecord, csv::Error>>) -> Vec<Transaction> {
    let mut seen = HashSet::new();
    let mut transactions = Vec::new();

    for result in records {
        let record = match result {
            Ok(record) => record,
            Err(error) => {
                error!("Seed deserialization error: {error}");
                continue;
            }
        };

        if record.id.trim().is_empty() {
            error!("Seed row for '{}' has no id", record.description);
            continue;
        }

        let transaction = match record.into_transaction() {
            Ok(transaction) => transaction,
            Err(error) => {
                error!("{error}");
                continue;
            }
        };

        if !seen.insert(transaction.id.clone()) {
            error!("Duplicate seed transaction [{}] skipped", transaction.id);
            continue;
        }

        transactions.push(transaction);
    }

    transactions
}
