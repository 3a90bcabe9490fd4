mod errors;
mod seed;
mod transaction_log;

use crate::models::Transaction;
use crate::types::TransactionId;

pub use errors::SeedError;
pub use seed::{load_csv, mock_transactions};
pub use transaction_log::TransactionLog;

/// The canonical, ordered collection of transactions a dashboard reads from.
pub trait Storage {
    /// Inserts `transaction` as the newest (first) record.
    fn add(&mut self, transaction: Transaction);
    /// Replaces the record sharing `transaction.id` in place, or adds it when absent.
    fn upsert(&mut self, transaction: Transaction);
    /// Removes the record with `id`, returning it. Absent ids are a no-op.
    fn remove(&mut self, id: &TransactionId) -> Option<Transaction>;
    fn get(&self, id: &TransactionId) -> Option<&Transaction>;
    /// All records, newest first.
    fn transactions(&self) -> &[Transaction];

    fn len(&self) -> usize {
        self.transactions().len()
    }

    fn is_empty(&self) -> bool {
        self.transactions().is_empty()
    }
}
