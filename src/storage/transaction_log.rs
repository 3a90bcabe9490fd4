use crate::models::Transaction;
use crate::storage::Storage;
use crate::types::TransactionId;

/// In-memory mutation log, newest transaction first.
#[derive(Debug, Clone, Default)]
pub struct TransactionLog {
    transactions: Vec<Transaction>
}

impl TransactionLog {
    fn position(&self, id: &TransactionId) -> Option<usize> {
        self.transactions.iter().position(|transaction| &transaction.id == id)
    }
}

impl From<Vec<Transaction>> for TransactionLog {
    /// Keeps the given order; the first element is treated as the newest.
    fn from(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}

impl Storage for TransactionLog {
    fn add(&mut self, transaction: Transaction) {
        self.transactions.insert(0, transaction);
    }

    fn upsert(&mut self, transaction: Transaction) {
        match self.position(&transaction.id) {
            Some(index) => self.transactions[index] = transaction,
            None => self.add(transaction)
        }
    }

    fn remove(&mut self, id: &TransactionId) -> Option<Transaction> {
        self.position(id).map(|index| self.transactions.remove(index))
    }

    fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|transaction| &transaction.id == id)
    }

    fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}
