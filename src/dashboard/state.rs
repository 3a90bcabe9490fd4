use tracing::debug;

use crate::dashboard::{DashboardError, IdGenerator};
use crate::engine::{categorize, filter, summarize, CategoryTotal, Summary, TransactionFilter, TypeFilter};
use crate::models::{FormField, Transaction, TransactionForm};
use crate::storage::{Storage, TransactionLog};
use crate::types::TransactionId;

/// State owned by one dashboard session: the transaction list, the active
/// table filter and the id source for new transactions.
///
/// Summary and chart values are always derived from the currently visible
/// (filtered) transactions and never cached.
pub struct Dashboard<S: Storage = TransactionLog> {
    storage: S,
    filter: TransactionFilter,
    ids: IdGenerator
}

impl<S: Storage> Dashboard<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            filter: TransactionFilter::default(),
            ids: IdGenerator::new()
        }
    }

    #[cfg(test)]
    pub fn with_id_generator(mut self, ids: IdGenerator) -> Self {
        self.ids = ids;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn filter(&self) -> &TransactionFilter {
        &self.filter
    }

    pub fn set_description_filter(&mut self, description: impl Into<String>) {
        self.filter.description = description.into();
    }

    pub fn set_type_filter(&mut self, transaction_type: TypeFilter) {
        self.filter.transaction_type = transaction_type;
    }

    pub fn clear_filter(&mut self) {
        self.filter = TransactionFilter::default();
    }

    pub fn visible(&self) -> Vec<Transaction> {
        filter(self.storage.transactions(), &self.filter)
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.visible())
    }

    pub fn spending_by_category(&self) -> Vec<CategoryTotal> {
        categorize(&self.visible())
    }

    /// Validates `form` and stores the result as the newest transaction.
    pub fn add(&mut self, form: &TransactionForm) -> Result<TransactionId, DashboardError> {
        let valid = form.validate()?;
        let id = self.fresh_id();

        debug!("Transaction [{id}] added: {} {}", valid.transaction_type, valid.amount);
        self.storage.add(valid.into_transaction(id.clone()));

        Ok(id)
    }

    /// Re-validates an existing transaction with `overrides` applied on top of
    /// its current values, keeping its id and position.
    pub fn edit(&mut self, id: &TransactionId, overrides: &[(FormField, String)]) -> Result<(), DashboardError> {
        let existing = self.storage.get(id)
            .ok_or_else(|| DashboardError::TransactionNotFound { id: id.clone() })?;

        let mut form = TransactionForm::from(existing);

        for (field, value) in overrides {
            form.set(*field, value.clone());
        }

        let valid = form.validate()?;

        debug!("Transaction [{id}] updated: {} {}", valid.transaction_type, valid.amount);
        self.storage.upsert(valid.into_transaction(id.clone()));

        Ok(())
    }

    /// Removes the transaction with `id`; returns whether anything was removed.
    pub fn delete(&mut self, id: &TransactionId) -> bool {
        let removed = self.storage.remove(id).is_some();

        debug!("Transaction [{id}] delete requested, removed: {removed}");

        removed
    }

    fn fresh_id(&mut self) -> TransactionId {
        loop {
            let id = self.ids.next_id();

            if self.storage.get(&id).is_none() {
                return id;
            }
        }
    }
}
