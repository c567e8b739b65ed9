//! Transaction service
//!
//! Validated add/remove/list over the transaction repository. Validation
//! happens here so the repository stays a dumb ordered collection; every
//! mutation is followed by an explicit save.

use chrono::NaiveDate;

use crate::error::{KantongError, KantongResult};
use crate::models::{EntryKind, Money, Transaction, TransactionId};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a mut Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Create a transaction, persist the updated list, and return the record
    ///
    /// Rejects non-positive amounts and categories outside the kind's
    /// vocabulary with a validation error.
    pub fn add(
        &mut self,
        kind: EntryKind,
        amount: Money,
        category: &str,
        date: NaiveDate,
        note: &str,
    ) -> KantongResult<Transaction> {
        let txn = Transaction::new(kind, amount, category, date, note.trim());

        txn.validate()
            .map_err(|e| KantongError::Validation(e.to_string()))?;

        self.storage.transactions.add(txn.clone());
        self.storage.transactions.save()?;

        Ok(txn)
    }

    /// Remove a transaction by id and persist
    ///
    /// Removing an unknown id is a no-op; the return value says whether
    /// anything was deleted.
    pub fn remove(&mut self, id: &TransactionId) -> KantongResult<bool> {
        let removed = self.storage.transactions.remove(id);
        self.storage.transactions.save()?;
        Ok(removed)
    }

    /// List transactions for display: optionally filtered by kind, sorted by
    /// date descending with id descending as the tie-break (most recently
    /// added same-day entries first)
    pub fn list(&self, filter: Option<EntryKind>) -> Vec<Transaction> {
        sorted_for_display(self.storage.transactions.list(), filter)
    }
}

/// Sort and filter a transaction slice for display: date descending, ties
/// broken by id descending
pub fn sorted_for_display(
    transactions: &[Transaction],
    filter: Option<EntryKind>,
) -> Vec<Transaction> {
    let mut transactions: Vec<Transaction> = transactions
        .iter()
        .filter(|t| filter.map_or(true, |k| t.kind == k))
        .cloned()
        .collect();

    transactions.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
    transactions
}
