//! Transaction repository for JSON storage
//!
//! Holds the in-memory ordered transaction list and persists it to
//! transactions.json. Mutations touch memory only; `save` is an explicit
//! separate step invoked by the caller, so business logic stays testable
//! without touching disk.

use std::path::PathBuf;

use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json_or_default, write_json_atomic};
use crate::error::KantongError;

/// Repository for transaction persistence
///
/// The collection keeps insertion order; the category breakdown depends on
/// first-seen ordering among expenses.
pub struct TransactionRepository {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            transactions: Vec::new(),
        }
    }

    /// Load transactions from disk
    ///
    /// A missing or corrupted file yields an empty list.
    pub fn load(&mut self) {
        self.transactions = read_json_or_default(&self.path);
    }

    /// Save the full transaction list to disk
    pub fn save(&self) -> Result<(), KantongError> {
        write_json_atomic(&self.path, &self.transactions)
    }

    /// Append a transaction
    pub fn add(&mut self, txn: Transaction) {
        self.transactions.push(txn);
    }

    /// Remove a transaction by id; no-op if absent
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, id: &TransactionId) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| &t.id != id);
        self.transactions.len() != before
    }

    /// All transactions, in insertion order
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Get a transaction by id
    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    /// Number of transactions
    pub fn count(&self) -> usize {
        self.transactions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let mut repo = TransactionRepository::new(path);
        repo.load();
        (temp_dir, repo)
    }

    fn sample(kind: EntryKind, amount: i64, category: &str) -> Transaction {
        Transaction::new(
            kind,
            Money::new(amount),
            category,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            "",
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        assert_eq!(repo.count(), 0);
    }

    #[test]
    fn test_add_and_get() {
        let (_temp_dir, mut repo) = create_test_repo();

        let txn = sample(EntryKind::Expense, 5000, "Makanan");
        let id = txn.id.clone();
        repo.add(txn);

        let retrieved = repo.get(&id).unwrap();
        assert_eq!(retrieved.amount, Money::new(5000));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let (_temp_dir, mut repo) = create_test_repo();

        repo.add(sample(EntryKind::Expense, 100, "Makanan"));
        repo.add(sample(EntryKind::Expense, 200, "Transportasi"));
        repo.add(sample(EntryKind::Expense, 300, "Makanan"));

        let categories: Vec<_> = repo.list().iter().map(|t| t.category.as_str()).collect();
        assert_eq!(categories, vec!["Makanan", "Transportasi", "Makanan"]);
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, mut repo) = create_test_repo();

        let txn = sample(EntryKind::Expense, 5000, "Makanan");
        let id = txn.id.clone();
        repo.add(txn);
        assert_eq!(repo.count(), 1);

        assert!(repo.remove(&id));
        assert_eq!(repo.count(), 0);
    }

    #[test]
    fn test_remove_nonexistent_is_noop() {
        let (_temp_dir, mut repo) = create_test_repo();

        repo.add(sample(EntryKind::Income, 1000, "Gaji"));
        let before: Vec<_> = repo.list().to_vec();

        let ghost = TransactionId::from_string("does-not-exist");
        assert!(!repo.remove(&ghost));
        assert_eq!(repo.list(), before.as_slice());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, mut repo) = create_test_repo();

        let txn = sample(EntryKind::Income, 5000000, "Gaji");
        let id = txn.id.clone();
        repo.add(txn);
        repo.save().unwrap();

        let path = temp_dir.path().join("transactions.json");
        let mut repo2 = TransactionRepository::new(path);
        repo2.load();

        assert_eq!(repo2.count(), 1);
        assert_eq!(repo2.get(&id).unwrap().amount, Money::new(5000000));
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        std::fs::write(&path, "definitely not json").unwrap();

        let mut repo = TransactionRepository::new(path);
        repo.load();
        assert_eq!(repo.count(), 0);
    }

    #[test]
    fn test_mutation_without_save_leaves_disk_untouched() {
        let (temp_dir, mut repo) = create_test_repo();
        repo.add(sample(EntryKind::Income, 1000, "Gaji"));

        // No save() yet
        assert!(!temp_dir.path().join("transactions.json").exists());
    }
}
