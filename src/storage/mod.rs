//! Storage layer for kantong
//!
//! Three independent persisted records under the data directory: the
//! transaction list (JSON array), the savings goal (JSON object, file absent
//! when unset), and the theme preference (plain string). All writes are
//! atomic; all reads degrade to the empty default on missing or corrupted
//! data.

pub mod file_io;
pub mod goal;
pub mod theme;
pub mod transactions;

pub use file_io::{read_json_or_default, write_json_atomic};
pub use goal::GoalRepository;
pub use theme::ThemeRepository;
pub use transactions::TransactionRepository;

use crate::config::paths::KantongPaths;
use crate::error::KantongError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: KantongPaths,
    pub transactions: TransactionRepository,
    pub goal: GoalRepository,
    pub theme: ThemeRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: KantongPaths) -> Result<Self, KantongError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            goal: GoalRepository::new(paths.goal_file()),
            theme: ThemeRepository::new(paths.theme_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &KantongPaths {
        &self.paths
    }

    /// Load all records from disk
    pub fn load_all(&mut self) {
        self.transactions.load();
        self.goal.load();
        self.theme.load();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, Money, SavingsGoal, Theme, Transaction};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = KantongPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_test_storage();
        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.transactions.count(), 0);
        assert!(storage.goal.get().is_none());
        assert_eq!(storage.theme.get(), Theme::Dark);
    }

    #[test]
    fn test_records_are_independent() {
        let (temp_dir, mut storage) = create_test_storage();

        storage.transactions.add(Transaction::new(
            EntryKind::Income,
            Money::new(5000000),
            "Gaji",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "",
        ));
        storage.transactions.save().unwrap();
        storage.goal.set(SavingsGoal::new("Laptop", Money::new(10000000)));
        storage.goal.save().unwrap();
        storage.theme.set(Theme::Light);
        storage.theme.save().unwrap();

        // Corrupt only the transactions record
        std::fs::write(temp_dir.path().join("data").join("transactions.json"), "x").unwrap();

        let paths = KantongPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all();

        assert_eq!(reloaded.transactions.count(), 0);
        assert_eq!(reloaded.goal.get().unwrap().name, "Laptop");
        assert_eq!(reloaded.theme.get(), Theme::Light);
    }
}
