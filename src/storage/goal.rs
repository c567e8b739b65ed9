//! Savings goal repository
//!
//! The goal is a singleton record: goal.json holds the current goal, and the
//! file is removed entirely when the goal is cleared.

use std::path::PathBuf;

use crate::error::KantongError;
use crate::models::SavingsGoal;

use super::file_io::{read_json_or_default, remove_if_exists, write_json_atomic};

/// Repository for the optional savings goal
pub struct GoalRepository {
    path: PathBuf,
    goal: Option<SavingsGoal>,
}

impl GoalRepository {
    /// Create a new goal repository
    pub fn new(path: PathBuf) -> Self {
        Self { path, goal: None }
    }

    /// Load the goal from disk; missing or corrupted file means no goal
    pub fn load(&mut self) {
        self.goal = read_json_or_default(&self.path);
    }

    /// The current goal, if any
    pub fn get(&self) -> Option<&SavingsGoal> {
        self.goal.as_ref()
    }

    /// Replace the current goal in memory
    pub fn set(&mut self, goal: SavingsGoal) {
        self.goal = Some(goal);
    }

    /// Drop the in-memory goal
    pub fn clear(&mut self) {
        self.goal = None;
    }

    /// Persist the current state: write the goal, or remove the file when
    /// there is none
    pub fn save(&self) -> Result<(), KantongError> {
        match &self.goal {
            Some(goal) => write_json_atomic(&self.path, goal),
            None => remove_if_exists(&self.path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, GoalRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("goal.json");
        let mut repo = GoalRepository::new(path);
        repo.load();
        (temp_dir, repo)
    }

    #[test]
    fn test_no_goal_by_default() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(repo.get().is_none());
    }

    #[test]
    fn test_set_save_reload() {
        let (temp_dir, mut repo) = create_test_repo();

        repo.set(SavingsGoal::new("Laptop", Money::new(10000000)));
        repo.save().unwrap();

        let mut repo2 = GoalRepository::new(temp_dir.path().join("goal.json"));
        repo2.load();
        let goal = repo2.get().unwrap();
        assert_eq!(goal.name, "Laptop");
        assert_eq!(goal.target, Money::new(10000000));
    }

    #[test]
    fn test_clear_removes_file() {
        let (temp_dir, mut repo) = create_test_repo();
        let path = temp_dir.path().join("goal.json");

        repo.set(SavingsGoal::new("Laptop", Money::new(10000000)));
        repo.save().unwrap();
        assert!(path.exists());

        repo.clear();
        repo.save().unwrap();
        assert!(!path.exists());
        assert!(repo.get().is_none());
    }

    #[test]
    fn test_corrupt_file_means_no_goal() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("goal.json");
        std::fs::write(&path, "][").unwrap();

        let mut repo = GoalRepository::new(path);
        repo.load();
        assert!(repo.get().is_none());
    }
}
