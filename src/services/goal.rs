//! Savings goal service
//!
//! Validated set/clear over the singleton goal. Invalid input is rejected
//! with a reported error rather than silently ignored.

use crate::error::{KantongError, KantongResult};
use crate::models::{Money, SavingsGoal};
use crate::storage::Storage;

/// Service for savings goal management
pub struct GoalService<'a> {
    storage: &'a mut Storage,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Replace the current goal and persist
    pub fn set(&mut self, name: &str, target: Money) -> KantongResult<SavingsGoal> {
        let goal = SavingsGoal::new(name.trim(), target);
        goal.validate()
            .map_err(|e| KantongError::Validation(e.to_string()))?;

        self.storage.goal.set(goal.clone());
        self.storage.goal.save()?;

        Ok(goal)
    }

    /// Remove the goal (in memory and on disk); no-op when none is set
    pub fn clear(&mut self) -> KantongResult<()> {
        self.storage.goal.clear();
        self.storage.goal.save()
    }

    /// The current goal, if any
    pub fn current(&self) -> Option<&SavingsGoal> {
        self.storage.goal.get()
    }
}
