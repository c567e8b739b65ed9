//! Savings goal model
//!
//! At most one goal exists at a time (singleton, nullable). Its lifecycle is
//! independent of transactions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A named target amount the user aims to reach via positive balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    /// Display name (non-empty)
    pub name: String,

    /// Target amount (> 0)
    pub target: Money,
}

impl SavingsGoal {
    /// Create a new goal
    pub fn new(name: impl Into<String>, target: Money) -> Self {
        Self {
            name: name.into(),
            target,
        }
    }

    /// Validate the goal: non-empty name, positive target
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if !self.target.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target));
        }
        Ok(())
    }
}

/// Validation errors for savings goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name must not be empty"),
            Self::NonPositiveTarget(target) => {
                write!(f, "Goal target must be positive, got {}", target)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}
