//! Core data models for kantong

pub mod goal;
pub mod money;
pub mod theme;
pub mod transaction;

pub use goal::{GoalValidationError, SavingsGoal};
pub use money::{Money, MoneyParseError};
pub use theme::Theme;
pub use transaction::{
    EntryKind, Transaction, TransactionId, TransactionValidationError, EXPENSE_CATEGORIES,
    INCOME_CATEGORIES,
};
