//! Aggregation reports
//!
//! Pure, stateless computations over the transaction list. These expose plain
//! numeric/labeled data structures; the CLI and TUI render them without the
//! engine knowing anything about presentation.

pub mod summary;

pub use summary::{
    balance_percent, expense_by_category, goal_progress, overspend_alert, totals, GoalProgress,
    Totals,
};
