//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer; all output goes
//! through the display module.

pub mod goal;
pub mod theme;
pub mod transaction;

pub use goal::{handle_goal_command, GoalCommands};
pub use theme::{handle_theme_command, ThemeCommands};
pub use transaction::{handle_transaction_command, handle_summary_command, TransactionCommands};
