//! Terminal display formatting for the headless CLI

pub mod summary;
pub mod transaction;

pub use summary::{format_category_breakdown, format_goal, format_summary};
pub use transaction::{format_register, format_transaction_row};
