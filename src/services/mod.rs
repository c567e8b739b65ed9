//! Business logic layer
//!
//! Services own validation and the explicit persistence step after each
//! mutation; repositories stay plain in-memory collections.

pub mod goal;
pub mod theme;
pub mod transaction;

pub use goal::GoalService;
pub use theme::ThemeService;
pub use transaction::TransactionService;
