//! Modal dialogs

pub mod confirm;
pub mod goal;
pub mod help;
pub mod transaction;
