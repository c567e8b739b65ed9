//! Terminal User Interface module
//!
//! A single-screen finance dashboard built with ratatui: summary cards,
//! charts, the savings goal gauge, and a transaction register, with modal
//! dialogs for data entry.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout and styling
pub mod layout;
pub mod style;

pub use app::App;
pub use terminal::run_tui;
