//! kantong - Terminal-based personal finance tracker
//!
//! This library provides the core functionality for kantong, a small
//! personal finance tracker: income and expense recording with fixed
//! category lists, summary and per-category reporting, a single savings
//! goal, and a light/dark display theme, all persisted as JSON files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management for the data directory
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, goal, theme)
//! - `storage`: JSON file storage layer
//! - `reports`: Aggregation over the transaction list
//! - `services`: Business logic layer
//! - `display`: Plain-text formatting for the CLI
//! - `cli`: CLI command handlers
//! - `tui`: Interactive dashboard built with ratatui

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{KantongError, KantongResult};
