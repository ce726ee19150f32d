//! Core data model of the engine.
//!
//! This module holds the plain values an engine works over:
//! - Ordered tables via `Table`
//! - Transition tables via `Configuration` and `StateDef`
//! - The undo/redo log via `History`
//!
//! Nothing here logs or fails at runtime; errors are raised by the engine.

mod config;
mod history;
mod table;

pub use config::{ConfigViolation, Configuration, StateDef};
pub use history::{History, HistoryEntry};
pub use table::Table;
