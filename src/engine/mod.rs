//! The stateful shell around the core data model.
//!
//! An [`Engine`] owns the current state name and the undo/redo log, and
//! reads its transitions from a shared [`Configuration`](crate::core::Configuration).
//!
//! # Key Concepts
//!
//! - **Direct jumps**: `change_state` ignores the table but is still recorded
//! - **Events**: `trigger` looks the event up on the current state only
//! - **History**: every successful move can be undone; new moves drop the redo tail
//!
//! All operations are synchronous. Mutation goes through `&mut self`, so
//! sharing an engine across threads needs an outer lock.

mod error;
mod machine;

pub use error::EngineError;
pub use machine::{DestinationCheck, Engine, EngineOptions};
