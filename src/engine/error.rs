//! Engine error types.

use crate::core::ConfigViolation;
use thiserror::Error;

/// Errors raised by engine operations.
///
/// A failed operation leaves the engine exactly as it was.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration was missing or completely empty
    #[error("Undefined FSM configuration")]
    InvalidConfig,

    /// Direct jump to a state the configuration does not declare
    #[error("State '{state}' not found")]
    UnknownState { state: String },

    /// Event not declared on the current state
    #[error("Event '{event}' not found for current state '{state}'")]
    UnknownEvent { event: String, state: String },

    /// Eager validation found dangling references
    #[error("Configuration rejected with {} violation(s)", violations.len())]
    RejectedConfig { violations: Vec<ConfigViolation> },

    /// Configuration document could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
