//! Builder API for ergonomic configuration construction.
//!
//! This module provides fluent builders and a macro for writing transition
//! tables in code rather than loading them from a document.

pub mod config;
pub mod error;
pub mod macros;
pub mod state;

pub use config::ConfigBuilder;
pub use error::BuildError;
pub use state::StateBuilder;

use crate::core::StateDef;

/// Create a state definition from `(event, target)` pairs.
///
/// # Example
///
/// ```
/// use fsm_engine::builder::transitions;
///
/// let def = transitions([("eat", "normal"), ("sleep", "sleeping")]);
/// assert_eq!(def.target("eat"), Some("normal"));
/// ```
pub fn transitions<I, E, T>(pairs: I) -> StateDef
where
    I: IntoIterator<Item = (E, T)>,
    E: Into<String>,
    T: Into<String>,
{
    StateDef::new(
        pairs
            .into_iter()
            .map(|(event, target)| (event, target.into()))
            .collect(),
    )
}
