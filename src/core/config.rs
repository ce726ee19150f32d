//! Declarative transition tables.
//!
//! A [`Configuration`] names the initial state and, for every state, the
//! events it accepts and where each event leads. Engines only ever read it.

use super::table::Table;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Transitions declared on a single state: event name to destination name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    #[serde(default)]
    pub transitions: Table<String>,
}

impl StateDef {
    pub fn new(transitions: Table<String>) -> Self {
        Self { transitions }
    }

    /// Destination for `event`, if this state declares it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Events accepted by this state, in declaration order.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.transitions.keys()
    }
}

/// Complete machine definition.
///
/// Serializes to and from the shape
/// `{ "initial": .., "states": { name: { "transitions": { event: target } } } }`.
/// Both `states` and `transitions` may be omitted and default to empty.
///
/// # Example
///
/// ```rust
/// use fsm_engine::core::Configuration;
///
/// let config = Configuration::from_json(r#"{
///     "initial": "normal",
///     "states": {
///         "normal": { "transitions": { "study": "busy" } },
///         "busy": { "transitions": { "get_tired": "normal" } }
///     }
/// }"#).unwrap();
///
/// assert_eq!(config.initial, "normal");
/// assert_eq!(config.state_names().collect::<Vec<_>>(), vec!["normal", "busy"]);
/// assert!(config.validate().is_success());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub initial: String,
    #[serde(default)]
    pub states: Table<StateDef>,
}

/// A reference in a configuration that points at an undeclared state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Initial state '{initial}' is not declared")]
    UndeclaredInitial { initial: String },

    #[error("Transition '{event}' on state '{state}' targets undeclared state '{target}'")]
    UndeclaredDestination {
        state: String,
        event: String,
        target: String,
    },
}

impl Configuration {
    pub fn new(initial: impl Into<String>, states: Table<StateDef>) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Parse a configuration document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// True when neither an initial state nor any states are given.
    pub fn is_empty(&self) -> bool {
        self.initial.is_empty() && self.states.is_empty()
    }

    pub fn state(&self, name: &str) -> Option<&StateDef> {
        self.states.get(name)
    }

    pub fn contains_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Declared state names in declaration order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.keys()
    }

    /// Check every state reference, accumulating all violations.
    ///
    /// Engines built in lazy mode never call this; destinations are only
    /// resolved when a transition fires.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.contains_state(&self.initial) {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::UndeclaredInitial {
                initial: self.initial.clone(),
            })
        });

        for (state, def) in self.states.iter() {
            for (event, target) in def.transitions.iter() {
                if !self.contains_state(target) {
                    checks.push(Validation::fail(ConfigViolation::UndeclaredDestination {
                        state: state.to_string(),
                        event: event.to_string(),
                        target: target.clone(),
                    }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
