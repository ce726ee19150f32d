//! Builder for constructing configurations.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{Configuration, StateDef, Table};

/// Builder for constructing configurations with a fluent API.
///
/// Stricter than the engine: it insists on an initial state, at least one
/// state and unique state names. Destinations are still not checked; use
/// [`Configuration::validate`] or an eager engine for that.
pub struct ConfigBuilder {
    initial: Option<String>,
    states: Table<StateDef>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Table::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Add a state using a builder.
    /// Returns an error if the name is already taken.
    pub fn state(self, builder: StateBuilder) -> Result<Self, BuildError> {
        let (name, def) = builder.build();
        self.add_state(name, def)
    }

    /// Add a pre-built state definition.
    pub fn add_state(mut self, name: impl Into<String>, def: StateDef) -> Result<Self, BuildError> {
        let name = name.into();
        if self.states.contains_key(&name) {
            return Err(BuildError::DuplicateState(name));
        }
        self.states.insert(name, def);
        Ok(self)
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Configuration, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(Configuration::new(initial, self.states))
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
