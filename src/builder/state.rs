//! Builder for a single state's transition table.

use crate::core::{StateDef, Table};

/// Builder for one state and its outgoing transitions.
///
/// Declaring the same event twice keeps the first position and the last
/// target, the same way a configuration document would.
pub struct StateBuilder {
    name: String,
    transitions: Table<String>,
}

impl StateBuilder {
    /// Start a state with no transitions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: Table::new(),
        }
    }

    /// Add a transition taken when `event` fires in this state.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event, target.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Finish the state, returning its name and definition.
    pub fn build(self) -> (String, StateDef) {
        (self.name, StateDef::new(self.transitions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_transitions_in_order() {
        let (name, def) = StateBuilder::new("busy")
            .on("get_tired", "sleeping")
            .on("get_hungry", "hungry")
            .build();

        assert_eq!(name, "busy");
        assert_eq!(def.events().collect::<Vec<_>>(), vec!["get_tired", "get_hungry"]);
        assert_eq!(def.target("get_tired"), Some("sleeping"));
    }

    #[test]
    fn repeated_event_keeps_last_target() {
        let (_, def) = StateBuilder::new("a").on("go", "b").on("go", "c").build();

        assert_eq!(def.transitions.len(), 1);
        assert_eq!(def.target("go"), Some("c"));
    }

    #[test]
    fn state_without_transitions() {
        let builder = StateBuilder::new("done");
        assert_eq!(builder.name(), "done");

        let (_, def) = builder.build();
        assert!(def.transitions.is_empty());
    }
}
