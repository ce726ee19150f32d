//! Engine that walks a transition table and keeps an undo/redo log.

use crate::core::{Configuration, History};
use crate::engine::error::EngineError;
use std::sync::Arc;
use stillwater::validation::Validation;
use tracing::{debug, warn};
use uuid::Uuid;

/// When transition destinations are checked against declared states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DestinationCheck {
    /// Resolve destinations only when a transition fires
    #[default]
    Lazy,

    /// Validate the whole configuration at construction
    Eager,
}

/// Construction options for an [`Engine`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineOptions {
    pub destinations: DestinationCheck,
}

impl EngineOptions {
    /// Options that reject configurations with dangling references.
    pub fn strict() -> Self {
        Self {
            destinations: DestinationCheck::Eager,
        }
    }

    pub fn destinations(mut self, check: DestinationCheck) -> Self {
        self.destinations = check;
        self
    }
}

/// Table-driven state machine.
///
/// The configuration is shared behind an [`Arc`] and never mutated, so one
/// table can back any number of engines.
///
/// # Example
///
/// ```rust
/// use fsm_engine::fsm_config;
/// use fsm_engine::Engine;
///
/// let config = fsm_config! {
///     initial: normal,
///     states: {
///         normal: { study => busy },
///         busy: { get_tired => sleeping, get_hungry => hungry },
///         hungry: { eat => normal },
///         sleeping: { get_hungry => hungry, get_up => normal },
///     }
/// };
///
/// let mut engine = Engine::new(config).unwrap();
/// engine.trigger("study").unwrap();
/// engine.trigger("get_hungry").unwrap();
/// assert_eq!(engine.current_state(), "hungry");
///
/// assert!(engine.undo());
/// assert_eq!(engine.current_state(), "busy");
/// assert!(engine.redo());
/// assert_eq!(engine.current_state(), "hungry");
///
/// assert_eq!(engine.states(Some("get_hungry")), vec!["busy", "sleeping"]);
/// ```
#[derive(Debug)]
pub struct Engine {
    id: Uuid,
    config: Arc<Configuration>,
    current: String,
    history: History,
}

impl Engine {
    /// Create an engine in the configuration's initial state.
    ///
    /// Fails with [`EngineError::InvalidConfig`] when the configuration is
    /// completely empty. Nothing else is checked: an undeclared initial
    /// state or a dangling destination only surfaces when it is used.
    pub fn new(config: impl Into<Arc<Configuration>>) -> Result<Self, EngineError> {
        Self::with_options(config, EngineOptions::default())
    }

    /// Create an engine with explicit options.
    pub fn with_options(
        config: impl Into<Arc<Configuration>>,
        options: EngineOptions,
    ) -> Result<Self, EngineError> {
        let config = config.into();
        if config.is_empty() {
            return Err(EngineError::InvalidConfig);
        }

        if options.destinations == DestinationCheck::Eager {
            if let Validation::Failure(errors) = config.validate() {
                return Err(EngineError::RejectedConfig {
                    violations: errors.iter().cloned().collect(),
                });
            }
        }

        let engine = Self {
            id: Uuid::new_v4(),
            current: config.initial.clone(),
            config,
            history: History::new(),
        };
        debug!(
            engine = %engine.id,
            initial = %engine.current,
            states = engine.config.states.len(),
            "engine created"
        );
        Ok(engine)
    }

    /// Parse a configuration document and build a lazy engine from it.
    ///
    /// A `null` document counts as a missing configuration.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: Option<Configuration> = serde_json::from_str(json)?;
        let config = config.ok_or(EngineError::InvalidConfig)?;
        Self::new(config)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Name of the active state.
    pub fn current_state(&self) -> &str {
        &self.current
    }

    /// Jump straight to `target`, ignoring the transition table.
    ///
    /// The jump is recorded in history exactly like a triggered transition.
    pub fn change_state(&mut self, target: &str) -> Result<(), EngineError> {
        if !self.config.contains_state(target) {
            return Err(EngineError::UnknownState {
                state: target.to_string(),
            });
        }

        debug!(engine = %self.id, from = %self.current, to = target, "direct state change");
        self.move_to(target.to_string());
        Ok(())
    }

    /// Fire `event` from the current state.
    ///
    /// The destination is taken from the table as written. In lazy mode it
    /// may name an undeclared state; the engine moves there anyway and
    /// every later `trigger` fails until the state is changed.
    pub fn trigger(&mut self, event: &str) -> Result<(), EngineError> {
        let target = self
            .config
            .state(&self.current)
            .and_then(|def| def.target(event))
            .map(str::to_string)
            .ok_or_else(|| EngineError::UnknownEvent {
                event: event.to_string(),
                state: self.current.clone(),
            })?;

        if !self.config.contains_state(&target) {
            warn!(
                engine = %self.id,
                from = %self.current,
                to = %target,
                event,
                "transition targets undeclared state"
            );
        }

        debug!(engine = %self.id, from = %self.current, to = %target, event, "transition applied");
        self.move_to(target);
        Ok(())
    }

    /// Whether `trigger(event)` would succeed from the current state.
    pub fn can_trigger(&self, event: &str) -> bool {
        self.config
            .state(&self.current)
            .is_some_and(|def| def.transitions.contains_key(event))
    }

    /// Events declared on the current state, in declaration order.
    pub fn available_events(&self) -> Vec<&str> {
        self.config
            .state(&self.current)
            .map(|def| def.events().collect())
            .unwrap_or_default()
    }

    /// Return to the initial state.
    ///
    /// History is left untouched, so an earlier undo/redo log survives.
    pub fn reset(&mut self) {
        debug!(engine = %self.id, from = %self.current, to = %self.config.initial, "reset");
        self.current = self.config.initial.clone();
    }

    /// Declared states, optionally only those that accept `event`.
    ///
    /// Results follow declaration order. An empty event name counts as no
    /// event. An event no state declares gives an empty list.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            None | Some("") => self.config.state_names().collect(),
            Some(event) => self
                .config
                .states
                .iter()
                .filter(|(_, def)| def.transitions.contains_key(event))
                .map(|(name, _)| name)
                .collect(),
        }
    }

    /// Step back to the previous state. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        match self.history.step_back(&self.current) {
            Some(previous) => {
                debug!(engine = %self.id, from = %self.current, to = %previous, "undo");
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Step forward to an undone state. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        match self.history.step_forward() {
            Some(next) => {
                debug!(engine = %self.id, from = %self.current, to = %next, "redo");
                self.current = next;
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_step_back()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_step_forward()
    }

    /// Forget all history. The current state is kept.
    pub fn clear_history(&mut self) {
        debug!(engine = %self.id, dropped = self.history.len(), "history cleared");
        self.history.clear();
    }

    fn move_to(&mut self, target: String) {
        self.history.record(&self.current);
        self.current = target;
    }
}
