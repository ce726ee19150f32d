//! fsm-engine: A table-driven finite state machine engine
//!
//! A machine is described by a declarative transition table: an initial
//! state plus, for every state, the events it accepts and where each event
//! leads. The [`Engine`] tracks the current state, applies transitions,
//! and keeps a linear undo/redo history of the states it has left.
//!
//! # Core Concepts
//!
//! - **Configuration**: Ordered, serde-friendly transition table
//! - **Engine**: Current state, event triggers, direct jumps and reset
//! - **History**: Array-plus-cursor log backing `undo` and `redo`
//!
//! Transitions are pure table lookups: there are no guards, actions or
//! hooks. Destinations are resolved lazily unless an engine is built with
//! [`EngineOptions::strict`].
//!
//! # Example
//!
//! ```rust
//! use fsm_engine::{Engine, EngineError};
//!
//! let mut engine = Engine::from_json(r#"{
//!     "initial": "normal",
//!     "states": {
//!         "normal": { "transitions": { "study": "busy" } },
//!         "busy": { "transitions": { "get_tired": "sleeping", "get_hungry": "hungry" } },
//!         "hungry": { "transitions": { "eat": "normal" } },
//!         "sleeping": { "transitions": { "get_hungry": "hungry", "get_up": "normal" } }
//!     }
//! }"#).unwrap();
//!
//! engine.trigger("study").unwrap();
//! assert_eq!(engine.current_state(), "busy");
//!
//! assert!(matches!(engine.trigger("eat"), Err(EngineError::UnknownEvent { .. })));
//!
//! assert!(engine.undo());
//! assert_eq!(engine.current_state(), "normal");
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::{BuildError, ConfigBuilder, StateBuilder};
pub use crate::core::{Configuration, History, StateDef, Table};
pub use crate::engine::{DestinationCheck, Engine, EngineError, EngineOptions};
