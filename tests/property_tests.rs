//! Property-based tests for the engine.
//!
//! Random operation sequences are replayed against both the engine and a
//! plain model of the history cursor, and the two must agree after every
//! step.

use fsm_engine::{fsm_config, Configuration, Engine, EngineError};
use proptest::prelude::*;

const STATES: [&str; 4] = ["normal", "busy", "hungry", "sleeping"];
const EVENTS: [&str; 6] = ["study", "get_tired", "get_hungry", "eat", "get_up", "dance"];

fn student() -> Configuration {
    fsm_config! {
        initial: normal,
        states: {
            normal: { study => busy },
            busy: { get_tired => sleeping, get_hungry => hungry },
            hungry: { eat => normal },
            sleeping: { get_hungry => hungry, get_up => normal },
        }
    }
}

#[derive(Clone, Debug)]
enum Op {
    Change(String),
    Trigger(String),
    Reset,
    Undo,
    Redo,
    Clear,
}

prop_compose! {
    fn arbitrary_name(pool: &'static [&'static str])(index in 0..pool.len()) -> String {
        pool[index].to_string()
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop_oneof![arbitrary_name(&STATES), Just("attic".to_string())].prop_map(Op::Change),
        arbitrary_name(&EVENTS).prop_map(Op::Trigger),
        Just(Op::Reset),
        Just(Op::Undo),
        Just(Op::Undo),
        Just(Op::Redo),
        Just(Op::Redo),
        Just(Op::Clear),
    ]
}

/// Reference model: history as a vector of names plus a cursor.
struct Model {
    config: Configuration,
    current: String,
    history: Vec<String>,
    pointer: usize,
}

impl Model {
    fn new(config: Configuration) -> Self {
        Self {
            current: config.initial.clone(),
            config,
            history: Vec::new(),
            pointer: 0,
        }
    }

    fn push(&mut self, target: String) {
        self.history.truncate(self.pointer);
        self.history.push(self.current.clone());
        self.pointer += 1;
        self.current = target;
    }

    fn apply(&mut self, op: &Op) {
        match op {
            Op::Change(target) => {
                if self.config.contains_state(target) {
                    self.push(target.clone());
                }
            }
            Op::Trigger(event) => {
                let target = self
                    .config
                    .state(&self.current)
                    .and_then(|def| def.target(event))
                    .map(str::to_string);
                if let Some(target) = target {
                    self.push(target);
                }
            }
            Op::Reset => self.current = self.config.initial.clone(),
            Op::Undo => {
                if self.pointer > 0 {
                    if self.pointer == self.history.len() {
                        self.history.push(self.current.clone());
                    }
                    self.pointer -= 1;
                    self.current = self.history[self.pointer].clone();
                }
            }
            Op::Redo => {
                if self.history.len() > 1 && self.pointer < self.history.len() - 1 {
                    self.pointer += 1;
                    self.current = self.history[self.pointer].clone();
                }
            }
            Op::Clear => {
                self.history.clear();
                self.pointer = 0;
            }
        }
    }
}

fn apply(engine: &mut Engine, op: &Op) {
    match op {
        Op::Change(target) => {
            let _ = engine.change_state(target);
        }
        Op::Trigger(event) => {
            let _ = engine.trigger(event);
        }
        Op::Reset => engine.reset(),
        Op::Undo => {
            engine.undo();
        }
        Op::Redo => {
            engine.redo();
        }
        Op::Clear => engine.clear_history(),
    }
}

proptest! {
    #[test]
    fn engine_matches_reference_model(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut engine = Engine::new(student()).unwrap();
        let mut model = Model::new(student());

        for op in &ops {
            apply(&mut engine, op);
            model.apply(op);

            prop_assert_eq!(engine.current_state(), model.current.as_str());
            prop_assert_eq!(engine.history().pointer(), model.pointer);
            let history: Vec<&str> = engine.history().states().collect();
            let expected: Vec<&str> = model.history.iter().map(String::as_str).collect();
            prop_assert_eq!(history, expected);
        }
    }

    #[test]
    fn pointer_never_exceeds_history(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut engine = Engine::new(student()).unwrap();

        for op in &ops {
            apply(&mut engine, op);
            prop_assert!(engine.history().pointer() <= engine.history().len());
        }
    }

    #[test]
    fn current_state_is_always_declared(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut engine = Engine::new(student()).unwrap();

        for op in &ops {
            apply(&mut engine, op);
            prop_assert!(STATES.contains(&engine.current_state()));
        }
    }

    #[test]
    fn failed_operations_change_nothing(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        event in arbitrary_name(&EVENTS),
    ) {
        let mut engine = Engine::new(student()).unwrap();
        for op in &ops {
            apply(&mut engine, op);
        }

        let state = engine.current_state().to_string();
        let len = engine.history().len();
        let pointer = engine.history().pointer();

        let change = engine.change_state("attic");
        prop_assert!(
            matches!(change, Err(EngineError::UnknownState { .. })),
            "expected UnknownState"
        );

        if !engine.can_trigger(&event) {
            let trigger = engine.trigger(&event);
            prop_assert!(
                matches!(trigger, Err(EngineError::UnknownEvent { .. })),
                "expected UnknownEvent"
            );
        }

        prop_assert_eq!(engine.current_state(), state.as_str());
        prop_assert_eq!(engine.history().len(), len);
        prop_assert_eq!(engine.history().pointer(), pointer);
    }

    #[test]
    fn states_by_event_is_ordered_subset(event in arbitrary_name(&EVENTS)) {
        let engine = Engine::new(student()).unwrap();
        let all = engine.states(None);
        let filtered = engine.states(Some(&event));

        let mut last = None;
        for name in &filtered {
            let position = all.iter().position(|s| s == name);
            prop_assert!(position.is_some());
            prop_assert!(last < position);
            last = position;

            let def = engine.config().state(name).unwrap();
            prop_assert!(def.transitions.contains_key(&event));
        }

        for name in &all {
            let def = engine.config().state(name).unwrap();
            if def.transitions.contains_key(&event) {
                prop_assert!(filtered.contains(name), "{} accepts {} but was omitted", name, event);
            }
        }
    }

    #[test]
    fn undo_then_redo_returns_to_target(target in arbitrary_name(&STATES)) {
        let mut engine = Engine::new(student()).unwrap();
        engine.change_state(&target).unwrap();

        prop_assert!(engine.undo());
        prop_assert_eq!(engine.current_state(), "normal");
        prop_assert!(engine.redo());
        prop_assert_eq!(engine.current_state(), target.as_str());
    }
}
