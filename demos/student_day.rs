//! Student Day State Machine
//!
//! This demo walks a small student routine loaded from a JSON document.
//!
//! Key concepts:
//! - Loading a transition table with serde
//! - Triggering events and handling unknown ones
//! - Undo/redo over the visited states
//!
//! Run with: RUST_LOG=debug cargo run --example student_day

use fsm_engine::{Engine, EngineError};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = include_str!("student.json");

fn main() -> Result<(), EngineError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    println!("=== Student Day State Machine ===\n");

    let mut student = Engine::from_json(CONFIG)?;
    println!("Initial state: {}", student.current_state());
    println!("All states: {:?}\n", student.states(None));

    for event in ["study", "get_hungry"] {
        student.trigger(event)?;
        println!("{event:>12} -> {}", student.current_state());
    }

    match student.trigger("fly") {
        Err(err) => println!("\nRejected: {err}"),
        Ok(()) => println!("\nUnexpectedly accepted 'fly'"),
    }

    println!("\nUndo/redo:");
    student.undo();
    println!("  undo -> {}", student.current_state());
    student.undo();
    println!("  undo -> {}", student.current_state());
    student.redo();
    println!("  redo -> {}", student.current_state());

    println!(
        "\nStates reacting to 'get_hungry': {:?}",
        student.states(Some("get_hungry"))
    );

    student.clear_history();
    println!("After clearing history, undo available: {}", student.can_undo());

    println!("\n=== Example Complete ===");
    Ok(())
}
