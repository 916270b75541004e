//! Daily Routine
//!
//! This example walks a small daily-routine machine through a few events,
//! then undoes and redoes some of them.
//!
//! Key concepts:
//! - Declaring a configuration at the call site
//! - Triggering events and handling rejected ones
//! - Linear undo/redo and clearing history
//!
//! Run with: cargo run --example daily_routine
//! Set RUST_LOG=waypoint=debug to see every transition.

use tracing_subscriber::EnvFilter;
use waypoint::{fsm_config, MachineError, StateMachine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Daily Routine Example ===\n");

    let config = fsm_config! {
        initial: normal,
        normal { study => busy },
        busy { get_tired => sleeping, get_hungry => hungry },
        hungry { eat => normal },
        sleeping { get_hungry => hungry, get_up => normal },
    }?;

    let mut machine = StateMachine::new(config)?;
    println!("Initial state: {}", machine.state());

    for event in ["study", "get_tired", "get_up", "study", "get_hungry"] {
        machine.trigger(event)?;
        println!("  {event:<12} -> {}", machine.state());
    }

    match machine.trigger("study") {
        Err(MachineError::InvalidEvent { state, event }) => {
            println!("\nCannot `{event}` while {state}");
        }
        other => println!("\nUnexpected: {other:?}"),
    }

    println!("\nUndoing two steps:");
    for _ in 0..2 {
        machine.undo();
        println!("  now {}", machine.state());
    }
    machine.redo();
    println!("Redo -> {}", machine.state());

    let names: Vec<String> = machine
        .states(Some("get_hungry"))
        .into_iter()
        .map(|state| state.into_inner())
        .collect();
    println!("\nStates that can get hungry: {}", names.join(", "));

    machine.clear_history();
    println!(
        "History cleared in state {}; undo available: {}",
        machine.state(),
        machine.can_undo()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
