//! Waypoint: an event-driven finite state machine with undo/redo
//!
//! A machine is described by a declarative configuration: an initial state
//! and, for every state, the events leaving it and where each one leads.
//! The machine tracks its current state, applies transitions by event or
//! by direct state change, and keeps a linear history so moves can be
//! undone and redone.
//!
//! # Core Concepts
//!
//! - **Configuration**: Validated, declaration-ordered states and transitions
//! - **History**: Forward (undo) and backward (redo) stacks of visited states
//! - **StateMachine**: Applies transitions and walks the history
//!
//! # Example
//!
//! ```rust
//! use waypoint::{fsm_config, StateId, StateMachine};
//!
//! let config = fsm_config! {
//!     initial: normal,
//!     normal { study => busy },
//!     busy { get_tired => sleeping, get_hungry => hungry },
//!     hungry { eat => normal },
//!     sleeping { get_hungry => hungry, get_up => normal },
//! }
//! .unwrap();
//!
//! let mut machine = StateMachine::new(config).unwrap();
//! machine.trigger("study").unwrap();
//! machine.trigger("get_tired").unwrap();
//! assert_eq!(machine.state(), "sleeping");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "busy");
//!
//! let hungry_from = machine.states(Some("get_hungry"));
//! assert_eq!(hungry_from, vec![StateId::from("busy"), StateId::from("sleeping")]);
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, ConfigurationBuilder};
pub use core::{ConfigError, Configuration, EventId, History, StateId};
pub use machine::{MachineError, StateMachine};
