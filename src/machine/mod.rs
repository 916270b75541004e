//! The event-driven state machine.
//!
//! This module provides the imperative shell around the core types: a
//! [`StateMachine`] owns a validated [`Configuration`](crate::core::Configuration),
//! its current state, and a [`History`](crate::core::History), and moves
//! between states either directly or by triggering events.

mod error;
mod state_machine;

pub use error::MachineError;
pub use state_machine::StateMachine;
