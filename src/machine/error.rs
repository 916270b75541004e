//! Errors raised by state machine operations.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// Errors that can occur when moving a machine between states.
///
/// A rejected operation never mutates the machine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MachineError {
    /// The requested target is not a declared state.
    #[error("State `{state}` is not declared")]
    InvalidState { state: StateId },

    /// The current state has no transition for the event.
    #[error("No transition for event `{event}` from state `{state}`")]
    InvalidEvent { state: StateId, event: EventId },
}
