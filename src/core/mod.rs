//! Core types of the state machine.
//!
//! This module contains the data the machine operates on:
//! - State and event identifiers
//! - The declarative, validated configuration
//! - The linear undo/redo history
//!
//! Nothing here performs a transition; see [`crate::machine`] for that.

mod config;
mod history;
mod state;

pub use config::{ConfigError, ConfigViolation, Configuration, StateDefinition};
pub use history::{History, HISTORY_SENTINEL};
pub use state::{EventId, StateId};
