//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and a macro for declaring state
//! machine configurations in code instead of JSON, with the same
//! validation applied either way.

pub mod config;
pub mod error;
pub mod macros;

pub use config::ConfigurationBuilder;
pub use error::BuildError;
