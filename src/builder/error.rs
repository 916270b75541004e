//! Build errors for configuration builders.

use crate::core::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states declared. Call .state(name, transitions) at least once")]
    NoStates,

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}
