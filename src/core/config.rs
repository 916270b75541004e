//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for every declared state,
//! the events leaving it and the state each event leads to. Declaration
//! order is preserved, so listing states reports them the way they were
//! written.
//!
//! The JSON shape is:
//!
//! ```json
//! {
//!   "initial": "normal",
//!   "states": {
//!     "normal": { "transitions": { "study": "busy" } },
//!     "busy":   { "transitions": { "get_up": "normal" } }
//!   }
//! }
//! ```

use super::state::{EventId, StateId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;
use tracing::debug;

/// A single problem found while validating a configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("No states declared")]
    NoStates,

    #[error("Initial state `{0}` is not declared")]
    UndeclaredInitial(StateId),

    #[error("Transition `{event}` from `{from}` targets undeclared state `{to}`")]
    UndeclaredTarget {
        from: StateId,
        event: EventId,
        to: StateId,
    },
}

/// Errors raised while loading or accepting a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration was supplied at all.
    #[error("Missing configuration")]
    Missing,

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Every violation found, not only the first.
    #[error("Invalid configuration: {}", format_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Outbound transitions of one state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateDefinition {
    #[serde(default)]
    pub transitions: IndexMap<EventId, StateId>,
}

impl StateDefinition {
    /// Create a state definition from `(event, target)` pairs.
    pub fn new<I, E, T>(transitions: I) -> Self
    where
        I: IntoIterator<Item = (E, T)>,
        E: Into<EventId>,
        T: Into<StateId>,
    {
        Self {
            transitions: transitions
                .into_iter()
                .map(|(event, to)| (event.into(), to.into()))
                .collect(),
        }
    }

    /// Destination of `event` from this state, if the event is declared.
    pub fn target(&self, event: &str) -> Option<&StateId> {
        self.transitions.get(event)
    }

    /// Whether this state declares a transition for `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    /// Events leaving this state, in declaration order.
    pub fn events(&self) -> impl Iterator<Item = &EventId> {
        self.transitions.keys()
    }
}

/// Immutable description of a state machine.
///
/// # Example
///
/// ```rust
/// use waypoint::core::Configuration;
///
/// let config = Configuration::from_json_str(r#"{
///     "initial": "normal",
///     "states": {
///         "normal": { "transitions": { "study": "busy" } },
///         "busy": { "transitions": { "get_up": "normal" } }
///     }
/// }"#).unwrap();
///
/// assert_eq!(config.initial(), "normal");
/// assert_eq!(config.state("normal").and_then(|s| s.target("study")).unwrap(), "busy");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    initial: StateId,
    states: IndexMap<StateId, StateDefinition>,
}

impl Configuration {
    /// Create a configuration from its parts. Not validated here; see
    /// [`Configuration::validate`].
    pub fn new(initial: impl Into<StateId>, states: IndexMap<StateId, StateDefinition>) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Parse a configuration document.
    ///
    /// A `null` document means no configuration was supplied and yields
    /// [`ConfigError::Missing`].
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Option<Self> = serde_json::from_str(json)?;
        config.ok_or(ConfigError::Missing)
    }

    /// Parse a configuration document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let config: Option<Self> = serde_json::from_reader(reader)?;
        config.ok_or(ConfigError::Missing)
    }

    /// Load a configuration document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Render the configuration back to its JSON document.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn initial(&self) -> &StateId {
        &self.initial
    }

    pub fn states(&self) -> &IndexMap<StateId, StateDefinition> {
        &self.states
    }

    /// Definition of a declared state.
    pub fn state(&self, state: &str) -> Option<&StateDefinition> {
        self.states.get(state)
    }

    pub fn contains_state(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Check what a machine needs to start, collecting every violation.
    ///
    /// Checks that at least one state is declared and that the initial
    /// state is declared. Transitions to undeclared states are allowed
    /// here; firing one fails at that point instead. See
    /// [`Configuration::lint`] for the stricter check.
    pub fn check(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        Validation::all_vec(self.structural_checks()).map(|_| ())
    }

    /// [`Configuration::check`] plus every transition targeting a
    /// declared state.
    pub fn lint(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks = self.structural_checks();
        checks.extend(self.target_checks());
        Validation::all_vec(checks).map(|_| ())
    }

    /// [`Configuration::check`] as a `Result`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        into_result(self.check())
    }

    /// [`Configuration::lint`] as a `Result`.
    pub fn validate_strict(&self) -> Result<(), ConfigError> {
        into_result(self.lint())
    }

    fn structural_checks(&self) -> Vec<Validation<(), NonEmptyVec<ConfigViolation>>> {
        let mut checks = Vec::new();

        if self.states.is_empty() {
            checks.push(Validation::fail(ConfigViolation::NoStates));
        }

        if !self.contains_state(self.initial.as_str()) {
            checks.push(Validation::fail(ConfigViolation::UndeclaredInitial(
                self.initial.clone(),
            )));
        }

        checks
    }

    fn target_checks(&self) -> Vec<Validation<(), NonEmptyVec<ConfigViolation>>> {
        let mut checks = Vec::new();

        for (from, definition) in &self.states {
            for (event, to) in &definition.transitions {
                if !self.contains_state(to.as_str()) {
                    checks.push(Validation::fail(ConfigViolation::UndeclaredTarget {
                        from: from.clone(),
                        event: event.clone(),
                        to: to.clone(),
                    }));
                }
            }
        }

        checks
    }
}

fn into_result(validation: Validation<(), NonEmptyVec<ConfigViolation>>) -> Result<(), ConfigError> {
    match validation {
        Validation::Success(()) => Ok(()),
        Validation::Failure(violations) => Err(ConfigError::Invalid(
            violations.iter().cloned().collect(),
        )),
    }
}
