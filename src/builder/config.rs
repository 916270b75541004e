//! Builder for constructing configurations.

use crate::builder::error::BuildError;
use crate::core::{Configuration, EventId, StateDefinition, StateId};
use indexmap::IndexMap;

/// Builder for constructing configurations with a fluent API.
///
/// States are listed in the order they are first mentioned, either by
/// [`state`](Self::state), [`declare`](Self::declare), or as the source of
/// a [`transition`](Self::transition).
#[derive(Clone, Debug, Default)]
pub struct ConfigurationBuilder {
    initial: Option<StateId>,
    states: IndexMap<StateId, StateDefinition>,
}

impl ConfigurationBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state with its `(event, target)` transitions.
    ///
    /// Declaring the same state again adds to its transitions.
    pub fn state<I, E, T>(mut self, state: impl Into<StateId>, transitions: I) -> Self
    where
        I: IntoIterator<Item = (E, T)>,
        E: Into<EventId>,
        T: Into<StateId>,
    {
        let definition = self.states.entry(state.into()).or_default();
        definition.transitions.extend(
            transitions
                .into_iter()
                .map(|(event, to)| (event.into(), to.into())),
        );
        self
    }

    /// Declare a state without adding transitions.
    pub fn declare(mut self, state: impl Into<StateId>) -> Self {
        self.states.entry(state.into()).or_default();
        self
    }

    /// Add one transition, declaring `from` if needed.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        event: impl Into<EventId>,
        to: impl Into<StateId>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration, rejecting transitions to undeclared states
    /// as well as the checks a machine needs to start.
    pub fn build(self) -> Result<Configuration, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let config = Configuration::new(initial, self.states);
        config.validate_strict()?;
        Ok(config)
    }
}
