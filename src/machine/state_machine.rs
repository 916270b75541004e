//! State machine driven by declared event transitions.

use crate::core::{ConfigError, Configuration, EventId, History, StateId};
use crate::machine::error::MachineError;
use tracing::debug;

/// State machine over a validated configuration, with linear undo/redo.
///
/// # Example
///
/// ```rust
/// use waypoint::builder::ConfigurationBuilder;
/// use waypoint::machine::StateMachine;
///
/// let config = ConfigurationBuilder::new()
///     .initial("normal")
///     .state("normal", [("study", "busy")])
///     .state("busy", [("get_up", "normal")])
///     .build()
///     .unwrap();
///
/// let mut machine = StateMachine::new(config).unwrap();
/// machine.trigger("study").unwrap();
/// assert_eq!(machine.state(), "busy");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "normal");
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "busy");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Configuration,
    state: StateId,
    history: History,
}

impl StateMachine {
    /// Create a machine in the configured initial state.
    ///
    /// Passing `None` means no configuration was supplied and fails with
    /// [`ConfigError::Missing`]. An empty state table or an undeclared
    /// initial state is rejected, every violation reported at once.
    /// Transitions to undeclared states are accepted; triggering one fails
    /// with [`MachineError::InvalidState`].
    pub fn new(config: impl Into<Option<Configuration>>) -> Result<Self, ConfigError> {
        let config = config.into().ok_or(ConfigError::Missing)?;
        config.validate()?;

        let state = config.initial().clone();
        debug!(initial = %state, states = config.states().len(), "state machine created");

        Ok(Self {
            config,
            state,
            history: History::new(),
        })
    }

    /// Create a machine from a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Self::new(Configuration::from_json_str(json)?)
    }

    /// Current state.
    pub fn state(&self) -> &StateId {
        &self.state
    }

    /// Configured initial state.
    pub fn initial(&self) -> &StateId {
        self.config.initial()
    }

    /// Configuration the machine was built from.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Undo/redo history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Move directly to `target`, regardless of declared events.
    ///
    /// Records the move for undo and discards anything that could have
    /// been redone.
    pub fn change_state(&mut self, target: &str) -> Result<(), MachineError> {
        let Some((target, _)) = self.config.states().get_key_value(target) else {
            debug!(state = %self.state, target, "rejected change to undeclared state");
            return Err(MachineError::InvalidState {
                state: StateId::from(target),
            });
        };

        debug!(from = %self.state, to = %target, "state changed");
        self.state = target.clone();
        self.history.record(target.clone());
        Ok(())
    }

    /// Fire `event` from the current state.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let target = self
            .config
            .state(self.state.as_str())
            .and_then(|definition| definition.target(event))
            .cloned();

        let Some(target) = target else {
            debug!(state = %self.state, event, "rejected event with no transition");
            return Err(MachineError::InvalidEvent {
                state: self.state.clone(),
                event: EventId::from(event),
            });
        };

        debug!(state = %self.state, event, "event triggered");
        self.change_state(target.as_str())
    }

    /// Return to the initial state. Recorded like any other change.
    pub fn reset(&mut self) -> Result<(), MachineError> {
        let initial = self.config.initial().clone();
        self.change_state(initial.as_str())
    }

    /// List declared states.
    ///
    /// With an event, only states declaring a transition for it. `None`
    /// and an empty event name both list every state. Declaration order
    /// either way.
    pub fn states(&self, event: Option<&str>) -> Vec<StateId> {
        let states = self.config.states();
        match event.filter(|event| !event.is_empty()) {
            Some(event) => states
                .iter()
                .filter(|(_, definition)| definition.handles(event))
                .map(|(state, _)| state.clone())
                .collect(),
            None => states.keys().cloned().collect(),
        }
    }

    /// Events leaving the current state, in declaration order.
    pub fn events(&self) -> Vec<EventId> {
        self.config
            .state(self.state.as_str())
            .map(|definition| definition.events().cloned().collect())
            .unwrap_or_default()
    }

    /// Go back to the previously recorded state.
    ///
    /// Returns `false`, changing nothing, when only the history seed is left.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(previous) => {
                debug!(from = %self.state, to = %previous, "undo");
                self.state = previous.clone();
                true
            }
            None => false,
        }
    }

    /// Re-enter the most recently undone state.
    ///
    /// Returns `false`, changing nothing, when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(next) => {
                debug!(from = %self.state, to = %next, "redo");
                self.state = next.clone();
                true
            }
            None => false,
        }
    }

    /// Whether [`StateMachine::undo`] would change the state.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether [`StateMachine::redo`] would change the state.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Forget all recorded moves. The current state is left as is.
    pub fn clear_history(&mut self) {
        debug!(state = %self.state, "history cleared");
        self.history.clear();
    }
}
