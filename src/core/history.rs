//! Linear undo/redo history of visited states.
//!
//! The history is a pair of stacks. The forward stack holds the states
//! visited so far (oldest first) and backs `undo`; the backward stack holds
//! states that were undone and backs `redo` until a new transition is
//! recorded.

use super::state::StateId;

/// Label seeding the forward stack on creation and after [`History::clear`].
///
/// This is a fixed literal and is not derived from the configured initial
/// state. A machine whose initial state has another name will report
/// `"normal"` as its state after undoing back to the seed entry. Known bug,
/// kept for compatibility with existing callers.
pub const HISTORY_SENTINEL: &str = "normal";

/// Forward (undo) and backward (redo) stacks of visited states.
///
/// # Example
///
/// ```rust
/// use waypoint::core::History;
///
/// let mut history = History::new();
/// history.record("busy".into());
/// history.record("sleeping".into());
///
/// assert_eq!(history.undo().map(|s| s.as_str()), Some("busy"));
/// assert_eq!(history.redo().map(|s| s.as_str()), Some("sleeping"));
/// assert!(history.redo().is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct History {
    forward: Vec<StateId>,
    backward: Vec<StateId>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a history holding only the sentinel entry.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waypoint::core::{History, HISTORY_SENTINEL};
    ///
    /// let history = History::new();
    /// assert_eq!(history.forward().len(), 1);
    /// assert_eq!(history.forward()[0], HISTORY_SENTINEL);
    /// assert!(history.backward().is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            forward: vec![StateId::from(HISTORY_SENTINEL)],
            backward: Vec::new(),
        }
    }

    /// Record a newly entered state.
    ///
    /// Pushes onto the forward stack and invalidates everything that could
    /// have been redone.
    pub fn record(&mut self, state: StateId) {
        self.forward.push(state);
        self.backward.clear();
    }

    /// Step back one entry.
    ///
    /// Moves the newest forward entry onto the backward stack and returns
    /// the entry that is now newest, i.e. the state to return to. Returns
    /// `None` without changing anything when only one entry remains.
    pub fn undo(&mut self) -> Option<&StateId> {
        if self.forward.len() <= 1 {
            return None;
        }
        let undone = self.forward.pop()?;
        self.backward.push(undone);
        self.forward.last()
    }

    /// Step forward one previously undone entry.
    ///
    /// Returns the re-entered state, or `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<&StateId> {
        let redone = self.backward.pop()?;
        self.forward.push(redone);
        self.forward.last()
    }

    /// Reset both stacks to their freshly created shape.
    pub fn clear(&mut self) {
        self.backward.clear();
        self.forward.clear();
        self.forward.push(StateId::from(HISTORY_SENTINEL));
    }

    /// Whether [`History::undo`] would succeed.
    pub fn can_undo(&self) -> bool {
        self.forward.len() > 1
    }

    /// Whether [`History::redo`] would succeed.
    pub fn can_redo(&self) -> bool {
        !self.backward.is_empty()
    }

    /// Visited states, oldest first. The first entry is always the sentinel.
    pub fn forward(&self) -> &[StateId] {
        &self.forward
    }

    /// Undone states; the last entry is the next one `redo` returns.
    pub fn backward(&self) -> &[StateId] {
        &self.backward
    }
}
