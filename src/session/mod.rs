//! Imperative shell around the pure core.
//!
//! A `Session` owns one calculator state and replaces it with the result of
//! each input, in the order the inputs arrive. It is the only place that
//! logs and the only place that keeps a journal.
//!
//! Dispatch is serialized by ownership: applying an input needs `&mut
//! Session`, and a [`Subscription`] holds that exclusive borrow for as long
//! as it lives.
//!
//! # Example
//!
//! ```rust
//! use keycalc::session::Session;
//!
//! let mut session = Session::default();
//! for key in ["7", "+", "3", "Enter"] {
//!     session.press(key);
//! }
//! assert_eq!(session.display(), "10");
//! ```

mod subscription;

pub use subscription::Subscription;

use crate::config::{ConfigError, SessionConfig, DEFAULT_JOURNAL_CAPACITY};
use crate::core::{reduce, CalculatorState, Input, State, StateHistory, StateTransition};
use crate::keymap::KeyMap;
use chrono::Utc;

/// One calculator session.
#[derive(Clone, Debug)]
pub struct Session {
    state: CalculatorState,
    keymap: KeyMap,
    journal: StateHistory<CalculatorState>,
    journal_capacity: usize,
}

impl Session {
    /// Start a session from a configuration.
    pub fn new(config: &SessionConfig) -> Result<Self, ConfigError> {
        let keymap = config.keymap()?;
        Ok(Self::with_keymap(keymap, config.journal_capacity))
    }

    /// Start a session with an already built key map.
    pub fn with_keymap(keymap: KeyMap, journal_capacity: usize) -> Self {
        Self {
            state: CalculatorState::identity(),
            keymap,
            journal: StateHistory::new(),
            journal_capacity,
        }
    }

    /// Apply one input and return the new state.
    pub fn apply(&mut self, input: Input) -> &CalculatorState {
        let next = reduce(&self.state, input);

        if next == self.state {
            tracing::trace!(%input, phase = self.state.name(), "input left state unchanged");
        } else {
            tracing::debug!(
                %input,
                from = self.state.name(),
                to = next.name(),
                display = next.display(),
                "applied input"
            );
        }

        if self.journal_capacity > 0 {
            let entry = StateTransition {
                from: self.state.clone(),
                to: next.clone(),
                input,
                timestamp: Utc::now(),
            };
            self.journal.push_bounded(entry, self.journal_capacity);
        }

        self.state = next;
        &self.state
    }

    /// Apply inputs in order and return the final state.
    pub fn apply_all<I>(&mut self, inputs: I) -> &CalculatorState
    where
        I: IntoIterator<Item = Input>,
    {
        for input in inputs {
            self.apply(input);
        }
        &self.state
    }

    /// Resolve a raw key and apply it.
    ///
    /// Returns `None`, leaving the state untouched, for unbound keys.
    pub fn press(&mut self, key: &str) -> Option<&CalculatorState> {
        let input = self.keymap.resolve(key)?;
        Some(self.apply(input))
    }

    /// Acquire the input subscription for this session.
    ///
    /// The subscription is released when dropped.
    pub fn subscribe(&mut self) -> Subscription<'_> {
        tracing::debug!("input subscription acquired");
        Subscription::new(self)
    }

    /// Return to the identity state.
    pub fn reset(&mut self) -> &CalculatorState {
        self.apply(Input::Clear)
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display(&self) -> &str {
        self.state.display()
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    pub fn journal(&self) -> &StateHistory<CalculatorState> {
        &self.journal
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_keymap(KeyMap::default(), DEFAULT_JOURNAL_CAPACITY)
    }
}
