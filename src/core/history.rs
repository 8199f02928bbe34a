//! Transition journal.
//!
//! An immutable record of applied inputs and the states they moved between.
//! Used for diagnostics; the calculator itself never reads it back.

use super::input::Input;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{vec_deque, VecDeque};
use std::time::Duration;

/// Record of a single applied input.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{reduce, CalculatorState, Input, StateTransition};
/// use chrono::Utc;
///
/// let from = CalculatorState::identity();
/// let input = Input::digit('4').unwrap();
/// let transition = StateTransition {
///     to: reduce(&from, input),
///     from,
///     input,
///     timestamp: Utc::now(),
/// };
/// assert!(transition.changed());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state before the input
    pub from: S,
    /// The state after the input
    pub to: S,
    /// The input that was applied
    pub input: Input,
    /// When the input was applied
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Whether the input produced a different state.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered journal of transitions.
///
/// `record` returns a new history with the transition added; the receiver is
/// left untouched. `push_bounded` is the in-place form used by a long-lived
/// owner that caps the journal.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{reduce, CalculatorState, Input, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
/// let mut state = CalculatorState::identity();
///
/// for input in [Input::digit('7').unwrap(), Input::DecimalPoint] {
///     let next = reduce(&state, input);
///     history = history.record(StateTransition {
///         from: state,
///         to: next.clone(),
///         input,
///         timestamp: Utc::now(),
///     });
///     state = next;
/// }
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[2].display(), "7.");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push_back(transition);
        Self { transitions }
    }

    /// Append a transition in place, keeping at most `capacity` entries.
    ///
    /// The oldest entries are dropped first. A capacity of zero keeps nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keycalc::core::{CalculatorState, Input, StateHistory, StateTransition};
    /// use chrono::Utc;
    ///
    /// let entry = StateTransition {
    ///     from: CalculatorState::identity(),
    ///     to: CalculatorState::identity(),
    ///     input: Input::Clear,
    ///     timestamp: Utc::now(),
    /// };
    ///
    /// let mut history = StateHistory::new();
    /// for _ in 0..3 {
    ///     history.push_bounded(entry.clone(), 2);
    /// }
    /// assert_eq!(history.len(), 2);
    /// ```
    pub fn push_bounded(&mut self, transition: StateTransition<S>, capacity: usize) {
        if capacity == 0 {
            self.transitions.clear();
            return;
        }
        while self.transitions.len() >= capacity {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition, then the `to` state
    /// of each transition in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Transitions from oldest to newest.
    pub fn transitions(&self) -> vec_deque::Iter<'_, StateTransition<S>> {
        self.transitions.iter()
    }

    pub fn get(&self, index: usize) -> Option<&StateTransition<S>> {
        self.transitions.get(index)
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
