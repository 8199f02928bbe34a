//! Scoped input subscription.

use super::Session;
use crate::core::{CalculatorState, Input};

/// Exclusive input channel into a [`Session`].
///
/// Holding a subscription borrows the session mutably, so no other code can
/// apply inputs until it is dropped. Dropping it releases the subscription.
///
/// # Example
///
/// ```rust
/// use keycalc::session::Session;
///
/// let mut session = Session::default();
/// {
///     let mut keys = session.subscribe();
///     for key in ["9", "+", "1", "-", "5", "="] {
///         keys.dispatch(key);
///     }
///     assert_eq!(keys.dispatched(), 6);
/// }
/// assert_eq!(session.display(), "5");
/// ```
#[derive(Debug)]
pub struct Subscription<'a> {
    session: &'a mut Session,
    dispatched: usize,
    ignored: usize,
}

impl<'a> Subscription<'a> {
    pub(super) fn new(session: &'a mut Session) -> Self {
        Self {
            session,
            dispatched: 0,
            ignored: 0,
        }
    }

    /// Deliver a raw key. Unbound keys are counted and dropped.
    pub fn dispatch(&mut self, key: &str) -> Option<&CalculatorState> {
        match self.session.keymap().resolve(key) {
            Some(input) => Some(self.dispatch_input(input)),
            None => {
                self.ignored += 1;
                None
            }
        }
    }

    /// Deliver an already normalized input.
    pub fn dispatch_input(&mut self, input: Input) -> &CalculatorState {
        self.dispatched += 1;
        self.session.apply(input)
    }

    pub fn display(&self) -> &str {
        self.session.display()
    }

    /// Inputs delivered to the session so far.
    pub fn dispatched(&self) -> usize {
        self.dispatched
    }

    /// Keys dropped because nothing was bound to them.
    pub fn ignored(&self) -> usize {
        self.ignored
    }
}

impl Drop for Subscription<'_> {
    fn drop(&mut self) {
        tracing::debug!(
            dispatched = self.dispatched,
            ignored = self.ignored,
            "input subscription released"
        );
    }
}
