//! Keycalc: a pure functional keypad calculator
//!
//! Keycalc follows a "pure core, imperative shell" split. The core is a
//! small immutable state value and one pure, total transition function per
//! input class. The shell is a session that owns the current state, applies
//! inputs in arrival order, and does the logging.
//!
//! # Core Concepts
//!
//! - **CalculatorState**: display text, pending operand and operator, and
//!   whether the next digit starts a fresh number
//! - **Input**: digit, decimal point, operator, evaluate, clear
//! - **Transitions**: `(state, input) -> state`, never failing
//! - **KeyMap**: raw key names to inputs; anything unbound is dropped
//! - **Session**: serialized dispatch, journaling, `tracing` output
//!
//! Evaluation is strictly left to right: selecting an operator while one is
//! pending evaluates the pending one first.
//!
//! # Example
//!
//! ```rust
//! use keycalc::core::{reduce, CalculatorState, Input, Operator};
//!
//! let inputs = [
//!     Input::digit('7').unwrap(),
//!     Input::Operator(Operator::Add),
//!     Input::digit('3').unwrap(),
//!     Input::Evaluate,
//! ];
//!
//! let state = inputs
//!     .into_iter()
//!     .fold(CalculatorState::identity(), |state, input| reduce(&state, input));
//!
//! assert_eq!(state.display(), "10");
//! ```

pub mod config;
pub mod core;
pub mod keymap;
pub mod session;

// Re-export commonly used types
pub use config::SessionConfig;
pub use crate::core::{CalculatorState, Input, Operator, State};
pub use keymap::KeyMap;
pub use session::Session;
