//! Pure calculator core.
//!
//! This module contains everything that decides how the display changes:
//! - `CalculatorState`, the immutable state value
//! - Typed inputs (`Digit`, `Operator`, `Input`)
//! - One pure transition function per input class, plus `reduce`
//! - Display text conversions
//! - The transition journal
//!
//! Nothing in here logs or fails.

mod error;
mod history;
mod input;
mod number;
mod state;
mod transition;

pub use error::{InputError, StateError};
pub use history::{StateHistory, StateTransition};
pub use input::{Digit, Input, Operator};
pub use number::{format_number, parse_display};
pub use state::{CalculatorState, Phase, State};
pub use transition::{clear, decimal_point_entry, digit_entry, evaluate, operator_select, reduce};
