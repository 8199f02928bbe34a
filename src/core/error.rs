//! Errors raised while constructing inputs.

use thiserror::Error;

/// Errors that can occur when building an [`Input`](super::Input) from raw text.
///
/// Transitions themselves never fail; these only surface at the boundary.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    #[error("'{0}' is not a decimal digit")]
    InvalidDigit(char),

    #[error("Unknown operator '{0}', expected one of + - × ÷ * /")]
    UnknownOperator(String),
}

/// Errors raised when reading a serialized [`CalculatorState`](super::CalculatorState).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StateError {
    #[error("Display '{0}' contains more than one decimal point")]
    ExtraDecimalPoint(String),

    #[error("Pending operator and previous value must be set together")]
    UnpairedOperand,

    #[error("'{0}' is not a number")]
    InvalidOperand(String),
}
