//! Symbolic input events accepted by the calculator.

use super::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single decimal digit, `0` through `9`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(u8);

impl Digit {
    /// Build a digit from its character.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keycalc::core::Digit;
    ///
    /// assert_eq!(Digit::new('7').unwrap().value(), 7);
    /// assert!(Digit::new('x').is_err());
    /// ```
    pub fn new(c: char) -> Result<Self, InputError> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(InputError::InvalidDigit(c))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = InputError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> Self {
        digit.as_char()
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Binary arithmetic operator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol shown on the keypad.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Parse a keypad symbol. ASCII `*` and `/` are accepted as aliases.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keycalc::core::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("×").unwrap(), Operator::Multiply);
    /// assert_eq!(Operator::from_symbol("/").unwrap(), Operator::Divide);
    /// assert!(Operator::from_symbol("%").is_err());
    /// ```
    pub fn from_symbol(symbol: &str) -> Result<Self, InputError> {
        match symbol {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "×" | "*" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            other => Err(InputError::UnknownOperator(other.to_string())),
        }
    }

    /// Apply the operator to two operands.
    ///
    /// Division by zero yields `0` so the display always stays numeric.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b != 0.0 {
                    a / b
                } else {
                    0.0
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One normalized input event.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Input {
    Digit(Digit),
    DecimalPoint,
    Operator(Operator),
    Evaluate,
    Clear,
}

impl Input {
    /// Shorthand for a digit input.
    pub fn digit(c: char) -> Result<Self, InputError> {
        Digit::new(c).map(Self::Digit)
    }

    /// Shorthand for an operator input.
    pub fn operator(symbol: &str) -> Result<Self, InputError> {
        Operator::from_symbol(symbol).map(Self::Operator)
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::DecimalPoint => f.write_str("."),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Evaluate => f.write_str("="),
            Self::Clear => f.write_str("C"),
        }
    }
}
