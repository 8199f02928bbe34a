//! Calculator state and the `State` trait it implements.
//!
//! `CalculatorState` is an immutable value. Every transition function takes
//! a state by reference and returns a new one; nothing mutates a state in
//! place.

use super::error::StateError;
use super::input::Operator;
use super::number::{format_number, parse_display};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for values that can be tracked as state machine states.
///
/// All methods are pure. Implementors are immutable values describing the
/// current position of a machine, so they can be journaled and compared.
///
/// # Example
///
/// ```rust
/// use keycalc::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     Off,
///     On,
///     Burnt,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///             Self::Burnt => "Burnt",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Burnt)
///     }
/// }
///
/// assert!(Lamp::Burnt.is_final());
/// assert!(!Lamp::On.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Coarse position of the calculator, derived from its fields.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// No operator pending; digits extend the display.
    Entering,
    /// No operator pending; the display holds an evaluated result.
    ShowingResult,
    /// Operator pending; the next digit starts the second operand.
    AwaitingOperand,
    /// Operator pending; the second operand is being typed.
    EnteringOperand,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entering => "Entering",
            Self::ShowingResult => "ShowingResult",
            Self::AwaitingOperand => "AwaitingOperand",
            Self::EnteringOperand => "EnteringOperand",
        }
    }
}

impl State for Phase {
    fn name(&self) -> &str {
        self.as_str()
    }
}

/// The full calculator state.
///
/// Created once as [`CalculatorState::identity`] and only ever replaced by
/// the value a transition returns.
///
/// Serialized with the previous value as display text, so `Infinity` and
/// `NaN` survive formats without non-finite numbers. Deserializing rejects a
/// display with two decimal points and an operator without its operand.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{CalculatorState, Phase, State};
///
/// let state = CalculatorState::identity();
/// assert_eq!(state.display(), "0");
/// assert_eq!(state.previous_value(), None);
/// assert_eq!(state.operator(), None);
/// assert!(!state.waiting_for_operand());
/// assert_eq!(state.phase(), Phase::Entering);
/// assert_eq!(state.name(), "Entering");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "StateRecord", into = "StateRecord")]
pub struct CalculatorState {
    pub(crate) display: String,
    pub(crate) previous_value: Option<f64>,
    pub(crate) operator: Option<Operator>,
    pub(crate) waiting_for_operand: bool,
}

impl CalculatorState {
    /// The session start value: display `"0"`, nothing pending.
    pub fn identity() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            operator: None,
            waiting_for_operand: false,
        }
    }

    /// Text currently shown to the user.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Operand captured when the pending operator was selected.
    pub fn previous_value(&self) -> Option<f64> {
        self.previous_value
    }

    /// Operator waiting for its second operand.
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Whether the next digit or decimal point starts a fresh number.
    pub fn waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    /// Whether this is exactly the identity value.
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    pub fn phase(&self) -> Phase {
        match (self.operator.is_some(), self.waiting_for_operand) {
            (false, false) => Phase::Entering,
            (false, true) => Phase::ShowingResult,
            (true, true) => Phase::AwaitingOperand,
            (true, false) => Phase::EnteringOperand,
        }
    }
}

/// Two states are equal when their fields match; any two `NaN` operands match.
impl PartialEq for CalculatorState {
    fn eq(&self, other: &Self) -> bool {
        let same_operand = match (self.previous_value, other.previous_value) {
            (Some(a), Some(b)) => (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits(),
            (None, None) => true,
            _ => false,
        };
        same_operand
            && self.display == other.display
            && self.operator == other.operator
            && self.waiting_for_operand == other.waiting_for_operand
    }
}

/// Wire form of [`CalculatorState`].
#[derive(Serialize, Deserialize)]
struct StateRecord {
    display: String,
    previous_value: Option<String>,
    operator: Option<Operator>,
    waiting_for_operand: bool,
}

fn operand_text(value: f64) -> String {
    if value == 0.0 && value.is_sign_negative() {
        "-0".to_string()
    } else {
        format_number(value)
    }
}

fn operand_value(text: String) -> Result<f64, StateError> {
    let value = parse_display(&text);
    if value.is_nan() && text != "NaN" {
        return Err(StateError::InvalidOperand(text));
    }
    Ok(value)
}

impl From<CalculatorState> for StateRecord {
    fn from(state: CalculatorState) -> Self {
        Self {
            display: state.display,
            previous_value: state.previous_value.map(operand_text),
            operator: state.operator,
            waiting_for_operand: state.waiting_for_operand,
        }
    }
}

impl TryFrom<StateRecord> for CalculatorState {
    type Error = StateError;

    fn try_from(record: StateRecord) -> Result<Self, Self::Error> {
        if record.display.matches('.').count() > 1 {
            return Err(StateError::ExtraDecimalPoint(record.display));
        }
        if record.previous_value.is_some() != record.operator.is_some() {
            return Err(StateError::UnpairedOperand);
        }
        Ok(Self {
            display: record.display,
            previous_value: record.previous_value.map(operand_value).transpose()?,
            operator: record.operator,
            waiting_for_operand: record.waiting_for_operand,
        })
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::identity()
    }
}

impl State for CalculatorState {
    fn name(&self) -> &str {
        self.phase().as_str()
    }

    /// A non-finite result (`NaN`, `Infinity`) is on display.
    ///
    /// Informational only: every transition stays available.
    fn is_error(&self) -> bool {
        matches!(self.display.as_str(), "NaN" | "Infinity" | "-Infinity")
    }
}
