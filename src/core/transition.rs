//! Pure transition functions, one per input class.
//!
//! Every function takes the current state and returns the next one. None of
//! them fail: edge cases fall back to a defined state instead of an error.

use super::input::{Digit, Input, Operator};
use super::number::{format_number, parse_display};
use super::state::CalculatorState;

/// Enter a digit.
///
/// Starts a fresh number when waiting for an operand, replaces a lone `"0"`,
/// and otherwise appends.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{digit_entry, CalculatorState, Digit};
///
/// let five = Digit::new('5').unwrap();
/// let state = digit_entry(&CalculatorState::identity(), five);
/// assert_eq!(state.display(), "5");
///
/// let state = digit_entry(&state, five);
/// assert_eq!(state.display(), "55");
/// ```
pub fn digit_entry(state: &CalculatorState, digit: Digit) -> CalculatorState {
    if state.waiting_for_operand {
        return CalculatorState {
            display: digit.to_string(),
            waiting_for_operand: false,
            ..state.clone()
        };
    }

    let display = if state.display == "0" {
        digit.to_string()
    } else {
        format!("{}{}", state.display, digit)
    };

    CalculatorState {
        display,
        ..state.clone()
    }
}

/// Enter a decimal point.
///
/// A second point in the same number is ignored.
pub fn decimal_point_entry(state: &CalculatorState) -> CalculatorState {
    if state.waiting_for_operand {
        return CalculatorState {
            display: "0.".to_string(),
            waiting_for_operand: false,
            ..state.clone()
        };
    }

    if state.display.contains('.') {
        return state.clone();
    }

    CalculatorState {
        display: format!("{}.", state.display),
        ..state.clone()
    }
}

/// Select an operator.
///
/// The first operator captures the display as the left operand. Any later
/// operator first evaluates the pending one, strictly left to right, and
/// shows the intermediate result.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{reduce, CalculatorState, Input, Operator};
///
/// let inputs = [
///     Input::digit('9').unwrap(),
///     Input::Operator(Operator::Add),
///     Input::digit('1').unwrap(),
///     Input::Operator(Operator::Subtract),
/// ];
/// let state = inputs
///     .iter()
///     .fold(CalculatorState::identity(), |s, i| reduce(&s, *i));
///
/// assert_eq!(state.display(), "10");
/// assert_eq!(state.previous_value(), Some(10.0));
/// assert_eq!(state.operator(), Some(Operator::Subtract));
/// ```
pub fn operator_select(state: &CalculatorState, op: Operator) -> CalculatorState {
    let input_value = parse_display(&state.display);

    match (state.previous_value, state.operator) {
        (None, _) => CalculatorState {
            previous_value: Some(input_value),
            operator: Some(op),
            waiting_for_operand: true,
            ..state.clone()
        },
        (Some(previous), Some(pending)) => {
            // The chained path reads a NaN left operand as zero; evaluate does not.
            let previous = if previous.is_nan() { 0.0 } else { previous };
            let result = pending.apply(previous, input_value);
            CalculatorState {
                display: format_number(result),
                previous_value: Some(result),
                operator: Some(op),
                waiting_for_operand: true,
            }
        }
        // previous_value without an operator cannot be produced by any transition
        (Some(_), None) => state.clone(),
    }
}

/// Evaluate the pending operation, if any.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{reduce, CalculatorState, Input, Operator};
///
/// let inputs = [
///     Input::digit('8').unwrap(),
///     Input::Operator(Operator::Divide),
///     Input::digit('0').unwrap(),
///     Input::Evaluate,
/// ];
/// let state = inputs
///     .iter()
///     .fold(CalculatorState::identity(), |s, i| reduce(&s, *i));
///
/// assert_eq!(state.display(), "0");
/// ```
pub fn evaluate(state: &CalculatorState) -> CalculatorState {
    let (Some(previous), Some(op)) = (state.previous_value, state.operator) else {
        return state.clone();
    };

    let result = op.apply(previous, parse_display(&state.display));
    CalculatorState {
        display: format_number(result),
        previous_value: None,
        operator: None,
        waiting_for_operand: true,
    }
}

/// Reset to the identity state.
pub fn clear(_state: &CalculatorState) -> CalculatorState {
    CalculatorState::identity()
}

/// Apply one input event to a state.
pub fn reduce(state: &CalculatorState, input: Input) -> CalculatorState {
    match input {
        Input::Digit(digit) => digit_entry(state, digit),
        Input::DecimalPoint => decimal_point_entry(state),
        Input::Operator(op) => operator_select(state, op),
        Input::Evaluate => evaluate(state),
        Input::Clear => clear(state),
    }
}
