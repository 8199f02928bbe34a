//! End-to-end keypad scenarios, driven through a session's key map.

use keycalc::core::{reduce, CalculatorState, Input, Operator, Phase, State};
use keycalc::session::Session;
use keycalc::SessionConfig;

fn press(keys: &[&str]) -> Session {
    let mut session = Session::default();
    {
        let mut subscription = session.subscribe();
        for key in keys {
            subscription.dispatch(key);
        }
    }
    session
}

#[test]
fn addition_shows_sum() {
    let session = press(&["7", "+", "3", "Enter"]);
    assert_eq!(session.display(), "10");
}

#[test]
fn division_by_zero_shows_zero() {
    let session = press(&["8", "/", "0", "Enter"]);
    assert_eq!(session.display(), "0");
}

#[test]
fn decimal_operand_multiplies() {
    let session = press(&["1", ".", "5", "*", "2", "="]);
    assert_eq!(session.display(), "3");
}

#[test]
fn chained_operators_evaluate_left_to_right() {
    let session = press(&["9", "+", "1", "-", "5", "Enter"]);
    assert_eq!(session.display(), "5");
}

#[test]
fn second_decimal_point_is_ignored() {
    let session = press(&[".", "."]);
    assert_eq!(session.display(), "0.");
}

#[test]
fn clear_then_digit_starts_over() {
    let session = press(&["4", "Escape", "2"]);
    assert_eq!(session.display(), "2");

    let session = press(&["4", "c", "2"]);
    assert_eq!(session.display(), "2");
}

#[test]
fn no_precedence_between_operators() {
    // 2 + 3 × 4 reads as (2 + 3) × 4
    let session = press(&["2", "+", "3", "*", "4", "="]);
    assert_eq!(session.display(), "20");
}

#[test]
fn intermediate_result_is_shown_while_waiting() {
    let session = press(&["1", "2", "+", "8", "/"]);
    let state = session.state();

    assert_eq!(state.display(), "20");
    assert_eq!(state.operator(), Some(Operator::Divide));
    assert_eq!(state.phase(), Phase::AwaitingOperand);
}

#[test]
fn overflow_shows_infinity() {
    let mut keys = vec!["9"; 200];
    keys.push("*");
    keys.extend(vec!["9"; 200]);
    keys.push("=");

    let session = press(&keys);
    assert_eq!(session.display(), "Infinity");
    assert!(session.state().is_error());
}

#[test]
fn session_from_config_uses_its_bindings() {
    let config = SessionConfig::from_toml_str(
        r#"
        [keys]
        multiply = ["x"]
        evaluate = ["Return"]
        "#,
    )
    .unwrap();
    let mut session = Session::new(&config).unwrap();

    for key in ["6", "x", "7", "Return"] {
        session.press(key);
    }
    assert_eq!(session.display(), "42");
    assert!(session.press("*").is_none());
}

#[test]
fn journal_path_matches_display_sequence() {
    let session = press(&["5", "+", "5", "="]);
    let displays: Vec<&str> = session
        .journal()
        .get_path()
        .into_iter()
        .map(CalculatorState::display)
        .collect();

    assert_eq!(displays, vec!["0", "5", "5", "5", "10"]);
}

#[test]
fn overflowed_operand_survives_json_mirror() {
    let mut keys = vec!["9"; 200];
    keys.push("*");
    keys.extend(vec!["9"; 200]);
    keys.push("+");

    let session = press(&keys);
    let state = session.state();
    assert_eq!(state.previous_value(), Some(f64::INFINITY));

    let json = serde_json::to_string(state).unwrap();
    let mirrored: CalculatorState = serde_json::from_str(&json).unwrap();
    assert_eq!(&mirrored, state);
    assert_eq!(mirrored.previous_value().is_some(), mirrored.operator().is_some());

    let evaluated = reduce(&mirrored, Input::Evaluate);
    assert_eq!(evaluated.display(), "Infinity");
    assert!(evaluated.operator().is_none());
}
