//! Configurable key bindings for the non-digit inputs.

use crate::core::{Input, Operator};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-digit action a key can be bound to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    DecimalPoint,
    Add,
    Subtract,
    Multiply,
    Divide,
    Evaluate,
    Clear,
}

impl Action {
    pub fn input(self) -> Input {
        match self {
            Self::DecimalPoint => Input::DecimalPoint,
            Self::Add => Input::Operator(Operator::Add),
            Self::Subtract => Input::Operator(Operator::Subtract),
            Self::Multiply => Input::Operator(Operator::Multiply),
            Self::Divide => Input::Operator(Operator::Divide),
            Self::Evaluate => Input::Evaluate,
            Self::Clear => Input::Clear,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DecimalPoint => "decimal_point",
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Evaluate => "evaluate",
            Self::Clear => "clear",
        };
        f.write_str(name)
    }
}

/// Key names per action. Lists left out of a config file keep their defaults.
///
/// # Example
///
/// ```rust
/// use keycalc::keymap::KeyBindings;
///
/// let bindings = KeyBindings::default();
/// assert_eq!(bindings.evaluate, vec!["Enter", "="]);
/// assert_eq!(bindings.clear, vec!["Escape", "c", "C"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub decimal_point: Vec<String>,
    pub add: Vec<String>,
    pub subtract: Vec<String>,
    pub multiply: Vec<String>,
    pub divide: Vec<String>,
    pub evaluate: Vec<String>,
    pub clear: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        fn keys(names: &[&str]) -> Vec<String> {
            names.iter().map(|k| k.to_string()).collect()
        }

        Self {
            decimal_point: keys(&["."]),
            add: keys(&["+"]),
            subtract: keys(&["-"]),
            multiply: keys(&["*"]),
            divide: keys(&["/"]),
            evaluate: keys(&["Enter", "="]),
            clear: keys(&["Escape", "c", "C"]),
        }
    }
}

impl KeyBindings {
    /// Every `(action, key)` pair, in declaration order.
    pub fn entries(&self) -> Vec<(Action, &str)> {
        [
            (Action::DecimalPoint, &self.decimal_point),
            (Action::Add, &self.add),
            (Action::Subtract, &self.subtract),
            (Action::Multiply, &self.multiply),
            (Action::Divide, &self.divide),
            (Action::Evaluate, &self.evaluate),
            (Action::Clear, &self.clear),
        ]
        .into_iter()
        .flat_map(|(action, keys)| keys.iter().map(move |k| (action, k.as_str())))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_cover_every_action() {
        let bindings = KeyBindings::default();
        let entries = bindings.entries();
        for action in [
            Action::DecimalPoint,
            Action::Add,
            Action::Subtract,
            Action::Multiply,
            Action::Divide,
            Action::Evaluate,
            Action::Clear,
        ] {
            assert!(entries.iter().any(|(a, _)| *a == action), "{action} unbound");
        }
    }

    #[test]
    fn actions_map_to_inputs() {
        assert_eq!(Action::Multiply.input(), Input::Operator(Operator::Multiply));
        assert_eq!(Action::DecimalPoint.input(), Input::DecimalPoint);
        assert_eq!(Action::Clear.input(), Input::Clear);
    }

    #[test]
    fn missing_lists_fall_back_to_defaults() {
        let bindings: KeyBindings = serde_json::from_str(r#"{"clear": ["Delete"]}"#).unwrap();
        assert_eq!(bindings.clear, vec!["Delete"]);
        assert_eq!(bindings.add, KeyBindings::default().add);
    }
}
