//! Raw key names to calculator inputs.
//!
//! The key map is the boundary where unrecognised keys are dropped, so the
//! core only ever sees the five input classes. Digit keys `0`..`9` are always
//! bound; everything else comes from [`KeyBindings`].
//!
//! Bindings are validated with Stillwater's `Validation`, so a bad config
//! reports every problem at once instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use keycalc::core::{Input, Operator};
//! use keycalc::keymap::KeyMap;
//!
//! let keymap = KeyMap::default();
//! assert_eq!(keymap.resolve("*"), Some(Input::Operator(Operator::Multiply)));
//! assert_eq!(keymap.resolve("Enter"), Some(Input::Evaluate));
//! assert_eq!(keymap.resolve("Tab"), None);
//! ```

pub mod bindings;
pub mod error;

pub use bindings::{Action, KeyBindings};
pub use error::{BindingViolation, KeymapError};

use crate::core::{Digit, Input};
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<BindingViolation>>;

/// Lookup table from key name to input.
#[derive(Clone, Debug)]
pub struct KeyMap {
    keys: HashMap<String, Input>,
}

impl KeyMap {
    /// Build a key map, rejecting bindings with any violation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keycalc::keymap::{KeyBindings, KeyMap};
    ///
    /// let bindings = KeyBindings {
    ///     add: vec!["+".to_string(), "Enter".to_string()],
    ///     clear: vec!["".to_string()],
    ///     ..KeyBindings::default()
    /// };
    ///
    /// let err = KeyMap::from_bindings(&bindings).unwrap_err();
    /// assert_eq!(err.violations.len(), 2);
    /// ```
    pub fn from_bindings(bindings: &KeyBindings) -> Result<Self, KeymapError> {
        match validate(bindings) {
            Validation::Success(_) => {}
            Validation::Failure(errors) => {
                return Err(KeymapError {
                    violations: errors.iter().cloned().collect(),
                });
            }
        }

        Ok(Self::build(bindings))
    }

    fn build(bindings: &KeyBindings) -> Self {
        let keys = ('0'..='9')
            .filter_map(|c| Digit::new(c).ok())
            .map(|d| (d.to_string(), Input::Digit(d)))
            .chain(
                bindings
                    .entries()
                    .into_iter()
                    .map(|(action, key)| (key.to_string(), action.input())),
            )
            .collect();
        Self { keys }
    }

    /// Look up a key. Unbound keys yield `None`.
    pub fn resolve(&self, key: &str) -> Option<Input> {
        let input = self.keys.get(key).copied();
        if input.is_none() {
            tracing::trace!(key, "ignoring unbound key");
        }
        input
    }

    /// Number of bound keys, digits included.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::build(&KeyBindings::default())
    }
}

/// Check every binding, accumulating all violations.
fn validate(bindings: &KeyBindings) -> Check {
    let mut checks: Vec<Check> = Vec::new();
    let mut seen: HashMap<&str, Action> = HashMap::new();

    for (action, key) in bindings.entries() {
        if key.is_empty() {
            checks.push(Validation::fail(BindingViolation::EmptyKey { action }));
            continue;
        }

        if digit_key(key).is_some() {
            checks.push(Validation::fail(BindingViolation::ReservedDigitKey {
                key: key.to_string(),
                action,
            }));
            continue;
        }

        match seen.get(key) {
            Some(&first) if first != action => {
                checks.push(Validation::fail(BindingViolation::DuplicateKey {
                    key: key.to_string(),
                    first,
                    second: action,
                }));
            }
            Some(_) => {}
            None => {
                seen.insert(key, action);
                checks.push(Validation::success(()));
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// The digit a single-character key name stands for, if any.
fn digit_key(key: &str) -> Option<Digit> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Digit::new(c).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn default_keymap_follows_keyboard_layout() {
        let keymap = KeyMap::default();

        for c in '0'..='9' {
            assert_eq!(keymap.resolve(&c.to_string()), Some(Input::digit(c).unwrap()));
        }
        assert_eq!(keymap.resolve("."), Some(Input::DecimalPoint));
        assert_eq!(keymap.resolve("+"), Some(Input::Operator(Operator::Add)));
        assert_eq!(keymap.resolve("-"), Some(Input::Operator(Operator::Subtract)));
        assert_eq!(keymap.resolve("*"), Some(Input::Operator(Operator::Multiply)));
        assert_eq!(keymap.resolve("/"), Some(Input::Operator(Operator::Divide)));
        assert_eq!(keymap.resolve("Enter"), Some(Input::Evaluate));
        assert_eq!(keymap.resolve("="), Some(Input::Evaluate));
        assert_eq!(keymap.resolve("Escape"), Some(Input::Clear));
        assert_eq!(keymap.resolve("c"), Some(Input::Clear));
        assert_eq!(keymap.resolve("C"), Some(Input::Clear));
    }

    #[test]
    fn unbound_keys_resolve_to_none() {
        let keymap = KeyMap::default();
        for key in ["Tab", "x", "%", "", "10", "Backspace", "×"] {
            assert_eq!(keymap.resolve(key), None, "{key} should be unbound");
        }
    }

    #[test]
    fn default_bindings_validate() {
        let keymap = KeyMap::from_bindings(&KeyBindings::default()).unwrap();
        assert_eq!(keymap.len(), KeyMap::default().len());
    }

    #[test]
    fn custom_bindings_replace_defaults() {
        let bindings = KeyBindings {
            multiply: keys(&["*", "x"]),
            clear: keys(&["Delete"]),
            ..KeyBindings::default()
        };
        let keymap = KeyMap::from_bindings(&bindings).unwrap();

        assert_eq!(keymap.resolve("x"), Some(Input::Operator(Operator::Multiply)));
        assert_eq!(keymap.resolve("Delete"), Some(Input::Clear));
        assert_eq!(keymap.resolve("Escape"), None);
    }

    #[test]
    fn repeated_key_within_one_action_is_allowed() {
        let bindings = KeyBindings {
            evaluate: keys(&["Enter", "Enter"]),
            ..KeyBindings::default()
        };
        assert!(KeyMap::from_bindings(&bindings).is_ok());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let bindings = KeyBindings {
            add: keys(&["+", ""]),
            subtract: keys(&["+"]),
            clear: keys(&["0"]),
            ..KeyBindings::default()
        };

        let err = KeyMap::from_bindings(&bindings).unwrap_err();
        assert_eq!(err.violations.len(), 3);
        assert!(err
            .violations
            .contains(&BindingViolation::EmptyKey { action: Action::Add }));
        assert!(err.violations.contains(&BindingViolation::DuplicateKey {
            key: "+".to_string(),
            first: Action::Add,
            second: Action::Subtract,
        }));
        assert!(err.violations.contains(&BindingViolation::ReservedDigitKey {
            key: "0".to_string(),
            action: Action::Clear,
        }));
        assert_eq!(err.to_string(), "Invalid key bindings (3 violations)");
    }
}
