//! Key binding violations.

use super::bindings::Action;
use thiserror::Error;

/// A single problem found in a set of key bindings.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BindingViolation {
    #[error("Empty key name bound to {action}")]
    EmptyKey { action: Action },

    #[error("Key '{key}' bound to both {first} and {second}")]
    DuplicateKey {
        key: String,
        first: Action,
        second: Action,
    },

    #[error("Digit key '{key}' cannot be bound to {action}")]
    ReservedDigitKey { key: String, action: Action },
}

/// Key bindings were rejected. Carries every violation, not just the first.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Invalid key bindings ({} violations)", .violations.len())]
pub struct KeymapError {
    pub violations: Vec<BindingViolation>,
}
