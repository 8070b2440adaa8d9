//! Validation rules.
//!
//! A rule is a predicate plus the message shown when the predicate fails.
//! Rules are evaluated in declaration order and the first failure wins.

use crate::constants::{NAME_MAX_LEN, NAME_MIN_LEN};

/// One validation rule over a field value of type `T`.
pub trait ValidationRule<T>: Send + Sync {
    /// Message surfaced when the rule fails.
    fn message(&self) -> &str;

    /// Whether the value satisfies the rule.
    fn check(&self, value: &T) -> bool;
}

/// Fails on a missing value or an all-whitespace string.
pub struct NotEmptyRule {
    message: String,
}

impl NotEmptyRule {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for NotEmptyRule {
    fn default() -> Self {
        Self::new("This field is required")
    }
}

impl ValidationRule<Option<String>> for NotEmptyRule {
    fn message(&self) -> &str {
        &self.message
    }

    fn check(&self, value: &Option<String>) -> bool {
        matches!(value, Some(s) if !s.trim().is_empty())
    }
}

/// Fails on a missing value or a length outside `[min, max]` inclusive.
///
/// Length is counted in characters, not bytes, so accented names measure the
/// way users perceive them.
pub struct LengthRangeRule {
    min: usize,
    max: usize,
    message: String,
}

impl LengthRangeRule {
    pub fn new(min: usize, max: usize, message: impl Into<String>) -> Self {
        Self {
            min,
            max,
            message: message.into(),
        }
    }

    /// The 3-50 character rule applied to wallet and group names.
    pub fn for_names() -> Self {
        Self::new(
            NAME_MIN_LEN,
            NAME_MAX_LEN,
            format!(
                "Must be between {} and {} characters",
                NAME_MIN_LEN, NAME_MAX_LEN
            ),
        )
    }
}

impl ValidationRule<Option<String>> for LengthRangeRule {
    fn message(&self) -> &str {
        &self.message
    }

    fn check(&self, value: &Option<String>) -> bool {
        match value {
            Some(s) => {
                let len = s.chars().count();
                len >= self.min && len <= self.max
            }
            None => false,
        }
    }
}
