//! Validation module - generic field validation for form input.

mod validation_model;
mod validation_rules;

pub use validation_model::ValidatableField;
pub use validation_rules::{LengthRangeRule, NotEmptyRule, ValidationRule};
