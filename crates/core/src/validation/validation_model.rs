//! Validatable form field.

use super::validation_rules::ValidationRule;

type ChangeCallback = Box<dyn Fn(&str) + Send + Sync>;

/// A form field holding a value, an ordered rule list, and the current
/// error state.
///
/// Every value write re-validates synchronously and notifies the registered
/// observer with the field's logical name, so a bound view can re-render.
/// Validation short-circuits: only the first failing rule's message is ever
/// surfaced. Lifetime is tied to the owning form; fields are reset, not
/// destroyed.
pub struct ValidatableField<T> {
    name: String,
    value: T,
    rules: Vec<Box<dyn ValidationRule<T>>>,
    error: Option<String>,
    on_changed: Option<ChangeCallback>,
}

impl<T: Default> ValidatableField<T> {
    /// Creates a field with no rules and the type's zero value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: T::default(),
            rules: Vec::new(),
            error: None,
            on_changed: None,
        }
    }

    /// Appends a rule. Rules run in the order they were added.
    pub fn with_rule(mut self, rule: impl ValidationRule<T> + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Registers the change observer, replacing any previous one.
    pub fn on_changed(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_changed = Some(Box::new(callback));
        self
    }

    /// The field's logical name, as passed to the observer.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// The active error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Stores a new value, re-validates immediately, and notifies.
    /// Returns whether the field is valid afterwards.
    pub fn set_value(&mut self, value: T) -> bool {
        self.value = value;
        let valid = self.run_rules();
        self.notify();
        valid
    }

    /// Runs the rules against the current value.
    ///
    /// The first failing rule becomes the active error; if every rule passes
    /// the error state is cleared. Notifies on every pass, success or not.
    pub fn validate(&mut self) -> bool {
        let valid = self.run_rules();
        self.notify();
        valid
    }

    /// Imposes an error from outside the rule set, e.g. a uniqueness
    /// conflict only discovered after a repository round-trip.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.notify();
    }

    /// Returns the field to its zero value with no error.
    pub fn reset(&mut self) {
        self.value = T::default();
        self.error = None;
        self.notify();
    }

    fn run_rules(&mut self) -> bool {
        self.error = self
            .rules
            .iter()
            .find(|rule| !rule.check(&self.value))
            .map(|rule| rule.message().to_string());
        self.error.is_none()
    }

    fn notify(&self) {
        if let Some(callback) = &self.on_changed {
            callback(&self.name);
        }
    }
}
