//! Validated field definition.
//!
//! This module provides the main entry point (`Field`): a string value bound
//! to an ordered rule list, re-validated synchronously on every write so the
//! reported state is never stale with respect to the last observed value.

use crate::rules::FieldRule;
use crate::state::ValidationState;

/// A string value bound to an ordered list of validation rules.
///
/// The rule list is fixed for the lifetime of the field; the value is
/// mutable. Validation runs once at construction and again on every
/// `set_value()`, so a caller cannot observe a value change without the
/// paired re-validation.
///
/// # Evaluation
///
/// Every rule is invoked against the current value in declaration order
/// (duplicates are evaluated independently). The first failing rule's reason
/// becomes the state; with no failing rule the state is `Valid` and a
/// normalizing rule's output (ID document uppercasing) replaces the stored
/// value. An empty rule list is vacuously `Valid`.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    value: String,
    rules: Vec<FieldRule>,
    state: ValidationState,
}

impl Field {
    /// Create a field with an empty initial value.
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self::with_value(rules, String::new())
    }

    /// Create a field with an initial value.
    ///
    /// Validation runs once to establish the initial state.
    pub fn with_value(rules: Vec<FieldRule>, value: impl Into<String>) -> Self {
        let mut field = Self {
            value: value.into(),
            rules,
            state: ValidationState::Idle,
        };
        field.validate();
        field
    }

    /// Get the current value.
    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    /// Get the attached rules, in declaration order.
    pub fn rules(&self) -> &[FieldRule] {
        self.rules.as_slice()
    }

    /// Get the current validation state.
    pub fn validation_state(&self) -> &ValidationState {
        &self.state
    }

    /// True when every attached rule passes for the current value.
    pub fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    /// Replace the value and re-validate.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.validate();
    }

    /// Override the reported state without touching the value or rules.
    ///
    /// The override holds until the next `set_value()`, which recomputes the
    /// state per the evaluation algorithm.
    pub fn set_state(&mut self, state: ValidationState) {
        self.state = state;
    }

    /// Freeze the reported state to `Locked`.
    pub fn lock(&mut self) {
        self.set_state(ValidationState::Locked);
    }

    /// Reset the reported state to `Idle`.
    pub fn reset(&mut self) {
        self.set_state(ValidationState::Idle);
    }

    fn validate(&mut self) {
        // Every rule runs against the current value; only the scan below
        // short-circuits, on the first failure in declaration order.
        let results: Vec<_> = self
            .rules
            .iter()
            .map(|rule| rule.apply(self.value.as_str()))
            .collect();

        for result in &results {
            if let Err(reason) = result {
                self.state = ValidationState::NotValid(reason.clone());
                return;
            }
        }

        // All rules passed; adopt the last success value that differs from
        // the value the rules were evaluated against.
        let mut adopted = None;
        for normalized in results.into_iter().flatten() {
            if normalized != self.value {
                adopted = Some(normalized);
            }
        }
        if let Some(normalized) = adopted {
            self.value = normalized;
        }
        self.state = ValidationState::Valid;
    }
}
