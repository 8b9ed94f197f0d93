use std::collections::HashMap;

use crate::errors::FieldError;
use crate::field::Field;
use crate::state::ValidationState;

/// Registry of named validated fields.
///
/// # Design
///
/// - Acts as a registry of fields keyed by name
/// - Each field carries its own rules; the form adds no validation logic
/// - Writes route through the owned field, so the returned state is always
///   fresh
#[derive(Debug, Clone)]
pub struct Form {
    fields: HashMap<String, Field>,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// Create a new empty form.
    ///
    /// Fields must be added via `add_field()` before use.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Add a field to the form.
    ///
    /// If a field with the same name already exists, it will be replaced.
    pub fn add_field(&mut self, name: impl Into<String>, field: Field) {
        let _ = self.fields.insert(name.into(), field);
    }

    /// Get a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Write a field's value and return the freshly computed state.
    ///
    /// # Arguments
    ///
    /// * `name` - The name used when adding the field via `add_field()`
    /// * `value` - The new value
    ///
    /// # Returns
    ///
    /// * `Ok(&ValidationState)` - The state after re-validation
    /// * `Err(FieldError::FieldNotFound)` - No field with this name exists
    pub fn set_value(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<&ValidationState, FieldError> {
        if let Some(field) = self.fields.get_mut(name) {
            field.set_value(value);
            Ok(field.validation_state())
        } else {
            Err(FieldError::FieldNotFound(name.to_string()))
        }
    }

    /// Get a field's current state by name.
    pub fn state(&self, name: &str) -> Result<&ValidationState, FieldError> {
        self.fields
            .get(name)
            .map(|field| field.validation_state())
            .ok_or_else(|| FieldError::FieldNotFound(name.to_string()))
    }

    /// True when every registered field's state is `Valid`.
    ///
    /// An empty form is vacuously valid.
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(|field| field.is_valid())
    }
}
