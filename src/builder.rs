use crate::field::Field;
use crate::rules::FieldRule;

/// Builder for validated fields.
///
/// Rules are attached with chained calls; the built field evaluates them in
/// call order.
#[derive(Debug, Clone, Default)]
pub struct FieldBuilder {
    rules: Vec<FieldRule>,
}

impl FieldBuilder {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add not empty constraint
    pub fn not_empty(&mut self) -> &mut Self {
        self.rules.push(FieldRule::NotEmpty);
        self
    }

    /// Check if value is a valid email
    pub fn is_email(&mut self) -> &mut Self {
        self.rules.push(FieldRule::Email);
        self
    }

    /// Check if value is a valid phone number
    pub fn is_phone(&mut self) -> &mut Self {
        self.rules.push(FieldRule::Phone);
        self
    }

    /// Check if value is a valid ID document
    pub fn is_id_document(&mut self) -> &mut Self {
        self.rules.push(FieldRule::IdDocument);
        self
    }

    /// Check if value satisfies the password policy
    pub fn is_password(&mut self) -> &mut Self {
        self.rules.push(FieldRule::Password);
        self
    }

    /// Set minimum length
    pub fn with_min_length(&mut self, min: usize) -> &mut Self {
        self.rules.push(FieldRule::MinLength { min });
        self
    }

    /// Set maximum length
    pub fn with_max_length(&mut self, max: usize) -> &mut Self {
        self.rules.push(FieldRule::MaxLength { max });
        self
    }

    /// Set length constraints (both min and max)
    pub fn with_length_between(&mut self, min: usize, max: usize) -> &mut Self {
        self.with_min_length(min).with_max_length(max)
    }

    /// Build a field with an empty initial value.
    pub fn build(&self) -> Field {
        Field::new(self.rules.clone())
    }

    /// Build a field with an initial value.
    pub fn build_with_value(&self, value: impl Into<String>) -> Field {
        Field::with_value(self.rules.clone(), value)
    }
}
