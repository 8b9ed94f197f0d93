use crate::errors::ValidationError;

/// Derived status of a validated field, consumed by reactive UI bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationState {
    /// No evaluation observed yet, or the field was explicitly reset
    Idle,
    /// Every attached rule passes for the current value
    Valid,
    /// Caller-managed frozen marker; evaluation never produces it
    Locked,
    /// At least one rule fails; carries the first failing rule's reason
    NotValid(ValidationError),
}

impl ValidationState {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationState::Valid)
    }
}
