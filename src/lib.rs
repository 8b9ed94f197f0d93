pub mod builder;
pub mod errors;
pub mod field;
pub mod form;
pub mod rules;
pub mod state;

pub use builder::FieldBuilder;
pub use errors::{FieldError, ValidationError};
pub use field::Field;
pub use form::Form;
pub use rules::FieldRule;
pub use state::ValidationState;
