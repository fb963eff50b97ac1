//! FieldValidator: predicados puros y validación por paso.

pub mod policy;
pub mod predicates;
mod result;

pub use policy::{check_field, check_on_blur, validate_step};
pub use predicates::{is_non_empty, is_valid_email, is_valid_phone};
pub use result::{FieldCheck, ValidationResult};
