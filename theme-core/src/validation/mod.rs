//! Config and theme validation.

mod validate;

pub use validate::{
    audit_contrast, quick_validate, validate_color, validate_config, ContrastIssue,
    ValidationResult,
};
