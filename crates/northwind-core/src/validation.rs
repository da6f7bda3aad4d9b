//! Validation utilities.

use crate::{FieldError, NorthwindError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `NorthwindError` on failure.
    fn validate_request(&self) -> Result<(), NorthwindError> {
        self.validate().map_err(validation_errors_to_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to a `NorthwindError`.
#[must_use]
pub fn validation_errors_to_error(errors: ValidationErrors) -> NorthwindError {
    let field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect();

    let message = field_errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    NorthwindError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(custom(function = not_blank))]
        name: String,
        #[validate(length(max = 15))]
        city: String,
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_validate_request_passes() {
        let probe = Probe {
            name: "Chai".to_string(),
            city: "London".to_string(),
        };
        assert!(probe.validate_request().is_ok());
    }

    #[test]
    fn test_validate_request_collects_field_names() {
        let probe = Probe {
            name: "  ".to_string(),
            city: "a city name that is far too long".to_string(),
        };
        let err = probe.validate_request().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("name"));
        assert!(message.contains("city"));
    }
}
