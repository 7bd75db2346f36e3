//! Common validation utilities.

use uuid::Uuid;
use validator::ValidationError;

/// Validates that a string is a syntactically valid UUID.
pub fn validate_uuid(value: &str) -> Result<(), ValidationError> {
    if Uuid::parse_str(value).is_ok() {
        Ok(())
    } else {
        let mut err = ValidationError::new("uuid");
        err.message = Some("Must be a valid UUID".into());
        Err(err)
    }
}

/// Validates that a string has at least one non-whitespace character.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("Must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Replaces the message of a validation error, keeping its code.
pub fn with_message(mut err: ValidationError, message: &'static str) -> ValidationError {
    err.message = Some(message.into());
    err
}
