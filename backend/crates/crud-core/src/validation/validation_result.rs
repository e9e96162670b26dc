use crate::{CoreError, FieldErrors, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Outcome of running a schema's rules over submitted values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(FieldErrors),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(errors) => Some(errors),
        }
    }

    /// Turn `Invalid` into a `CoreError::Validation` for `entity`.
    #[track_caller]
    pub fn into_result(self, entity: &str) -> CoreErrorResult<()> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(errors) => Err(CoreError::Validation {
                entity: entity.to_string(),
                errors,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
