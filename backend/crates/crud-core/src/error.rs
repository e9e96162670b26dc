use crate::{FieldErrors, RecordId};

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation failed for {entity}: {errors} {location}")]
    Validation {
        entity: String,
        errors: FieldErrors,
        location: ErrorLocation,
    },

    #[error("{entity} record {id} not found {location}")]
    NotFound {
        entity: String,
        id: RecordId,
        location: ErrorLocation,
    },

    #[error("Unknown entity: {entity} {location}")]
    UnknownEntity {
        entity: String,
        location: ErrorLocation,
    },

    #[error("Invalid record id: {value} {location}")]
    InvalidRecordId {
        value: String,
        location: ErrorLocation,
    },

    #[error("Store error: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn not_found(entity: &str, id: RecordId) -> Self {
        CoreError::NotFound {
            entity: entity.to_string(),
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn store<S: Into<String>>(message: S) -> Self {
        CoreError::Store {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound { .. })
    }
}

pub type Result<T> = StdResult<T, CoreError>;
