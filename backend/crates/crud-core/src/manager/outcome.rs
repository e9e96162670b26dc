//! Response selection after a form submission.
//!
//! A failed validation redisplays the form with the submitted values and the
//! per-field messages. A successful create or update redirects to the listing
//! so a browser refresh cannot resubmit the form.

use crate::{CoreError, FieldErrors, Fields, RecordId, Result as CoreErrorResult};

/// Which write a submitted form asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Create,
    Update(RecordId),
}

/// What the transport boundary should send back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Redisplay { values: Fields, errors: FieldErrors },
    Redirect { location: String },
}

impl Outcome {
    /// Map the result of a write onto an outcome.
    ///
    /// Validation failures become `Redisplay`; every other error (not found,
    /// store failure) is handed back to the caller unchanged.
    pub fn select<T>(
        result: CoreErrorResult<T>,
        submitted: Fields,
        listing_path: String,
    ) -> CoreErrorResult<Outcome> {
        match result {
            Ok(_) => Ok(Outcome::Redirect {
                location: listing_path,
            }),
            Err(CoreError::Validation { errors, .. }) => Ok(Outcome::Redisplay {
                values: submitted,
                errors,
            }),
            Err(e) => Err(e),
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Outcome::Redirect { .. })
    }
}
