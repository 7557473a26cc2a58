//! Typed errors for the data-access layer.

use serde_json::{Value, json};

/// Error type returned by every operation in this crate.
///
/// Distinguishes "the record is absent" ([`AppError::NotFound`]) from "the
/// store or a stored document is broken" ([`AppError::Internal`]).
/// [`AppError::Configuration`] only surfaces during startup.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Required connection settings are missing or invalid. Fatal at startup.
    #[error("configuration error: {message}")]
    Configuration { message: String, details: Value },

    /// The requested link mapping does not exist.
    #[error("not found: {message}")]
    NotFound { message: String, details: Value },

    /// A driver/transport failure, an unacknowledged write, or a stored
    /// document that violates the required shape.
    #[error("internal error: {message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn configuration(message: impl Into<String>, details: Value) -> Self {
        Self::Configuration {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns true for the not-found variant. Convenient in callers that
    /// treat "absent" as a normal outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Maps a MongoDB driver error onto [`AppError`].
///
/// Everything coming out of the driver is an internal failure from the
/// caller's point of view; duplicate-key violations of the unique `mapping`
/// index are annotated in the details so callers can tell them apart.
pub fn map_db_error(e: mongodb::error::Error) -> AppError {
    use mongodb::error::{ErrorKind, WriteFailure};

    if let ErrorKind::Write(WriteFailure::WriteError(ref write_err)) = *e.kind
        && write_err.code == 11000
    {
        return AppError::internal(
            "Duplicate link mapping",
            json!({ "kind": "duplicate_key", "source": write_err.message.clone() }),
        );
    }

    AppError::internal("Database error", json!({ "source": e.to_string() }))
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        map_db_error(e)
    }
}
