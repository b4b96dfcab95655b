//! Error types for the itinerary library.

use std::path::PathBuf;

use thiserror::Error;

/// Every failure an itinerary operation can surface.
///
/// A delete or move naming an id that is not on the day is deliberately
/// absent here: that case is a no-op, not an error.
#[derive(Error, Debug)]
pub enum TripError {
    /// Input rejected before any store round trip.
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// The remote store could not be reached (connection refused, DNS, timeout).
    #[error("Remote store unavailable: {message}")]
    StoreUnavailable {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// The remote store answered but reported failure.
    #[error("Remote store error: {message}")]
    RemoteApi { message: String },
    /// The remote store answered with something that is not a valid place.
    #[error("Invalid response from remote store: {reason}")]
    InvalidResponse { reason: String },
    /// SQLite connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG base directory lookup errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Attach the underlying SQLite error.
    pub fn with_source(self, source: rusqlite::Error) -> TripError {
        TripError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for validation errors on a named field.
pub struct ValidationErrorBuilder {
    field: String,
}

impl ValidationErrorBuilder {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TripError {
        TripError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TripError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for validation errors.
    pub fn validation(field: impl Into<String>) -> ValidationErrorBuilder {
        ValidationErrorBuilder::new(field)
    }

    pub fn invalid_response(reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for the errors caused by the caller's input rather than the store.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Extension trait for SQLite results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TripError::database(message).with_source(e))
    }
}

/// Result type alias for itinerary operations
pub type Result<T> = std::result::Result<T, TripError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_builder_names_field() {
        let err = TripError::validation("name").with_reason("must not be empty");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'name': must not be empty"
        );
    }

    #[test]
    fn db_context_wraps_sqlite_error() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to read places").unwrap_err();
        assert!(matches!(err, TripError::Database { .. }));
        assert_eq!(err.to_string(), "Database error: Failed to read places");
    }
}
