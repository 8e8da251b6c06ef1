//! Error types for the coachplan library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all coachplan operations.
///
/// A catalog lookup miss, an unparseable activity duration and an
/// out-of-range step jump are deliberately absent: those are ordinary
/// outcomes (`None`, `0`, no-op) rather than errors.
#[derive(Error, Debug)]
pub enum CoachError {
    /// Remote plan generation failed (transport, HTTP status or response
    /// parsing)
    #[error("Plan generation failed: {message}")]
    Generation { message: String },
    /// Plan not found for the given ID
    #[error("Plan with ID '{id}' not found")]
    PlanNotFound { id: String },
    /// Two catalog records share the same classification tuple
    #[error("Duplicate catalog entry for {key}")]
    DuplicateCatalogEntry { key: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CoachError {
        CoachError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CoachError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a generation error from any displayable cause.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Extension trait for mapping reqwest failures onto generation errors.
pub trait GenerationResultExt<T> {
    /// Map the error with a message prefix.
    fn generation_context(self, message: &str) -> Result<T>;
}

impl<T> GenerationResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn generation_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CoachError::generation(format!("{message}: {e}")))
    }
}

/// Result type alias for coachplan operations
pub type Result<T> = std::result::Result<T, CoachError>;
