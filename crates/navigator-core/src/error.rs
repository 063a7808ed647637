//! Error types for the roadmap engine.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{Branch, CareerGoal};

/// Comprehensive error type for all navigator operations.
///
/// The domain variants (`NoMatchingTemplate`, `RoadmapNotFound`,
/// `StepNotFound`, `TemplateNotFound`) describe facts about stored data and
/// are never retried. `Database` is the infrastructure failure; whenever it
/// is returned from a mutating operation the surrounding transaction has
/// already been rolled back.
#[derive(Error, Debug)]
pub enum NavigatorError {
    /// Database connection, constraint or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No active template applies to the given profile
    #[error(
        "No matching roadmap template for branch '{branch}', goal '{career_goal}', year {current_year}"
    )]
    NoMatchingTemplate {
        branch: Branch,
        career_goal: CareerGoal,
        current_year: u8,
    },
    /// The user has no roadmap yet
    #[error("Roadmap for user {user_id} not found")]
    RoadmapNotFound { user_id: u64 },
    /// The step does not belong to the user's roadmap
    #[error("Step {step_id} not found in the roadmap of user {user_id}")]
    StepNotFound { user_id: u64, step_id: u64 },
    /// Template not found for the given ID
    #[error("Template with ID {id} not found")]
    TemplateNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
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

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> NavigatorError {
        NavigatorError::Database {
            message: self.message,
            source,
        }
    }
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
    pub fn with_reason(self, reason: impl Into<String>) -> NavigatorError {
        NavigatorError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl NavigatorError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the error reports a missing roadmap, step or template rather
    /// than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            NavigatorError::RoadmapNotFound { .. }
                | NavigatorError::StepNotFound { .. }
                | NavigatorError::TemplateNotFound { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| NavigatorError::database(message).with_source(e))
    }
}

/// Result type alias for navigator operations
pub type Result<T> = std::result::Result<T, NavigatorError>;
