//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("alias not found: {0}")]
    AliasNotFound(String),

    #[error("storage error: {context}")]
    Storage {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Operator declined a confirmation prompt. Nothing was changed.
    #[error("Aborted")]
    Aborted,

    #[error("notebook service error: {message}")]
    Remote { message: String },

    #[error("config error: {message}")]
    Config { message: String },
}

impl ApplicationError {
    /// Create a storage error with context.
    pub fn storage(
        context: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Storage {
            context: context.into(),
            source: source.into(),
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
