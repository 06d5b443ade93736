//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// True if the operator declined a confirmation prompt.
    pub fn is_aborted(&self) -> bool {
        matches!(
            self,
            CliError::Infra(InfraError::Application(ApplicationError::Aborted))
        )
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Application(app) => match app {
                    ApplicationError::Domain(_) => crate::exitcode::DATAERR,
                    ApplicationError::AliasNotFound(_) => crate::exitcode::NOINPUT,
                    ApplicationError::Storage { .. } => crate::exitcode::IOERR,
                    ApplicationError::Aborted => crate::exitcode::ABORTED,
                    ApplicationError::Remote { .. } => crate::exitcode::UNAVAILABLE,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                },
            },
        }
    }
}
