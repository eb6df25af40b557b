//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::Application(e.into())
    }
}

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::Domain(d) => match d {
                    DomainError::InvalidLevelOrder { .. }
                    | DomainError::DanglingValues { .. }
                    | DomainError::CapacityExceeded { .. }
                    | DomainError::TooDeepToRender { .. } => crate::exitcode::DATAERR,
                    DomainError::Allocation(_) => crate::exitcode::OSERR,
                    DomainError::UnknownNode
                    | DomainError::SlotOccupied { .. }
                    | DomainError::RootOccupied => crate::exitcode::SOFTWARE,
                },
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::VerificationFailed { .. } => crate::exitcode::SOFTWARE,
                ApplicationError::OperationFailed { .. } => crate::exitcode::NOINPUT,
            },
        }
    }
}
