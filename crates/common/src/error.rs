//! Common error types and handling for Spoolwise

use sqlx::error::ErrorKind;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Spoolwise engine
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),

    #[error("Database error: {0}")]
    Storage(sqlx::Error),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Get the error code for callers that branch on the failure kind
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Unexpected(_) => "UNEXPECTED_ERROR",
            Error::Storage(_) => "STORAGE_ERROR",
            Error::Constraint(_) => "CONSTRAINT_ERROR",
            Error::Migration(_) => "MIGRATION_ERROR",
            Error::Io(_) => "FILE_ERROR",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::NotFound(_) => "NOT_FOUND",
        }
    }

    /// Whether a retry could plausibly succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Error::Storage(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_))
        )
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => {
                    return Error::Constraint(db_err.message().to_string());
                }
                _ => {}
            }
        }
        Error::Storage(err)
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        Error::Validation(format!("Validation failed: {}", errors))
    }
}
