//! Error types shared by the services of the workspace

use sqlx::{Error as SqlxError, migrate::MigrateError};
use thiserror::Error;

/// Error raised by the persistence layer
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The pool could not be established
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// A statement failed while executing
    #[error("Database query error: {0}")]
    Query(#[from] SqlxError),

    /// Applying the embedded migrations failed
    #[error("Database migration error: {0}")]
    Migration(#[from] MigrateError),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;
