use thiserror::Error;

/// Unified error type for database operations that application code can handle
#[derive(Error, Debug)]
pub enum DbError {
    /// Entity not found by the given identifier
    #[error("Entity not found")]
    NotFound,

    /// Unique constraint violation
    #[error("Unique constraint violation: {message}")]
    UniqueViolation { table: Option<String>, message: String },

    /// Foreign key constraint violation
    #[error("Foreign key constraint violation: {message}")]
    ForeignKeyViolation { table: Option<String>, message: String },

    /// Check constraint violation
    #[error("Check constraint violation: {message}")]
    CheckViolation { table: Option<String>, message: String },

    /// Catch-all for non-recoverable errors (connectivity, pool exhaustion, decoding)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convert from sqlx::Error using sqlx's driver-independent error categorization
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => DbError::NotFound,
            sqlx::Error::Database(db_err) => {
                let table = db_err.table().map(|s| s.to_string());
                let message = db_err.message().to_string();
                if db_err.is_unique_violation() {
                    DbError::UniqueViolation { table, message }
                } else if db_err.is_foreign_key_violation() {
                    DbError::ForeignKeyViolation { table, message }
                } else if db_err.is_check_violation() {
                    DbError::CheckViolation { table, message }
                } else {
                    DbError::Other(anyhow::Error::from(err))
                }
            }
            _ => DbError::Other(anyhow::Error::from(err)),
        }
    }
}

/// Type alias for database operation results
pub type Result<T> = std::result::Result<T, DbError>;
