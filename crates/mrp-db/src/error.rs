//! Database error types for mrp-db.

use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Input failed validation (missing required field, invalid enum value,
    /// cross-run step link).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A referenced entity does not exist.
    #[error("Not found: {entity} {id}")]
    NotFound { entity: &'static str, id: String },

    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
