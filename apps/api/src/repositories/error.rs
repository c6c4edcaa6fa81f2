//! Repository error types

use thiserror::Error;

/// Errors raised by todo repositories
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// No row matched the given id
    #[error("No Todo record found for id {id}")]
    NotFound { id: String },

    /// Database query failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl RepositoryError {
    /// Create a not found error for a todo id
    pub fn not_found(id: impl ToString) -> Self {
        Self::NotFound { id: id.to_string() }
    }

    /// Whether this error means the row does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_not_found_display() {
        let id = Uuid::nil();
        let err = RepositoryError::not_found(id);
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "No Todo record found for id 00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_database_error_is_not_not_found() {
        let err = RepositoryError::from(sqlx::Error::PoolTimedOut);
        assert!(!err.is_not_found());
        assert!(err.to_string().starts_with("database error"));
    }
}
