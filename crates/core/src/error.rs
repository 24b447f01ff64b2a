// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Statement preparation, execution or result retrieval failed.
    /// Also used when a confirming read finds no row.
    #[error("Store error: {0}")]
    Store(String),

    /// Update targeted an id that does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Operation cancelled: {0}")]
    Cancelled(String),

    #[error("Deadline exceeded: {0}")]
    DeadlineExceeded(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// True for every failure that originated at (or aborted) the store layer
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self,
            AppError::Store(_) | AppError::Cancelled(_) | AppError::DeadlineExceeded(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Note: sqlx::Error conversion is handled in infra-sqlite crate
// by converting to AppError::Store(String)

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_failure_classification() {
        assert!(AppError::Store("disk I/O".into()).is_store_failure());
        assert!(AppError::Cancelled("caller gone".into()).is_store_failure());
        assert!(AppError::DeadlineExceeded("5s".into()).is_store_failure());
        assert!(!AppError::NotFound("todo 7".into()).is_store_failure());
        assert!(!AppError::Validation("subject".into()).is_store_failure());
    }

    #[test]
    fn test_not_found_is_distinct() {
        let err = AppError::NotFound("TODO 42 not found".into());
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found: TODO 42 not found");
    }
}
