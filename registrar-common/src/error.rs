//! Common error types for registrar

use thiserror::Error;

/// Common result type for registrar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the registrar crates
#[derive(Error, Debug)]
pub enum Error {
    /// Database setup error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Store failure during a service operation, prefixed with the operation
    #[error("{context}: {source}")]
    Store {
        context: String,
        #[source]
        source: sqlx::Error,
    },

    /// Required field missing, empty or unparseable
    #[error("{0}")]
    Validation(String),

    /// Operation targeted a row that does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap a store error with the operation that failed
    pub fn store(context: impl Into<String>, source: sqlx::Error) -> Self {
        Error::Store {
            context: context.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_entity() {
        let err = Error::NotFound("Career".to_string());
        assert_eq!(err.to_string(), "Career not found");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_store_error_is_prefixed() {
        let err = Error::store("Error fetching careers", sqlx::Error::PoolClosed);
        let message = err.to_string();
        assert!(message.starts_with("Error fetching careers: "), "got {message}");
    }
}
