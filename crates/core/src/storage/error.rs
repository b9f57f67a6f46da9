use thiserror::Error;

/// Errors that can occur while talking to the backing store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StorageError>;
