//! Core Errors
//!
//! Storage and feed error types shared by the core and its adapters.

use thiserror::Error;

/// Message shown for any non-2xx response from the posts endpoint
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch posts";

/// Failures of a key-value storage backend.
///
/// These never reach the user: `PersistentList` logs and recovers from them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage read failed: {0}")]
    Read(String),

    #[error("Storage write failed: {0}")]
    Write(String),
}

/// Failures of a page fetch.
///
/// The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The endpoint answered with a non-success status
    #[error("{}", FETCH_FAILED_MESSAGE)]
    Status(u16),

    /// The request never produced a response
    #[error("{0}")]
    Network(String),

    /// The response body was not a list of posts
    #[error("{0}")]
    Decode(String),
}

pub type StorageResult<T> = Result<T, StorageError>;
pub type FeedResult<T> = Result<T, FeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        assert_eq!(FeedError::Status(500).to_string(), FETCH_FAILED_MESSAGE);
        assert_eq!(FeedError::Status(404).to_string(), FETCH_FAILED_MESSAGE);
    }

    #[test]
    fn test_network_error_keeps_message() {
        let err = FeedError::Network("Failed to fetch".to_string());
        assert_eq!(err.to_string(), "Failed to fetch");
    }
}
