//! Directory errors

use thiserror::Error;

/// Failures surfaced by a carrier directory.
///
/// A lookup that matches no row is not an error; it yields `Ok(None)`.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// The store could not be reached, rejected the credentials, or failed to close cleanly
    #[error("Connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// A statement failed to execute, including connection loss mid-query
    #[error("Query error: {0}")]
    Query(#[source] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl DirectoryError {
    /// Whether the error happened while establishing or tearing down the connection
    pub fn is_connection(&self) -> bool {
        matches!(self, DirectoryError::Connection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_driver_error_is_kept_as_source() {
        let err = DirectoryError::Query(sqlx::Error::RowNotFound);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Query error:"));
        assert!(!err.is_connection());
    }

    #[test]
    fn test_connection_error_classification() {
        let err = DirectoryError::Connection(sqlx::Error::PoolTimedOut);
        assert!(err.is_connection());
    }
}
