//! Directory result type

use super::error::DirectoryError;

/// Standard result type for directory operations
pub type Result<T> = std::result::Result<T, DirectoryError>;
