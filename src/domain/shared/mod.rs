//! Shared kernel - Common types used across the crate

pub mod error;
pub mod result;

pub use error::DirectoryError;
pub use result::Result;
