//! Domain layer
//!
//! This layer contains:
//! - Carrier records returned by lookups
//! - The `CarrierDirectory` port implemented by persistence

pub mod carrier;
pub mod shared;

// Re-export commonly used types
pub use shared::{DirectoryError, Result};
