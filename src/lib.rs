//! Carrier directory - SIP carrier credential and number mapping lookups
//!
//! Read-only access to the `carrier_credentials` and `number_mapping` tables
//! used by the SIP control plane. Each lookup runs one bound-parameter query
//! over a single persistent PostgreSQL connection.

pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use crate::config::DatabaseConfig;
pub use domain::carrier::{
    CarrierCredential, CarrierDirectory, E164Mapping, NumberMapping, SipUriMapping,
};
pub use domain::shared::error::DirectoryError;
pub use domain::shared::result::Result;
pub use infrastructure::persistence::{InMemoryCarrierDirectory, PgCarrierDirectory};
