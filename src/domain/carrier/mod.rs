//! Carrier bounded context

pub mod entity;
pub mod repository;

pub use entity::{CarrierCredential, E164Mapping, NumberMapping, SipUriMapping};
pub use repository::CarrierDirectory;
