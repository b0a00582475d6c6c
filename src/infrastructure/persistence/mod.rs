//! Persistence implementations

pub mod carrier_directory;
pub mod database;
pub mod memory;

pub use carrier_directory::PgCarrierDirectory;
pub use database::{connect, connect_options};
pub use memory::InMemoryCarrierDirectory;
