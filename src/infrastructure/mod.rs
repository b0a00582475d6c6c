//! Infrastructure layer - Technical implementations
//!
//! This layer contains:
//! - Carrier directory implementations (PostgreSQL, in-memory)
//! - Database connection management

pub mod persistence;
