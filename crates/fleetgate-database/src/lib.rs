//! # fleetgate-database
//!
//! PostgreSQL database connection management and concrete repository
//! implementations for the FleetGate authorization entities.

pub mod connection;
pub mod error;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use error::store_error;
