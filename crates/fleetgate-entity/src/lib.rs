//! # fleetgate-entity
//!
//! Domain entity models for FleetGate: users, roles, permissions, and
//! companies. These are the rows the authorization core reads and writes;
//! all other platform entities are owned by upstream CRUD flows.

pub mod company;
pub mod permission;
pub mod user;

pub use company::Company;
pub use permission::{Permission, PermissionName, PermissionPattern};
pub use user::{Role, RoleName, User};
