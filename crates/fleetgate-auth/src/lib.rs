//! # fleetgate-auth
//!
//! The authorization and multi-tenant scoping core of FleetGate.
//!
//! ## Modules
//!
//! - `password` — bcrypt credential hashing and verification
//! - `token` — stateless signed session tokens (7-day JWTs)
//! - `store` — the persistent-store contract the core consumes
//! - `rbac` — effective permission resolution (with role-linkage
//!   self-heal) and membership/wildcard checks
//! - `tenant` — admin bypass detection and company/subsidiary scoping
//! - `guard` — the per-operation authorization state machine
//! - `context` — the authenticated request context

pub mod context;
pub mod guard;
pub mod password;
pub mod rbac;
pub mod store;
pub mod tenant;
pub mod token;

pub use context::AuthContext;
pub use guard::{Decision, Guard, GuardRejection};
pub use password::PasswordHasher;
pub use rbac::{AccessChecker, PermissionResolver};
pub use store::{AuthStore, SqlAuthStore};
pub use tenant::{CompanyFilter, TenantScope, TenantScopeResolver};
pub use token::{SessionClaims, TokenService};

#[cfg(test)]
pub(crate) mod test_support;
