//! Multi-tenant scoping decisions.

pub mod scope;

pub use scope::{CompanyFilter, TenantScope, TenantScopeResolver};
