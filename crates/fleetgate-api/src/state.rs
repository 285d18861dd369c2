//! Shared application state injected into every handler.

use std::sync::Arc;

use fleetgate_auth::rbac::{AccessChecker, PermissionResolver};
use fleetgate_auth::password::PasswordHasher;
use fleetgate_auth::tenant::TenantScopeResolver;
use fleetgate_auth::token::TokenService;
use fleetgate_core::config::AppConfig;
use fleetgate_database::DatabasePool;
use fleetgate_database::repositories::UserRepository;

/// Everything a request handler needs, constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Database pool (health checks).
    pub db: DatabasePool,
    /// Password hashing and verification.
    pub password_hasher: Arc<PasswordHasher>,
    /// Session token issuance and verification.
    pub tokens: Arc<TokenService>,
    /// Effective permission resolution.
    pub permissions: Arc<PermissionResolver>,
    /// Permission membership checks.
    pub access: Arc<AccessChecker>,
    /// Tenant scoping decisions.
    pub tenant: Arc<TenantScopeResolver>,
    /// User lookups for login.
    pub users: Arc<UserRepository>,
}
