//! Authenticated request context.

use uuid::Uuid;

use fleetgate_entity::user::{RoleName, User};

use crate::token::SessionClaims;

/// Identity of the caller, established from verified session claims.
///
/// Built once per request after token verification and passed to every
/// downstream check; the role is classified eagerly so scoping code works
/// with the closed [`RoleName`] set while `role_raw` preserves the legacy
/// free-text value for logging and self-heal.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User identifier.
    pub user_id: Uuid,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Classified role.
    pub role: RoleName,
    /// The role string exactly as carried in the token.
    pub role_raw: String,
    /// Assigned company identifier (spcode), if any.
    pub company_id: Option<String>,
}

impl AuthContext {
    /// Whether the caller bypasses permission checks and tenant scoping.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<&SessionClaims> for AuthContext {
    fn from(claims: &SessionClaims) -> Self {
        Self {
            user_id: claims.id,
            email: claims.email.clone(),
            name: claims.name.clone(),
            role: claims.role_name(),
            role_raw: claims.role.clone(),
            company_id: claims.spcode.clone(),
        }
    }
}

impl From<&User> for AuthContext {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role_name(),
            role_raw: user.role.clone(),
            company_id: user.company_id.clone(),
        }
    }
}
