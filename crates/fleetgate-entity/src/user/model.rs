//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::RoleName;

/// A registered user in the fleet platform.
///
/// `role` is legacy free text and `role_id` the authoritative link into
/// the roles table. The two may disagree for partially migrated accounts;
/// the permission resolver lazily repairs `role_id` from `role` on first
/// read (self-heal).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Login email address.
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Display name.
    pub name: String,
    /// Legacy free-text role name.
    pub role: String,
    /// Authoritative role foreign key, once migrated or self-healed.
    pub role_id: Option<Uuid>,
    /// Assigned company identifier (the legacy "spcode").
    pub company_id: Option<String>,
    /// bcrypt password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether the account may log in.
    pub is_active: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Classify the legacy role string.
    pub fn role_name(&self) -> RoleName {
        RoleName::parse(&self.role)
    }

    /// Whether this user bypasses permission checks and tenant scoping.
    pub fn is_admin(&self) -> bool {
        self.role_name().is_admin()
    }
}

/// A stored role definition.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Role {
    /// Unique role identifier.
    pub id: Uuid,
    /// Role name; matched case-insensitively during self-heal.
    pub name: String,
    /// Guard name, carried over from the legacy permission tables.
    pub guard_name: String,
}
