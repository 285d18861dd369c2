//! Session claims embedded in every signed token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleetgate_entity::user::{RoleName, User};

/// Identity claims carried verbatim inside a session token.
///
/// Claims are immutable once issued and trusted as-is on every request;
/// in particular the `role` string is *not* re-validated against the roles
/// table per request. Tokens simply expire — there is no revocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User identifier.
    pub id: Uuid,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Free-text role name at the time of issuance.
    pub role: String,
    /// Assigned company identifier (legacy "spcode"), if any.
    pub spcode: Option<String>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl SessionClaims {
    /// Build claims for a user, valid from now for the given lifetime.
    pub fn for_user(user: &User, ttl: chrono::Duration) -> Self {
        let now = Utc::now();
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role.clone(),
            spcode: user.company_id.clone(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Classify the role string carried in the token.
    pub fn role_name(&self) -> RoleName {
        RoleName::parse(&self.role)
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}
