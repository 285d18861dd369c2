//! Permission entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::name::PermissionName;

/// A stored permission definition.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Permission {
    /// Unique permission identifier.
    pub id: Uuid,
    /// Permission name as stored; normalized on read.
    pub name: String,
}

impl Permission {
    /// The normalized name used for all comparisons.
    pub fn normalized_name(&self) -> PermissionName {
        PermissionName::new(&self.name)
    }
}
