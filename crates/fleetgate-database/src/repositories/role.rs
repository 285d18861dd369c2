//! Role and role-permission repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use fleetgate_core::result::AppResult;
use fleetgate_entity::permission::Permission;
use fleetgate_entity::user::Role;

use crate::error::store_error;

/// Repository for role lookup and role-permission projection.
#[derive(Debug, Clone)]
pub struct RoleRepository {
    pool: PgPool,
}

impl RoleRepository {
    /// Create a new role repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a role by name, case-insensitively.
    ///
    /// This is the secondary matching key used by role-linkage self-heal.
    pub async fn find_by_name_ci(&self, name: &str) -> AppResult<Option<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles WHERE LOWER(name) = LOWER($1)")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("find_role_by_name_ci", e))
    }

    /// Fetch every permission granted to a role.
    pub async fn permissions_for_role(&self, role_id: Uuid) -> AppResult<Vec<Permission>> {
        sqlx::query_as::<_, Permission>(
            "SELECT p.id, p.name FROM permissions p \
             INNER JOIN role_has_permissions rhp ON rhp.permission_id = p.id \
             WHERE rhp.role_id = $1",
        )
        .bind(role_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error("find_permissions_for_role", e))
    }
}
