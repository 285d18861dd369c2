//! User repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use fleetgate_core::result::AppResult;
use fleetgate_entity::user::User;

use crate::error::store_error;

/// Repository for user lookup and role-linkage repair.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("find_user_by_id", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("find_user_by_email", e))
    }

    /// Set a user's authoritative role link.
    ///
    /// Idempotent single-row update: concurrent self-heal callers all write
    /// the same target value, so no lock is taken and the last write is
    /// harmless.
    pub async fn update_role_id(&self, user_id: Uuid, role_id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE users SET role_id = $2, updated_at = NOW() WHERE id = $1")
            .bind(user_id)
            .bind(role_id)
            .execute(&self.pool)
            .await
            .map_err(|e| store_error("update_user_role_id", e))?;
        Ok(())
    }
}
