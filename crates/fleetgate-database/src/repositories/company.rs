//! Company repository implementation.

use sqlx::PgPool;

use fleetgate_core::result::AppResult;
use fleetgate_entity::company::Company;

use crate::error::store_error;

/// Repository for company (tenant) lookups.
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    /// Create a new company repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a company by its spcode.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Company>> {
        sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("find_company_by_id", e))
    }

    /// Find the direct subsidiaries of a company.
    ///
    /// Exactly one level: the hierarchy is a forest with a single parent
    /// level, so no recursive walk is performed.
    pub async fn find_by_parent(&self, parent_id: &str) -> AppResult<Vec<Company>> {
        sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE parent_company_id = $1")
            .bind(parent_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("find_companies_by_parent", e))
    }
}
