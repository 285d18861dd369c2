//! The persistent-store contract consumed by the authorization core.
//!
//! The core touches exactly six store operations. They are expressed as a
//! trait so the resolvers can be exercised against an in-memory store in
//! tests; the production implementation delegates to the sqlx-backed
//! repositories and is constructed once at process start and injected —
//! there are no hidden globals.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use fleetgate_core::result::AppResult;
use fleetgate_database::repositories::{CompanyRepository, RoleRepository, UserRepository};
use fleetgate_entity::company::Company;
use fleetgate_entity::permission::Permission;
use fleetgate_entity::user::{Role, User};

/// Store operations required by permission resolution and tenant scoping.
#[async_trait]
pub trait AuthStore: Send + Sync {
    /// Load a user by primary key.
    async fn find_user_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Look up a role by name, case-insensitively.
    async fn find_role_by_name_ci(&self, name: &str) -> AppResult<Option<Role>>;

    /// Persist a user's role link. Must be an idempotent single-row update.
    async fn update_user_role_id(&self, user_id: Uuid, role_id: Uuid) -> AppResult<()>;

    /// Fetch every permission granted to a role.
    async fn find_permissions_for_role(&self, role_id: Uuid) -> AppResult<Vec<Permission>>;

    /// Load a company by its spcode.
    async fn find_company_by_id(&self, id: &str) -> AppResult<Option<Company>>;

    /// Load the direct subsidiaries of a company.
    async fn find_companies_by_parent(&self, parent_id: &str) -> AppResult<Vec<Company>>;
}

/// Production [`AuthStore`] backed by the PostgreSQL repositories.
#[derive(Debug, Clone)]
pub struct SqlAuthStore {
    users: Arc<UserRepository>,
    roles: Arc<RoleRepository>,
    companies: Arc<CompanyRepository>,
}

impl SqlAuthStore {
    /// Create a store over the given repositories.
    pub fn new(
        users: Arc<UserRepository>,
        roles: Arc<RoleRepository>,
        companies: Arc<CompanyRepository>,
    ) -> Self {
        Self {
            users,
            roles,
            companies,
        }
    }
}

#[async_trait]
impl AuthStore for SqlAuthStore {
    async fn find_user_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        self.users.find_by_id(id).await
    }

    async fn find_role_by_name_ci(&self, name: &str) -> AppResult<Option<Role>> {
        self.roles.find_by_name_ci(name).await
    }

    async fn update_user_role_id(&self, user_id: Uuid, role_id: Uuid) -> AppResult<()> {
        self.users.update_role_id(user_id, role_id).await
    }

    async fn find_permissions_for_role(&self, role_id: Uuid) -> AppResult<Vec<Permission>> {
        self.roles.permissions_for_role(role_id).await
    }

    async fn find_company_by_id(&self, id: &str) -> AppResult<Option<Company>> {
        self.companies.find_by_id(id).await
    }

    async fn find_companies_by_parent(&self, parent_id: &str) -> AppResult<Vec<Company>> {
        self.companies.find_by_parent(parent_id).await
    }
}
