//! In-memory `AuthStore` and fixtures shared by the unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use fleetgate_core::result::AppResult;
use fleetgate_entity::company::Company;
use fleetgate_entity::permission::Permission;
use fleetgate_entity::user::{Role, RoleName, User};

use crate::context::AuthContext;
use crate::store::AuthStore;

/// In-memory store with call counters for idempotence assertions.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<HashMap<Uuid, User>>,
    roles: Mutex<Vec<Role>>,
    role_permissions: Mutex<HashMap<Uuid, Vec<Permission>>>,
    companies: Mutex<Vec<Company>>,
    role_lookups: AtomicUsize,
    role_id_writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, user: User) {
        self.users.lock().unwrap().insert(user.id, user);
    }

    /// Insert a role with the given permission names; returns the role id.
    pub fn add_role(&self, name: &str, permission_names: &[&str]) -> Uuid {
        let role = Role {
            id: Uuid::new_v4(),
            name: name.to_string(),
            guard_name: "web".to_string(),
        };
        let perms = permission_names
            .iter()
            .map(|n| Permission {
                id: Uuid::new_v4(),
                name: n.to_string(),
            })
            .collect();
        self.role_permissions.lock().unwrap().insert(role.id, perms);
        let id = role.id;
        self.roles.lock().unwrap().push(role);
        id
    }

    pub fn add_company(&self, company: Company) {
        self.companies.lock().unwrap().push(company);
    }

    pub fn stored_role_id(&self, user_id: Uuid) -> Option<Uuid> {
        self.users.lock().unwrap().get(&user_id).and_then(|u| u.role_id)
    }

    pub fn role_lookups(&self) -> usize {
        self.role_lookups.load(Ordering::SeqCst)
    }

    pub fn role_id_writes(&self) -> usize {
        self.role_id_writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthStore for MemoryStore {
    async fn find_user_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn find_role_by_name_ci(&self, name: &str) -> AppResult<Option<Role>> {
        self.role_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .roles
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    async fn update_user_role_id(&self, user_id: Uuid, role_id: Uuid) -> AppResult<()> {
        self.role_id_writes.fetch_add(1, Ordering::SeqCst);
        if let Some(user) = self.users.lock().unwrap().get_mut(&user_id) {
            user.role_id = Some(role_id);
        }
        Ok(())
    }

    async fn find_permissions_for_role(&self, role_id: Uuid) -> AppResult<Vec<Permission>> {
        Ok(self
            .role_permissions
            .lock()
            .unwrap()
            .get(&role_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn find_company_by_id(&self, id: &str) -> AppResult<Option<Company>> {
        Ok(self
            .companies
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_companies_by_parent(&self, parent_id: &str) -> AppResult<Vec<Company>> {
        Ok(self
            .companies
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.parent_company_id.as_deref() == Some(parent_id))
            .cloned()
            .collect())
    }
}

/// A user fixture with the given free-text role and company id.
pub fn user_with_role(role: &str, company_id: Option<&str>) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        email: format!("{}@example.com", Uuid::new_v4()),
        phone: None,
        name: "Test User".to_string(),
        role: role.to_string(),
        role_id: None,
        company_id: company_id.map(String::from),
        password_hash: String::new(),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

/// An auth context fixture with the given free-text role and company id.
pub fn context_with_role(role: &str, company_id: Option<&str>) -> AuthContext {
    AuthContext {
        user_id: Uuid::new_v4(),
        email: "test@example.com".to_string(),
        name: "Test User".to_string(),
        role: RoleName::parse(role),
        role_raw: role.to_string(),
        company_id: company_id.map(String::from),
    }
}
