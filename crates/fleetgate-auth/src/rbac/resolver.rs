//! Effective permission resolution with lazy role-linkage self-heal.

use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use fleetgate_core::result::AppResult;
use fleetgate_entity::permission::PermissionName;

use crate::store::AuthStore;

/// Resolves the effective permission set a user holds.
///
/// Role assignments in the legacy data can be stale or only partially
/// migrated: `users.role_id` may be missing while the free-text
/// `users.role` still names a real role. Resolution repairs that linkage
/// lazily (self-heal) and otherwise fails closed — every unresolvable
/// situation yields an empty set, never an error.
#[derive(Clone)]
pub struct PermissionResolver {
    store: Arc<dyn AuthStore>,
}

impl PermissionResolver {
    /// Create a resolver over the given store.
    pub fn new(store: Arc<dyn AuthStore>) -> Self {
        Self { store }
    }

    /// Resolve the normalized permission names a user effectively holds.
    ///
    /// 1. A missing user resolves to the empty set.
    /// 2. With `role_id` absent and a non-empty `role` string, the role is
    ///    looked up by name case-insensitively; on a hit the id is written
    ///    back so later calls skip both the lookup and the write. The
    ///    write targets the same value for all concurrent callers, so the
    ///    store's single-row atomic update suffices.
    /// 3. Still no `role_id`: empty set, with an operator-facing warning
    ///    for the unresolvable role name.
    /// 4. Otherwise the role's permissions, normalized and de-duplicated.
    pub async fn resolve(&self, user_id: Uuid) -> AppResult<HashSet<PermissionName>> {
        let Some(user) = self.store.find_user_by_id(user_id).await? else {
            return Ok(HashSet::new());
        };

        let role_id = match user.role_id {
            Some(role_id) => Some(role_id),
            None if !user.role.trim().is_empty() => {
                match self.store.find_role_by_name_ci(&user.role).await? {
                    Some(role) => {
                        tracing::info!(
                            user_id = %user.id,
                            role = %user.role,
                            role_id = %role.id,
                            "self-healing missing role linkage"
                        );
                        self.store.update_user_role_id(user.id, role.id).await?;
                        Some(role.id)
                    }
                    None => {
                        tracing::warn!(
                            user_id = %user.id,
                            role = %user.role,
                            "unresolvable role name; resolving to empty permission set"
                        );
                        None
                    }
                }
            }
            None => None,
        };

        let Some(role_id) = role_id else {
            return Ok(HashSet::new());
        };

        let permissions = self.store.find_permissions_for_role(role_id).await?;
        Ok(permissions
            .iter()
            .map(|p| p.normalized_name())
            .collect())
    }
}
