//! Permission membership and wildcard checks.

use uuid::Uuid;

use fleetgate_core::result::AppResult;
use fleetgate_entity::permission::{PermissionName, PermissionPattern};

use crate::rbac::resolver::PermissionResolver;

/// Boolean permission checks over a user's resolved permission set.
#[derive(Clone)]
pub struct AccessChecker {
    resolver: PermissionResolver,
}

impl AccessChecker {
    /// Create a checker over the given resolver.
    pub fn new(resolver: PermissionResolver) -> Self {
        Self { resolver }
    }

    /// Whether the user holds the named permission.
    pub async fn has(&self, user_id: Uuid, name: &str) -> AppResult<bool> {
        let set = self.resolver.resolve(user_id).await?;
        Ok(set.contains(&PermissionName::new(name)))
    }

    /// Whether the user holds at least one of the named permissions.
    ///
    /// An empty list is never satisfied.
    pub async fn has_any(&self, user_id: Uuid, names: &[&str]) -> AppResult<bool> {
        let set = self.resolver.resolve(user_id).await?;
        Ok(names.iter().any(|n| set.contains(&PermissionName::new(n))))
    }

    /// Whether the user holds every named permission.
    ///
    /// An empty list is trivially satisfied.
    pub async fn has_all(&self, user_id: Uuid, names: &[&str]) -> AppResult<bool> {
        let set = self.resolver.resolve(user_id).await?;
        Ok(names.iter().all(|n| set.contains(&PermissionName::new(n))))
    }

    /// Test a permission against a wildcard pattern.
    ///
    /// Pure; see [`PermissionPattern`] for the DSL semantics.
    pub fn matches_pattern(permission: &str, pattern: &str) -> bool {
        PermissionPattern::new(pattern).matches(&PermissionName::new(permission))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_support::{MemoryStore, user_with_role};

    fn checker_with(perms: &[&str]) -> (AccessChecker, Uuid) {
        let store = Arc::new(MemoryStore::new());
        let role_id = store.add_role("driver manager", perms);
        let mut user = user_with_role("driver manager", None);
        user.role_id = Some(role_id);
        store.add_user(user.clone());
        (AccessChecker::new(PermissionResolver::new(store)), user.id)
    }

    #[tokio::test]
    async fn has_normalizes_the_query() {
        let (checker, user_id) = checker_with(&["view driver"]);
        assert!(checker.has(user_id, " View Driver ").await.unwrap());
        assert!(!checker.has(user_id, "edit driver").await.unwrap());
    }

    #[tokio::test]
    async fn has_any_and_has_all() {
        let (checker, user_id) = checker_with(&["view driver", "edit driver"]);

        assert!(checker.has_any(user_id, &["view driver", "delete driver"]).await.unwrap());
        assert!(!checker.has_any(user_id, &["delete driver"]).await.unwrap());
        assert!(checker.has_all(user_id, &["view driver", "edit driver"]).await.unwrap());
        assert!(!checker.has_all(user_id, &["view driver", "delete driver"]).await.unwrap());
    }

    #[tokio::test]
    async fn empty_lists() {
        let (checker, user_id) = checker_with(&["view driver"]);
        assert!(!checker.has_any(user_id, &[]).await.unwrap());
        assert!(checker.has_all(user_id, &[]).await.unwrap());
    }

    #[test]
    fn pattern_semantics() {
        assert!(AccessChecker::matches_pattern("view driver", "view *"));
        assert!(!AccessChecker::matches_pattern("view driver", "edit *"));
        assert!(AccessChecker::matches_pattern("anything here", "*"));
        assert!(!AccessChecker::matches_pattern("view driver extra", "view *"));
    }
}
