//! Company/subsidiary scoping and admin bypass detection.

use std::collections::HashSet;
use std::sync::Arc;

use fleetgate_core::result::AppResult;

use crate::context::AuthContext;
use crate::store::AuthStore;
use fleetgate_entity::user::RoleName;

/// Which tenant data a caller may see for plain scoped queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenantScope {
    /// No company filter at all (admins).
    Unrestricted,
    /// The caller can see nothing: non-admin without a company assignment.
    Empty,
    /// Restricted to a single company. The name is best-effort enrichment;
    /// a failed lookup never invalidates the scope.
    Company {
        /// Company identifier (spcode).
        id: String,
        /// Company display name, when the lookup succeeded.
        name: Option<String>,
    },
}

/// Company-id filter for fleet/telemetry queries that honor the
/// one-level subsidiary hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyFilter {
    /// Skip filtering entirely (admins).
    Unrestricted,
    /// Match rows whose company id is in the set; an empty set matches
    /// nothing.
    Ids(HashSet<String>),
}

impl CompanyFilter {
    /// Whether this filter can never match a row.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Ids(ids) if ids.is_empty())
    }
}

/// Computes tenant scoping decisions for the authenticated caller.
#[derive(Clone)]
pub struct TenantScopeResolver {
    store: Arc<dyn AuthStore>,
}

impl TenantScopeResolver {
    /// Create a resolver over the given store.
    pub fn new(store: Arc<dyn AuthStore>) -> Self {
        Self { store }
    }

    /// Whether the caller's role bypasses tenant scoping entirely.
    pub fn is_admin(&self, ctx: &AuthContext) -> bool {
        ctx.is_admin()
    }

    /// Cheap pre-check: a non-admin without a company assignment can see
    /// nothing, so callers skip the scoped query altogether.
    pub fn should_return_empty(&self, ctx: &AuthContext) -> bool {
        !ctx.is_admin() && ctx.company_id.is_none()
    }

    /// Scope for plain company-filtered queries.
    pub async fn get_scope(&self, ctx: &AuthContext) -> AppResult<TenantScope> {
        if ctx.is_admin() {
            return Ok(TenantScope::Unrestricted);
        }
        let Some(company_id) = ctx.company_id.as_deref() else {
            return Ok(TenantScope::Empty);
        };

        // Name enrichment is best-effort: a missing company row or a store
        // hiccup here must not turn a valid scope into a denial.
        let name = match self.store.find_company_by_id(company_id).await {
            Ok(Some(company)) => Some(company.name),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(
                    company_id,
                    error = %e,
                    "company name lookup failed; keeping scope without name"
                );
                None
            }
        };

        Ok(TenantScope::Company {
            id: company_id.to_string(),
            name,
        })
    }

    /// Company-id filter for fleet/telemetry queries.
    ///
    /// Subsidiary users see their own company plus its direct children —
    /// exactly one level, never recursive. Company users see their own
    /// company only, as does any other non-admin role with a company
    /// assignment. Non-admins without a company assignment match nothing.
    pub async fn expand_hierarchical(&self, ctx: &AuthContext) -> AppResult<CompanyFilter> {
        if ctx.is_admin() {
            return Ok(CompanyFilter::Unrestricted);
        }
        let Some(company_id) = ctx.company_id.as_deref() else {
            return Ok(CompanyFilter::Ids(HashSet::new()));
        };

        let mut ids = HashSet::new();
        ids.insert(company_id.to_string());

        if ctx.role == RoleName::Subsidiary {
            for child in self.store.find_companies_by_parent(company_id).await? {
                ids.insert(child.id);
            }
        }

        Ok(CompanyFilter::Ids(ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MemoryStore, context_with_role};
    use fleetgate_entity::company::Company;

    fn resolver_with_companies() -> TenantScopeResolver {
        let store = Arc::new(MemoryStore::new());
        store.add_company(Company {
            id: "10".into(),
            name: "Parent Fleet Co".into(),
            parent_company_id: None,
        });
        store.add_company(Company {
            id: "11".into(),
            name: "Subsidiary B".into(),
            parent_company_id: Some("10".into()),
        });
        store.add_company(Company {
            id: "12".into(),
            name: "Subsidiary C".into(),
            parent_company_id: Some("10".into()),
        });
        store.add_company(Company {
            id: "13".into(),
            name: "Unrelated D".into(),
            parent_company_id: Some("99".into()),
        });
        TenantScopeResolver::new(store)
    }

    #[test]
    fn admin_detection() {
        let resolver = resolver_with_companies();
        assert!(resolver.is_admin(&context_with_role("Super Admin", None)));
        assert!(resolver.is_admin(&context_with_role("superuser", Some("5"))));
        assert!(!resolver.is_admin(&context_with_role("company", Some("5"))));
    }

    #[test]
    fn should_return_empty_truth_table() {
        let resolver = resolver_with_companies();
        assert!(resolver.should_return_empty(&context_with_role("company", None)));
        assert!(!resolver.should_return_empty(&context_with_role("company", Some("5"))));
        assert!(!resolver.should_return_empty(&context_with_role("admin", None)));
    }

    #[tokio::test]
    async fn scope_variants() {
        let resolver = resolver_with_companies();

        assert_eq!(
            resolver.get_scope(&context_with_role("admin", None)).await.unwrap(),
            TenantScope::Unrestricted
        );
        assert_eq!(
            resolver.get_scope(&context_with_role("company", None)).await.unwrap(),
            TenantScope::Empty
        );
        assert_eq!(
            resolver.get_scope(&context_with_role("company", Some("10"))).await.unwrap(),
            TenantScope::Company {
                id: "10".into(),
                name: Some("Parent Fleet Co".into()),
            }
        );
    }

    #[tokio::test]
    async fn missing_company_name_keeps_scope_valid() {
        let resolver = resolver_with_companies();
        assert_eq!(
            resolver.get_scope(&context_with_role("company", Some("404"))).await.unwrap(),
            TenantScope::Company {
                id: "404".into(),
                name: None,
            }
        );
    }

    #[tokio::test]
    async fn subsidiary_expands_exactly_one_level() {
        let resolver = resolver_with_companies();
        let filter = resolver
            .expand_hierarchical(&context_with_role("subsidiary", Some("10")))
            .await
            .unwrap();

        let expected: HashSet<String> =
            ["10", "11", "12"].iter().map(|s| s.to_string()).collect();
        assert_eq!(filter, CompanyFilter::Ids(expected));
    }

    #[tokio::test]
    async fn company_sees_only_itself() {
        let resolver = resolver_with_companies();
        let filter = resolver
            .expand_hierarchical(&context_with_role("company", Some("11")))
            .await
            .unwrap();
        assert_eq!(
            filter,
            CompanyFilter::Ids(HashSet::from(["11".to_string()]))
        );
    }

    #[tokio::test]
    async fn admin_is_unrestricted_and_unassigned_matches_nothing() {
        let resolver = resolver_with_companies();
        assert_eq!(
            resolver
                .expand_hierarchical(&context_with_role("admin", None))
                .await
                .unwrap(),
            CompanyFilter::Unrestricted
        );

        let filter = resolver
            .expand_hierarchical(&context_with_role("dispatcher", None))
            .await
            .unwrap();
        assert!(filter.is_empty());
    }
}
