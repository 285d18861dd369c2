//! The per-operation authorization state machine.
//!
//! `Start → TokenChecked → {Rejected401 | PermissionChecked → {Allowed |
//! Rejected403}}`. Terminal states are final: a guarded handler runs only
//! from `Allowed`, with no retries and no partial execution. Expected
//! rejections are values, not errors; only store failures surface as
//! `AppError`.

use fleetgate_core::result::AppResult;

use crate::context::AuthContext;
use crate::rbac::AccessChecker;
use crate::token::TokenService;

/// Why a request was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardRejection {
    /// Identity could not be established (HTTP 401).
    Unauthenticated {
        /// "Authentication required" or "Invalid token".
        message: &'static str,
    },
    /// Identity established but permissions insufficient (HTTP 403).
    Forbidden,
}

impl GuardRejection {
    /// User-visible message for this rejection.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Unauthenticated { message } => message,
            Self::Forbidden => "Insufficient permissions",
        }
    }
}

/// Terminal state of the authorization state machine.
#[derive(Debug, Clone)]
pub enum Decision {
    /// The guarded handler may run with this identity.
    Allowed(AuthContext),
    /// The request stops here.
    Rejected(GuardRejection),
}

/// Declarative guard for one operation: which permissions are required and
/// how they combine.
#[derive(Debug, Clone)]
pub struct Guard {
    /// Required permission names (normalized at check time).
    required: Vec<String>,
    /// `true` ⇒ every permission is required; `false` ⇒ any one suffices.
    require_all: bool,
    /// Whether admin roles bypass permission resolution entirely.
    allow_super_admin: bool,
}

impl Guard {
    /// Require a single permission.
    pub fn permission(name: impl Into<String>) -> Self {
        Self::any_of([name.into()])
    }

    /// Require at least one of the given permissions.
    pub fn any_of<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: names.into_iter().map(Into::into).collect(),
            require_all: false,
            allow_super_admin: true,
        }
    }

    /// Require every one of the given permissions.
    pub fn all_of<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            require_all: true,
            ..Self::any_of(names)
        }
    }

    /// Disable the admin bypass for this operation.
    pub fn no_super_admin_bypass(mut self) -> Self {
        self.allow_super_admin = false;
        self
    }

    /// Run the state machine for one request.
    ///
    /// `bearer` is the token from the Authorization header, if one was
    /// presented. The admin bypass fires before any store I/O.
    pub async fn authorize(
        &self,
        bearer: Option<&str>,
        tokens: &TokenService,
        checker: &AccessChecker,
    ) -> AppResult<Decision> {
        let Some(token) = bearer else {
            return Ok(Decision::Rejected(GuardRejection::Unauthenticated {
                message: "Authentication required",
            }));
        };

        let Some(claims) = tokens.verify(token) else {
            return Ok(Decision::Rejected(GuardRejection::Unauthenticated {
                message: "Invalid token",
            }));
        };

        let ctx = AuthContext::from(&claims);

        if self.allow_super_admin && ctx.is_admin() {
            return Ok(Decision::Allowed(ctx));
        }

        let required: Vec<&str> = self.required.iter().map(String::as_str).collect();
        let satisfied = if self.require_all {
            checker.has_all(ctx.user_id, &required).await?
        } else {
            checker.has_any(ctx.user_id, &required).await?
        };

        if satisfied {
            Ok(Decision::Allowed(ctx))
        } else {
            Ok(Decision::Rejected(GuardRejection::Forbidden))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::rbac::PermissionResolver;
    use crate::test_support::{MemoryStore, user_with_role};
    use fleetgate_core::config::auth::AuthConfig;

    struct Fixture {
        tokens: TokenService,
        checker: AccessChecker,
        store: Arc<MemoryStore>,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::new());
        let tokens = TokenService::new(&AuthConfig {
            jwt_secret: "guard-test-secret".to_string(),
            ..AuthConfig::default()
        });
        let checker = AccessChecker::new(PermissionResolver::new(
            Arc::clone(&store) as Arc<dyn crate::store::AuthStore>,
        ));
        Fixture {
            tokens,
            checker,
            store,
        }
    }

    #[tokio::test]
    async fn no_token_is_rejected_with_authentication_required() {
        let f = fixture();
        let guard = Guard::permission("view driver");
        let decision = guard.authorize(None, &f.tokens, &f.checker).await.unwrap();
        match decision {
            Decision::Rejected(r) => assert_eq!(r.message(), "Authentication required"),
            Decision::Allowed(_) => panic!("expected rejection"),
        }
    }

    #[tokio::test]
    async fn garbage_token_is_rejected_with_invalid_token() {
        let f = fixture();
        let guard = Guard::permission("view driver");
        let decision = guard
            .authorize(Some("garbage"), &f.tokens, &f.checker)
            .await
            .unwrap();
        match decision {
            Decision::Rejected(r) => assert_eq!(r.message(), "Invalid token"),
            Decision::Allowed(_) => panic!("expected rejection"),
        }
    }

    #[tokio::test]
    async fn admin_bypasses_permission_resolution() {
        let f = fixture();
        // No roles, no permissions in the store: only the bypass can allow.
        let admin = user_with_role("Super Admin", None);
        let issued = f.tokens.issue(&admin).unwrap();

        let guard = Guard::permission("view driver");
        let decision = guard
            .authorize(Some(&issued.token), &f.tokens, &f.checker)
            .await
            .unwrap();
        assert!(matches!(decision, Decision::Allowed(_)));
        assert_eq!(f.store.role_lookups(), 0, "bypass must not touch the store");
    }

    #[tokio::test]
    async fn bypass_can_be_disabled() {
        let f = fixture();
        let admin = user_with_role("Super Admin", None);
        f.store.add_user(admin.clone());
        let issued = f.tokens.issue(&admin).unwrap();

        let guard = Guard::permission("view driver").no_super_admin_bypass();
        let decision = guard
            .authorize(Some(&issued.token), &f.tokens, &f.checker)
            .await
            .unwrap();
        assert!(matches!(
            decision,
            Decision::Rejected(GuardRejection::Forbidden)
        ));
    }

    #[tokio::test]
    async fn any_and_all_combinators() {
        let f = fixture();
        let role_id = f.store.add_role("viewer", &["view driver"]);
        let mut user = user_with_role("viewer", None);
        user.role_id = Some(role_id);
        f.store.add_user(user.clone());
        let issued = f.tokens.issue(&user).unwrap();

        let any = Guard::any_of(["view driver", "edit driver"]);
        let decision = any
            .authorize(Some(&issued.token), &f.tokens, &f.checker)
            .await
            .unwrap();
        assert!(matches!(decision, Decision::Allowed(_)));

        let all = Guard::all_of(["view driver", "edit driver"]);
        let decision = all
            .authorize(Some(&issued.token), &f.tokens, &f.checker)
            .await
            .unwrap();
        match decision {
            Decision::Rejected(r) => assert_eq!(r.message(), "Insufficient permissions"),
            Decision::Allowed(_) => panic!("expected rejection"),
        }
    }
}
