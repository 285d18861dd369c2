//! Authentication handlers: login, current-user, tenant scope.

use axum::Json;
use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleetgate_auth::tenant::{CompanyFilter, TenantScope};
use fleetgate_core::error::AppError;
use fleetgate_core::result::AppResult;
use fleetgate_entity::user::User;

use crate::extractors::AuthUser;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// User fields safe to echo back to the client.
#[derive(Debug, Serialize)]
pub struct UserView {
    /// User identifier.
    pub id: Uuid,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Free-text role name.
    pub role: String,
    /// Assigned company identifier, if any.
    pub company_id: Option<String>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role.clone(),
            company_id: user.company_id.clone(),
        }
    }
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// The signed session token.
    pub token: String,
    /// When the token expires (7 days, not renewable).
    pub expires_at: DateTime<Utc>,
    /// The logged-in user.
    pub user: UserView,
}

/// `POST /api/auth/login`
///
/// Credential failures are uniform: unknown email, wrong password, and
/// inactive account all return the same 401 so the endpoint does not
/// disclose which accounts exist.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let invalid = || AppError::authentication("Invalid credentials");

    let user = state
        .users
        .find_by_email(&body.email)
        .await?
        .ok_or_else(invalid)?;

    if !user.is_active {
        return Err(invalid());
    }

    if !state
        .password_hasher
        .verify_password(&body.password, &user.password_hash)
    {
        return Err(invalid());
    }

    let issued = state.tokens.issue(&user)?;
    tracing::info!(user_id = %user.id, "user logged in");

    Ok(Json(LoginResponse {
        token: issued.token,
        expires_at: issued.expires_at,
        user: UserView::from(&user),
    }))
}

/// Current-user response.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    /// User identifier.
    pub id: Uuid,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Free-text role name as carried in the token.
    pub role: String,
    /// Assigned company identifier, if any.
    pub company_id: Option<String>,
    /// Whether the caller bypasses permission checks.
    pub is_admin: bool,
}

/// `GET /api/auth/me`
pub async fn me(auth: AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        id: auth.user_id,
        email: auth.email.clone(),
        name: auth.name.clone(),
        role: auth.role_raw.clone(),
        company_id: auth.company_id.clone(),
        is_admin: auth.is_admin(),
    })
}

/// Tenant scope response for the dashboard's data queries.
#[derive(Debug, Serialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum ScopeResponse {
    /// Admins: no company filter at all.
    Unrestricted,
    /// Non-admin without a company assignment: nothing visible.
    Empty,
    /// Restricted to a set of company ids.
    Companies {
        /// Primary company id.
        company_id: String,
        /// Company display name, when known.
        company_name: Option<String>,
        /// All visible company ids (own plus direct subsidiaries).
        visible_company_ids: Vec<String>,
    },
}

/// `GET /api/auth/scope`
///
/// Tells the dashboard which companies the caller may see, so listing
/// pages can pre-filter before issuing queries.
pub async fn scope(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<ScopeResponse>> {
    let scope = state.tenant.get_scope(&auth).await?;

    let response = match scope {
        TenantScope::Unrestricted => ScopeResponse::Unrestricted,
        TenantScope::Empty => ScopeResponse::Empty,
        TenantScope::Company { id, name } => {
            let mut visible = match state.tenant.expand_hierarchical(&auth).await? {
                CompanyFilter::Unrestricted => Vec::new(),
                CompanyFilter::Ids(ids) => ids.into_iter().collect::<Vec<_>>(),
            };
            visible.sort();
            ScopeResponse::Companies {
                company_id: id,
                company_name: name,
                visible_company_ids: visible,
            }
        }
    };

    Ok(Json(response))
}
