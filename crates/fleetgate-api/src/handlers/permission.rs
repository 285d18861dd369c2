//! Permission inspection handlers for operators.

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;
use uuid::Uuid;

use fleetgate_core::result::AppResult;

use crate::state::AppState;

/// A user's resolved effective permission set.
#[derive(Debug, Serialize)]
pub struct UserPermissionsResponse {
    /// The inspected user.
    pub user_id: Uuid,
    /// Normalized permission names, sorted for stable output.
    pub permissions: Vec<String>,
}

/// `GET /api/users/{id}/permissions`
///
/// Resolves and returns a user's effective permission set. Guarded by
/// `view user`; admins bypass. Unknown users resolve to an empty set
/// rather than 404, mirroring the resolver's fail-closed contract.
pub async fn user_permissions(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<UserPermissionsResponse>> {
    let set = state.permissions.resolve(user_id).await?;
    let mut permissions: Vec<String> = set.into_iter().map(|p| p.as_str().to_string()).collect();
    permissions.sort();

    Ok(Json(UserPermissionsResponse {
        user_id,
        permissions,
    }))
}
