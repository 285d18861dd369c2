//! Per-route permission guard middleware.
//!
//! Wires [`fleetgate_auth::Guard`] into axum: the guard's decision is
//! computed before the handler runs, `Allowed` stashes the `AuthContext`
//! in request extensions for the `AuthUser` extractor, and either
//! rejection turns into its HTTP response without touching the handler.

use axum::Json;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use fleetgate_auth::guard::{Decision, Guard, GuardRejection};

use crate::error::ApiErrorResponse;
use crate::extractors::bearer_token;
use crate::state::AppState;

/// Run `guard` against the request; invoke `next` only when allowed.
pub async fn guard_request(
    guard: &Guard,
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let bearer = bearer_token(request.headers()).map(str::to_owned);

    match guard
        .authorize(bearer.as_deref(), &state.tokens, &state.access)
        .await
    {
        Ok(Decision::Allowed(ctx)) => {
            request.extensions_mut().insert(ctx);
            next.run(request).await
        }
        Ok(Decision::Rejected(rejection)) => rejection_response(&rejection),
        Err(err) => err.into_response(),
    }
}

fn rejection_response(rejection: &GuardRejection) -> Response {
    let status = match rejection {
        GuardRejection::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
        GuardRejection::Forbidden => StatusCode::FORBIDDEN,
    };
    (status, Json(ApiErrorResponse::new(rejection.message()))).into_response()
}
