//! Route table construction.

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use fleetgate_auth::guard::Guard;

use crate::handlers::{auth, health, permission};
use crate::middleware::guard_request;
use crate::state::AppState;

/// Build the full application router.
pub fn build_router(state: AppState) -> Router {
    let view_user = Guard::permission("view user");
    let guarded = Router::new()
        .route(
            "/api/users/{id}/permissions",
            get(permission::user_permissions),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            move |state: State<AppState>, request: Request, next: Next| {
                let guard = view_user.clone();
                async move { guard_request(&guard, state, request, next).await }
            },
        ));

    Router::new()
        .route("/health", get(health::health))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/scope", get(auth::scope))
        .merge(guarded)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
