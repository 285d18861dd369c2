//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header, verifies it, and injects the authenticated context.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;

use fleetgate_auth::context::AuthContext;
use fleetgate_core::error::AppError;

use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
///
/// Routes behind the permission guard middleware get the already-built
/// context from request extensions; plain authenticated routes verify the
/// token here directly.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthContext);

impl AuthUser {
    /// Returns the inner `AuthContext`.
    pub fn context(&self) -> &AuthContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = AuthContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Pull the token out of an `Authorization: Bearer ...` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(ctx) = parts.extensions.get::<AuthContext>() {
            return Ok(AuthUser(ctx.clone()));
        }

        let token = bearer_token(&parts.headers)
            .ok_or_else(|| AppError::authentication("Authentication required"))?;

        let claims = state
            .tokens
            .verify(token)
            .ok_or_else(|| AppError::authentication("Invalid token"))?;

        Ok(AuthUser(AuthContext::from(&claims)))
    }
}
