//! Maps domain `AppError` to HTTP responses.
//!
//! 401 for identity problems, 403 for authorization problems, and a
//! generic categorized 500 for infrastructure problems. Responses carry
//! `{"error": message}` only; raw driver detail and stack traces stay in
//! the logs.
//!
//! The `IntoResponse for AppError` impl itself lives in `fleetgate-core`
//! next to `AppError` (the orphan rule requires it to be in the crate
//! that defines the type); this module re-exports the response body.

pub use fleetgate_core::error::ApiErrorResponse;
