//! # fleetgate-api
//!
//! HTTP surface for FleetGate: the application state, the `AppError` to
//! HTTP mapping, the bearer-token extractor, the per-route permission
//! guard middleware, and the auth/health handlers.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use state::AppState;
