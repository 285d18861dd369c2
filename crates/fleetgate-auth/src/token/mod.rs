//! Stateless signed session tokens.

pub mod claims;
pub mod service;

pub use claims::SessionClaims;
pub use service::{IssuedToken, TokenService};
