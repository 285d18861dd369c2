//! User entity and role classification.

pub mod model;
pub mod role;

pub use model::{Role, User};
pub use role::RoleName;
