//! Permission names, rows, and the wildcard pattern DSL.

pub mod model;
pub mod name;
pub mod pattern;

pub use model::Permission;
pub use name::PermissionName;
pub use pattern::PermissionPattern;
