//! Role-based access control: permission resolution and membership checks.

pub mod checker;
pub mod resolver;

pub use checker::AccessChecker;
pub use resolver::PermissionResolver;
