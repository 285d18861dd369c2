//! Concrete repository implementations.

pub mod company;
pub mod role;
pub mod user;

pub use company::CompanyRepository;
pub use role::RoleRepository;
pub use user::UserRepository;
