//! Role name classification.
//!
//! The `users.role` column is legacy free text. Internally FleetGate works
//! with a closed set of well-known role names plus a `Custom` escape hatch,
//! so that admin detection and tenant scoping are exhaustive `match`es
//! rather than scattered string comparisons. Parsing never fails: unknown
//! strings become `Custom` and fall through to the deny-by-default paths.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Well-known role names in the fleet platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    /// Platform administrator.
    Admin,
    /// Super administrator; treated identically to `Admin` for bypass checks.
    SuperAdmin,
    /// A parent-company user: sees its own company's data only.
    Company,
    /// A subsidiary-owning company user: sees its own company plus direct
    /// child companies.
    Subsidiary,
    /// Any other role string, preserved verbatim.
    Custom(String),
}

impl RoleName {
    /// Classify a free-text role string.
    ///
    /// Matching is case-insensitive and whitespace-trimmed. The admin
    /// spellings accepted here define the super-admin bypass set and must
    /// not be extended without an authorization review.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "admin" => Self::Admin,
            "super admin" | "superadmin" | "super_user" | "superuser" => Self::SuperAdmin,
            "company" => Self::Company,
            "subsidiary" => Self::Subsidiary,
            _ => Self::Custom(raw.to_string()),
        }
    }

    /// Whether this role bypasses permission checks and tenant scoping.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }

    /// Canonical lowercase name (the original string for `Custom`).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::SuperAdmin => "super admin",
            Self::Company => "company",
            Self::Subsidiary => "subsidiary",
            Self::Custom(raw) => raw,
        }
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_spellings() {
        for raw in ["admin", "Admin", "Super Admin", "superadmin", "SUPER_USER", "superuser"] {
            assert!(RoleName::parse(raw).is_admin(), "{raw} should be admin-like");
        }
    }

    #[test]
    fn non_admin_roles() {
        assert_eq!(RoleName::parse("company"), RoleName::Company);
        assert_eq!(RoleName::parse("Subsidiary"), RoleName::Subsidiary);
        assert!(!RoleName::parse("company").is_admin());
        assert_eq!(
            RoleName::parse("dispatcher"),
            RoleName::Custom("dispatcher".to_string())
        );
    }
}
