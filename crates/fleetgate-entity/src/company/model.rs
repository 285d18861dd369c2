//! Company entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A company (tenant) in the fleet platform.
///
/// Companies form a forest with exactly one parent level: a subsidiary's
/// `parent_company_id` points at its owning company and nothing nests
/// deeper. Identifiers are the legacy "spcode" strings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    /// Company identifier (spcode).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Owning company, when this company is a subsidiary.
    pub parent_company_id: Option<String>,
}
