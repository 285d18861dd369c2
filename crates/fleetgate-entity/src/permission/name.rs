//! Normalized permission names.
//!
//! Permissions are stored and compared as lowercase, whitespace-trimmed
//! strings of space-separated segments, conventionally `"action resource"`
//! (e.g. `"view driver"`, `"edit vehicle"`). All membership checks go
//! through [`PermissionName`] so that normalization cannot be forgotten at
//! a call site.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A permission name in canonical form: lowercase and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionName(String);

impl PermissionName {
    /// Normalize a raw permission string.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Build the canonical `"action resource"` projection.
    pub fn from_parts(action: &str, resource: &str) -> Self {
        Self::new(&format!("{action} {resource}"))
    }

    /// The canonical string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Single-space-separated segments of the name.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ')
    }

    /// First segment, conventionally the action verb.
    pub fn action(&self) -> &str {
        self.segments().next().unwrap_or("")
    }

    /// Everything after the action, conventionally the resource.
    pub fn resource(&self) -> Option<&str> {
        self.0.split_once(' ').map(|(_, rest)| rest)
    }
}

impl fmt::Display for PermissionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PermissionName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(PermissionName::new("  View Driver "), PermissionName::new("view driver"));
    }

    #[test]
    fn action_resource_projection() {
        let p = PermissionName::from_parts("Edit", "Vehicle");
        assert_eq!(p.as_str(), "edit vehicle");
        assert_eq!(p.action(), "edit");
        assert_eq!(p.resource(), Some("vehicle"));
    }

    #[test]
    fn single_segment_has_no_resource() {
        let p = PermissionName::new("export");
        assert_eq!(p.action(), "export");
        assert_eq!(p.resource(), None);
    }
}
