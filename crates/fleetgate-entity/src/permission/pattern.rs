//! The restricted wildcard permission pattern DSL.
//!
//! This is deliberately *not* a general glob language:
//!
//! - the pattern `"*"` alone matches any permission;
//! - otherwise both sides are split on single spaces and match only when
//!   they have the same number of segments, each pattern segment being
//!   either `*` or case-insensitively equal to the permission segment.
//!
//! A segment-count mismatch is always a non-match, even when a prefix
//! matches: `"view *"` does not match `"view driver extra"`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::name::PermissionName;

/// A parsed wildcard permission pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionPattern(String);

impl PermissionPattern {
    /// Normalize a raw pattern string.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// The canonical pattern string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Test a permission against this pattern.
    pub fn matches(&self, permission: &PermissionName) -> bool {
        if self.0 == "*" {
            return true;
        }

        let perm_segments: Vec<&str> = permission.segments().collect();
        let pattern_segments: Vec<&str> = self.0.split(' ').collect();

        if perm_segments.len() != pattern_segments.len() {
            return false;
        }

        pattern_segments
            .iter()
            .zip(perm_segments.iter())
            .all(|(pat, seg)| *pat == "*" || pat == seg)
    }
}

impl fmt::Display for PermissionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PermissionPattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
