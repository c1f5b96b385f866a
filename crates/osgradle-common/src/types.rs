//! Domain primitive types used across the osgradle workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::ID_SEPARATOR;

/// Identifier of a discovered component: its relative path segments
/// joined by `:`.
///
/// The same string names the generated Gradle subproject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Creates a component ID from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Builds an ID by joining relative path segments.
    #[must_use]
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Self {
        let mut id = String::new();
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                id.push(ID_SEPARATOR);
            }
            id.push_str(segment.as_ref());
        }
        Self(id)
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_segments_joins_with_colon() {
        let id = ComponentId::from_segments(&["plugins", "org.example.core"]);
        assert_eq!(id.as_str(), "plugins:org.example.core");
    }

    #[test]
    fn single_segment_has_no_separator() {
        assert_eq!(ComponentId::from_segments(&["core"]).to_string(), "core");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&ComponentId::new("a:b")).expect("serialize");
        assert_eq!(json, "\"a:b\"");
    }
}
