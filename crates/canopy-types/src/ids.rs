//! Type-safe identifier for planted trees.
//!
//! Countries are identified by their catalog name. Trees planted in the
//! garden get a [`TreeId`] instead, since one country may hold many trees.
//! IDs use UUID v7, so the creation time is embedded in the identifier and
//! ordering by ID is ordering by planting time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Unique identifier for a tree planted in the garden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TreeId(pub Uuid);

impl TreeId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Parse an identifier from its hyphenated string form.
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl Default for TreeId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for TreeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for TreeId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<TreeId> for Uuid {
    fn from(id: TreeId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = TreeId::new();
        let b = TreeId::new();
        assert_ne!(a, b);
        assert_ne!(a.into_inner(), Uuid::nil());
    }

    #[test]
    fn later_ids_sort_after_earlier_ones() {
        let first = TreeId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = TreeId::new();
        assert!(first < second);
    }

    #[test]
    fn parse_accepts_display_form() {
        let id = TreeId::new();
        assert_eq!(TreeId::parse(&id.to_string()), Some(id));
        assert_eq!(TreeId::parse("not-a-uuid"), None);
    }

    #[test]
    fn id_serializes_as_plain_uuid() {
        let id = TreeId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }
}
