//! Vertex identities.
//!
//! A [`VertexId`] is a random 128-bit token drawn once per vertex. Identities
//! are never recycled, so a stale id fails lookups instead of aliasing a newer
//! vertex. Collisions are not checked for.

use core::fmt;
use core::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique, totally ordered identity of a vertex.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(Uuid);

impl VertexId {
    /// Draws a fresh identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Raw 128-bit value.
    pub fn as_u128(&self) -> u128 {
        self.0.as_u128()
    }
}

impl Default for VertexId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for VertexId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0.hyphenated())
    }
}

impl FromStr for VertexId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Tag identifying one backend instance.
///
/// Vertices and handles remember the tag of the backend that holds them,
/// which is how a handle detects that it is being used with the wrong
/// backend or after its vertex was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId(u64);

impl OwnerId {
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = VertexId::new();
        let b = VertexId::new();
        assert_ne!(a, b);
        assert_ne!(a.as_u128(), b.as_u128());
    }

    #[test]
    fn display_is_grouped_hex() {
        let id = VertexId::new();
        let s = id.to_string();
        assert_eq!(s.len(), 36);
        let groups: Vec<_> = s.split('-').map(str::len).collect();
        assert_eq!(groups, vec![8, 4, 4, 4, 12]);
        assert!(s.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
    }

    #[test]
    fn parses_back_from_display() {
        let id = VertexId::new();
        let parsed: VertexId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-an-id".parse::<VertexId>().is_err());
    }

    #[test]
    fn ordering_follows_raw_value() {
        let a = VertexId::from(Uuid::from_u128(1));
        let b = VertexId::from(Uuid::from_u128(2));
        assert!(a < b);
    }

    #[test]
    fn serde_is_transparent() {
        let id = VertexId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        let back: VertexId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn owner_ids_are_distinct() {
        assert_ne!(OwnerId::next(), OwnerId::next());
    }
}
