//! Visited-set bookkeeping for graph walks.
//!
//! Identities are sparse 128-bit values, so membership is a hash set rather
//! than a bitset indexed by position.

use std::collections::HashSet;

use crate::graph::VertexId;

/// Set of identities a walk has already claimed.
#[derive(Debug, Clone, Default)]
pub(crate) struct VisitedSet {
    seen: HashSet<VertexId>,
}

impl VisitedSet {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns `true` iff this call observed the node as not-yet-visited and marks it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, id: VertexId) -> bool {
        self.seen.insert(id)
    }

    #[inline]
    pub(crate) fn is_visited(&self, id: VertexId) -> bool {
        self.seen.contains(&id)
    }
}
