//! The storage contract shared by every graph representation.
//!
//! Callers, the traversal engine and the extension algorithms only ever talk
//! to a representation through this trait and the cursors it hands out.

use super::cursor::{NeighborCursor, VertexCursor};
use super::identity::{OwnerId, VertexId};
use super::vertex::Vertex;
use crate::config::BackendKind;
use crate::error::{GraphError, Result};

/// Undirected, optionally weighted graph storage.
///
/// Edges are symmetric: `add_edge(a, b, w)` makes `b` a neighbor of `a` and
/// `a` a neighbor of `b`, both with weight `w`, before it returns.
///
/// ### Operation costs
/// | Operation | List | Matrix |
/// |-----------|------|--------|
/// | `add_vertex` | \(O(1)\) amortized | \(O(V \log V)\) |
/// | `add_edge` | \(O(1)\) amortized | \(O(\log V)\) |
/// | `remove_vertex` | \(O(V + \sum \text{degree})\) | \(O(V \log V)\) |
/// | `remove_edge` | \(O(\text{degree})\) | \(O(\log V)\) |
/// | `degree` | \(O(1)\) | \(O(V)\) |
pub trait Backend {
    /// Payload stored in each vertex.
    type Payload;

    /// Tag stamped on every vertex this backend holds.
    fn owner(&self) -> OwnerId;

    /// Which representation this is.
    fn kind(&self) -> BackendKind;

    /// Inserts a pre-built vertex and returns its identity.
    fn insert_vertex(&mut self, vertex: Vertex<Self::Payload>) -> VertexId;

    /// Wraps `payload` in a fresh vertex and inserts it.
    fn add_vertex(&mut self, payload: Self::Payload) -> VertexId {
        self.insert_vertex(Vertex::new(payload))
    }

    /// Connects `a` and `b` with `weight`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if either endpoint is absent,
    /// [`GraphError::SelfLoop`] if `a == b`, [`GraphError::InvalidWeight`] if
    /// `weight` is NaN. Nothing is written on failure.
    fn add_edge(&mut self, a: VertexId, b: VertexId, weight: f64) -> Result<()>;

    /// Connects `a` and `b` with the neutral weight `0`.
    fn add_unweighted_edge(&mut self, a: VertexId, b: VertexId) -> Result<()> {
        self.add_edge(a, b, 0.0)
    }

    /// Removes `id` and every adjacency reference to it, returning the vertex
    /// detached from this backend.
    fn remove_vertex(&mut self, id: VertexId) -> Result<Vertex<Self::Payload>>;

    /// Removes the edge between `a` and `b` on both sides. Removing an edge
    /// that does not exist is not an error.
    fn remove_edge(&mut self, a: VertexId, b: VertexId) -> Result<()>;

    /// Removes every vertex matching `predicate`, returning how many went.
    ///
    /// The predicate sees each vertex present when the call starts exactly
    /// once; removals happen only after all vertices were evaluated.
    fn remove_if<F>(&mut self, mut predicate: F) -> Result<usize>
    where
        F: FnMut(&Vertex<Self::Payload>) -> bool,
    {
        let doomed: Vec<VertexId> = self
            .vertices()
            .filter(|vertex| predicate(*vertex))
            .map(Vertex::id)
            .collect();
        for &id in &doomed {
            self.remove_vertex(id)?;
        }
        tracing::debug!(removed = doomed.len(), remaining = self.len(), "remove_if");
        Ok(doomed.len())
    }

    /// Vertex stored under `id`.
    fn get_vertex(&self, id: VertexId) -> Result<&Vertex<Self::Payload>>;

    /// Mutable access to the vertex stored under `id`.
    fn get_vertex_mut(&mut self, id: VertexId) -> Result<&mut Vertex<Self::Payload>>;

    /// Returns `true` if `id` is live in this backend.
    fn contains(&self, id: VertexId) -> bool;

    /// Number of live vertices.
    fn len(&self) -> usize;

    /// Returns `true` if the backend holds no vertices.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of connected neighbors of `id` (parallel list edges count
    /// separately).
    fn degree(&self, id: VertexId) -> Result<usize>;

    /// Weight of the edge between `a` and `b`, or `None` when unconnected.
    fn edge_weight(&self, a: VertexId, b: VertexId) -> Result<Option<f64>>;

    /// Drops every vertex and edge.
    fn clear(&mut self);

    /// Cursor at the first vertex in enumeration order.
    ///
    /// Enumeration is vertex insertion order on both backends. Neighbor
    /// cursors differ: list neighbors follow edge insertion order, matrix
    /// neighbors follow identity order.
    fn vertices(&self) -> VertexCursor<'_, Self::Payload>;

    /// Exhausted vertex cursor.
    fn vertices_end(&self) -> VertexCursor<'_, Self::Payload>;

    /// Cursor at the first connected neighbor of `id`.
    fn neighbors(&self, id: VertexId) -> Result<NeighborCursor<'_, Self::Payload>>;

    /// Exhausted neighbor cursor of `id`.
    fn neighbors_end(&self, id: VertexId) -> Result<NeighborCursor<'_, Self::Payload>>;

    /// Identities in enumeration order.
    fn ids(&self) -> Vec<VertexId> {
        self.vertices().map(Vertex::id).collect()
    }

    /// Identity enumerated first, if any.
    fn first_id(&self) -> Option<VertexId> {
        self.vertices().id()
    }
}

/// Shared edge validation: endpoints exist, are distinct, weight is not NaN.
pub(crate) fn check_edge<B: Backend + ?Sized>(
    backend: &B,
    a: VertexId,
    b: VertexId,
    weight: f64,
) -> Result<()> {
    check_endpoints(backend, a, b)?;
    if a == b {
        return Err(GraphError::SelfLoop(a));
    }
    if weight.is_nan() {
        return Err(GraphError::InvalidWeight {
            from: a,
            to: b,
            weight,
        });
    }
    Ok(())
}

pub(crate) fn check_endpoints<B: Backend + ?Sized>(backend: &B, a: VertexId, b: VertexId) -> Result<()> {
    for id in [a, b] {
        if !backend.contains(id) {
            return Err(GraphError::NotFound(id));
        }
    }
    Ok(())
}
