//! Sparse adjacency-list storage.
//!
//! Each vertex slot holds the vertex itself plus the sequence of edges leaving
//! it, in the order the edges were added. Edge existence is membership in that
//! sequence, so no filtering is needed while iterating neighbors.
//!
//! Parallel edges are kept: adding the same pair twice appends twice on both
//! sides and counts twice towards the degree. `remove_edge` drops every
//! parallel entry between the pair.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(1)\) amortized | Appends to the slot map |
//! | `add_edge` | \(O(1)\) amortized | Pushes onto both edge sequences |
//! | `remove_vertex` | \(O(V + \sum \deg)\) | Scans each neighbor's sequence, shifts the slot map |
//! | `remove_edge` | \(O(\deg a + \deg b)\) | Linear scan of both sequences |
//! | `degree` | \(O(1)\) | Sequence length |

use indexmap::IndexMap;

use super::backend::{check_edge, check_endpoints, Backend};
use super::cursor::{NeighborCursor, VertexCursor};
use super::identity::{OwnerId, VertexId};
use super::vertex::Vertex;
use crate::config::BackendKind;
use crate::error::{GraphError, Result};


pub(crate) type ListSlots<T> = IndexMap<VertexId, ListSlot<T>>;

#[derive(Debug)]
pub(crate) struct ListSlot<T> {
    pub(crate) vertex: Vertex<T>,
    pub(crate) edges: Vec<ListEdge>,
}

/// One direction of an undirected edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ListEdge {
    pub(crate) target: VertexId,
    pub(crate) weight: f64,
}

/// Adjacency-list graph storage.
#[derive(Debug)]
pub struct ListBackend<T> {
    owner: OwnerId,
    slots: ListSlots<T>,
}

impl<T> ListBackend<T> {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty backend with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            owner: OwnerId::next(),
            slots: IndexMap::with_capacity(capacity),
        }
    }

    /// Number of undirected edges, parallel edges counted separately.
    pub fn edge_count(&self) -> usize {
        self.slots.values().map(|slot| slot.edges.len()).sum::<usize>() / 2
    }

    fn slot(&self, id: VertexId) -> Result<&ListSlot<T>> {
        self.slots.get(&id).ok_or(GraphError::NotFound(id))
    }

    fn push_edge(&mut self, from: VertexId, to: VertexId, weight: f64) {
        if let Some(slot) = self.slots.get_mut(&from) {
            slot.edges.push(ListEdge { target: to, weight });
        }
    }

    fn drop_edges(&mut self, from: VertexId, to: VertexId) -> usize {
        match self.slots.get_mut(&from) {
            Some(slot) => {
                let before = slot.edges.len();
                slot.edges.retain(|edge| edge.target != to);
                before - slot.edges.len()
            }
            None => 0,
        }
    }
}

impl<T> Default for ListBackend<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Backend for ListBackend<T> {
    type Payload = T;

    fn owner(&self) -> OwnerId {
        self.owner
    }

    fn kind(&self) -> BackendKind {
        BackendKind::List
    }

    fn insert_vertex(&mut self, mut vertex: Vertex<T>) -> VertexId {
        vertex.attach(self.owner);
        let id = vertex.id();
        self.slots.insert(
            id,
            ListSlot {
                vertex,
                edges: Vec::new(),
            },
        );
        tracing::trace!(%id, "list: vertex added");
        id
    }

    fn add_edge(&mut self, a: VertexId, b: VertexId, weight: f64) -> Result<()> {
        check_edge(&*self, a, b, weight)?;
        self.push_edge(a, b, weight);
        self.push_edge(b, a, weight);
        tracing::trace!(%a, %b, weight, "list: edge added");
        Ok(())
    }

    fn remove_vertex(&mut self, id: VertexId) -> Result<Vertex<T>> {
        let slot = self.slots.shift_remove(&id).ok_or(GraphError::NotFound(id))?;

        let mut pruned = 0;
        for edge in &slot.edges {
            pruned += self.drop_edges(edge.target, id);
        }

        let mut vertex = slot.vertex;
        vertex.detach();
        tracing::debug!(%id, pruned, remaining = self.slots.len(), "list: vertex removed");
        Ok(vertex)
    }

    fn remove_edge(&mut self, a: VertexId, b: VertexId) -> Result<()> {
        check_endpoints(&*self, a, b)?;
        let dropped = self.drop_edges(a, b);
        self.drop_edges(b, a);
        tracing::trace!(%a, %b, dropped, "list: edge removed");
        Ok(())
    }

    fn get_vertex(&self, id: VertexId) -> Result<&Vertex<T>> {
        self.slot(id).map(|slot| &slot.vertex)
    }

    fn get_vertex_mut(&mut self, id: VertexId) -> Result<&mut Vertex<T>> {
        self.slots
            .get_mut(&id)
            .map(|slot| &mut slot.vertex)
            .ok_or(GraphError::NotFound(id))
    }

    fn contains(&self, id: VertexId) -> bool {
        self.slots.contains_key(&id)
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn degree(&self, id: VertexId) -> Result<usize> {
        self.slot(id).map(|slot| slot.edges.len())
    }

    fn edge_weight(&self, a: VertexId, b: VertexId) -> Result<Option<f64>> {
        check_endpoints(&*self, a, b)?;
        Ok(self
            .slot(a)?
            .edges
            .iter()
            .find(|edge| edge.target == b)
            .map(|edge| edge.weight))
    }

    fn clear(&mut self) {
        tracing::debug!(dropped = self.slots.len(), "list: cleared");
        self.slots.clear();
    }

    fn vertices(&self) -> VertexCursor<'_, T> {
        VertexCursor::list(&self.slots, 0)
    }

    fn vertices_end(&self) -> VertexCursor<'_, T> {
        VertexCursor::list(&self.slots, self.slots.len())
    }

    fn neighbors(&self, id: VertexId) -> Result<NeighborCursor<'_, T>> {
        let slot = self.slot(id)?;
        Ok(NeighborCursor::list(id, &self.slots, &slot.edges, 0))
    }

    fn neighbors_end(&self, id: VertexId) -> Result<NeighborCursor<'_, T>> {
        let slot = self.slot(id)?;
        Ok(NeighborCursor::list(id, &self.slots, &slot.edges, slot.edges.len()))
    }
}
