//! Dense adjacency-matrix storage.
//!
//! Every vertex owns a full row: one weight cell for every *other* live vertex.
//! Unconnected pairs hold the `NaN` sentinel, so any finite weight (zero
//! included) is a real edge. There is no diagonal cell.
//!
//! Rows are ordered maps keyed by identity, which fixes neighbor iteration to
//! identity order. Keeping rows complete is the dominant cost: every vertex
//! insertion touches every existing row, and so does every removal.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(V \log V)\) | Extends every row, builds a full row |
//! | `add_edge` | \(O(\log V)\) | Overwrites both cells; repeated adds replace the weight |
//! | `remove_vertex` | \(O(V \log V)\) | Drops the row and one column cell per row |
//! | `remove_edge` | \(O(\log V)\) | Resets both cells to the sentinel |
//! | `degree` | \(O(V)\) | Counts non-sentinel cells |

use std::collections::BTreeMap;

use indexmap::IndexMap;

use super::backend::{check_edge, check_endpoints, Backend};
use super::cursor::{NeighborCursor, VertexCursor};
use super::identity::{OwnerId, VertexId};
use super::vertex::Vertex;
use crate::config::BackendKind;
use crate::error::{GraphError, Result};

#[cfg(test)]
mod tests;

/// Cell value meaning "no edge between this pair".
pub const NO_EDGE: f64 = f64::NAN;

#[inline]
pub(crate) fn is_connected(weight: f64) -> bool {
    !weight.is_nan()
}

pub(crate) type MatrixSlots<T> = IndexMap<VertexId, MatrixSlot<T>>;

#[derive(Debug)]
pub(crate) struct MatrixSlot<T> {
    pub(crate) vertex: Vertex<T>,
    pub(crate) row: BTreeMap<VertexId, f64>,
}

/// Adjacency-matrix graph storage.
#[derive(Debug)]
pub struct MatrixBackend<T> {
    owner: OwnerId,
    slots: MatrixSlots<T>,
}

impl<T> MatrixBackend<T> {
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

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.slots
            .values()
            .map(|slot| slot.row.values().filter(|&&weight| is_connected(weight)).count())
            .sum::<usize>()
            / 2
    }

    /// Number of cells in the row of `id`, sentinels included.
    ///
    /// Always `len() - 1` for a live vertex.
    pub fn row_len(&self, id: VertexId) -> Result<usize> {
        self.slot(id).map(|slot| slot.row.len())
    }

    /// Raw cell between `a` and `b`: the weight, or [`NO_EDGE`].
    pub fn raw_weight(&self, a: VertexId, b: VertexId) -> Result<f64> {
        check_endpoints(self, a, b)?;
        Ok(self.slot(a)?.row.get(&b).copied().unwrap_or(NO_EDGE))
    }

    fn slot(&self, id: VertexId) -> Result<&MatrixSlot<T>> {
        self.slots.get(&id).ok_or(GraphError::NotFound(id))
    }

    fn set_cell(&mut self, from: VertexId, to: VertexId, weight: f64) {
        if let Some(cell) = self.slots.get_mut(&from).and_then(|slot| slot.row.get_mut(&to)) {
            *cell = weight;
        }
    }
}

impl<T> Default for MatrixBackend<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Backend for MatrixBackend<T> {
    type Payload = T;

    fn owner(&self) -> OwnerId {
        self.owner
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Matrix
    }

    fn insert_vertex(&mut self, mut vertex: Vertex<T>) -> VertexId {
        vertex.attach(self.owner);
        let id = vertex.id();

        let row: BTreeMap<VertexId, f64> = self.slots.keys().map(|&other| (other, NO_EDGE)).collect();
        for slot in self.slots.values_mut() {
            slot.row.insert(id, NO_EDGE);
        }
        self.slots.insert(id, MatrixSlot { vertex, row });

        tracing::trace!(%id, rows = self.slots.len(), "matrix: vertex added");
        id
    }

    fn add_edge(&mut self, a: VertexId, b: VertexId, weight: f64) -> Result<()> {
        check_edge(&*self, a, b, weight)?;
        self.set_cell(a, b, weight);
        self.set_cell(b, a, weight);
        tracing::trace!(%a, %b, weight, "matrix: edge set");
        Ok(())
    }

    fn remove_vertex(&mut self, id: VertexId) -> Result<Vertex<T>> {
        let slot = self.slots.shift_remove(&id).ok_or(GraphError::NotFound(id))?;

        let mut pruned = 0;
        for other in self.slots.values_mut() {
            if other.row.remove(&id).is_some_and(is_connected) {
                pruned += 1;
            }
        }

        let mut vertex = slot.vertex;
        vertex.detach();
        tracing::debug!(%id, pruned, remaining = self.slots.len(), "matrix: vertex removed");
        Ok(vertex)
    }

    fn remove_edge(&mut self, a: VertexId, b: VertexId) -> Result<()> {
        check_endpoints(&*self, a, b)?;
        self.set_cell(a, b, NO_EDGE);
        self.set_cell(b, a, NO_EDGE);
        tracing::trace!(%a, %b, "matrix: edge cleared");
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
        self.slot(id)
            .map(|slot| slot.row.values().filter(|&&weight| is_connected(weight)).count())
    }

    fn edge_weight(&self, a: VertexId, b: VertexId) -> Result<Option<f64>> {
        let weight = self.raw_weight(a, b)?;
        Ok(is_connected(weight).then_some(weight))
    }

    fn clear(&mut self) {
        tracing::debug!(dropped = self.slots.len(), "matrix: cleared");
        self.slots.clear();
    }

    fn vertices(&self) -> VertexCursor<'_, T> {
        VertexCursor::matrix(&self.slots, 0)
    }

    fn vertices_end(&self) -> VertexCursor<'_, T> {
        VertexCursor::matrix(&self.slots, self.slots.len())
    }

    fn neighbors(&self, id: VertexId) -> Result<NeighborCursor<'_, T>> {
        let slot = self.slot(id)?;
        Ok(NeighborCursor::matrix(id, &self.slots, &slot.row))
    }

    fn neighbors_end(&self, id: VertexId) -> Result<NeighborCursor<'_, T>> {
        let slot = self.slot(id)?;
        Ok(NeighborCursor::matrix_end(id, &self.slots, &slot.row))
    }
}
