//! Backend-agnostic cursors.
//!
//! Two cursor families hide the container shape of each representation:
//! - [`VertexCursor`] walks every vertex in enumeration order
//! - [`NeighborCursor`] walks the connected neighbors of one vertex
//!
//! Each cursor is a closed set of states, one per representation. The list
//! neighbor state walks the edge sequence directly; the matrix neighbor state
//! walks a dense row and skips the "no edge" sentinel inside `advance`.
//! Both families also implement [`Iterator`].

use core::ops::Bound;
use core::ptr;
use std::collections::BTreeMap;

use super::identity::VertexId;
use super::list::{ListEdge, ListSlots};
use super::matrix::{is_connected, MatrixSlots};
use super::vertex::Vertex;

/// Cursor over the whole vertex set.
pub struct VertexCursor<'a, T> {
    state: VertexState<'a, T>,
}

enum VertexState<'a, T> {
    List { slots: &'a ListSlots<T>, pos: usize },
    Matrix { slots: &'a MatrixSlots<T>, pos: usize },
}

impl<'a, T> VertexCursor<'a, T> {
    pub(crate) fn list(slots: &'a ListSlots<T>, pos: usize) -> Self {
        Self {
            state: VertexState::List { slots, pos },
        }
    }

    pub(crate) fn matrix(slots: &'a MatrixSlots<T>, pos: usize) -> Self {
        Self {
            state: VertexState::Matrix { slots, pos },
        }
    }

    fn position(&self) -> (usize, usize) {
        match self.state {
            VertexState::List { slots, pos } => (pos.min(slots.len()), slots.len()),
            VertexState::Matrix { slots, pos } => (pos.min(slots.len()), slots.len()),
        }
    }

    /// Vertex under the cursor, `None` once exhausted.
    pub fn get(&self) -> Option<&'a Vertex<T>> {
        match self.state {
            VertexState::List { slots, pos } => slots.get_index(pos).map(|(_, slot)| &slot.vertex),
            VertexState::Matrix { slots, pos } => slots.get_index(pos).map(|(_, slot)| &slot.vertex),
        }
    }

    /// Identity under the cursor.
    pub fn id(&self) -> Option<VertexId> {
        self.get().map(Vertex::id)
    }

    /// Steps to the next vertex. Does nothing once exhausted.
    pub fn advance(&mut self) {
        match &mut self.state {
            VertexState::List { slots, pos } => {
                if *pos < slots.len() {
                    *pos += 1;
                }
            }
            VertexState::Matrix { slots, pos } => {
                if *pos < slots.len() {
                    *pos += 1;
                }
            }
        }
    }

    /// Returns `true` once the cursor is past the last vertex.
    pub fn is_end(&self) -> bool {
        let (pos, len) = self.position();
        pos >= len
    }
}

impl<T> Clone for VertexCursor<'_, T> {
    fn clone(&self) -> Self {
        let state = match self.state {
            VertexState::List { slots, pos } => VertexState::List { slots, pos },
            VertexState::Matrix { slots, pos } => VertexState::Matrix { slots, pos },
        };
        Self { state }
    }
}

impl<T> PartialEq for VertexCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        let same_container = match (&self.state, &other.state) {
            (VertexState::List { slots: a, .. }, VertexState::List { slots: b, .. }) => ptr::eq(*a, *b),
            (VertexState::Matrix { slots: a, .. }, VertexState::Matrix { slots: b, .. }) => {
                ptr::eq(*a, *b)
            }
            _ => false,
        };
        same_container && self.position().0 == other.position().0
    }
}

impl<'a, T> Iterator for VertexCursor<'a, T> {
    type Item = &'a Vertex<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.get()?;
        self.advance();
        Some(vertex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (pos, len) = self.position();
        (len - pos, Some(len - pos))
    }
}

impl<T> ExactSizeIterator for VertexCursor<'_, T> {}

/// Cursor over the connected neighbors of one vertex.
pub struct NeighborCursor<'a, T> {
    of: VertexId,
    state: NeighborState<'a, T>,
}

enum NeighborState<'a, T> {
    List {
        slots: &'a ListSlots<T>,
        edges: &'a [ListEdge],
        pos: usize,
    },
    Matrix {
        slots: &'a MatrixSlots<T>,
        row: &'a BTreeMap<VertexId, f64>,
        current: Option<(VertexId, f64)>,
    },
}

impl<'a, T> NeighborCursor<'a, T> {
    pub(crate) fn list(of: VertexId, slots: &'a ListSlots<T>, edges: &'a [ListEdge], pos: usize) -> Self {
        Self {
            of,
            state: NeighborState::List { slots, edges, pos },
        }
    }

    pub(crate) fn matrix(of: VertexId, slots: &'a MatrixSlots<T>, row: &'a BTreeMap<VertexId, f64>) -> Self {
        let current = row
            .iter()
            .find(|&(_, &weight)| is_connected(weight))
            .map(|(&id, &weight)| (id, weight));
        Self {
            of,
            state: NeighborState::Matrix { slots, row, current },
        }
    }

    pub(crate) fn matrix_end(of: VertexId, slots: &'a MatrixSlots<T>, row: &'a BTreeMap<VertexId, f64>) -> Self {
        Self {
            of,
            state: NeighborState::Matrix {
                slots,
                row,
                current: None,
            },
        }
    }

    /// Vertex whose neighbors this cursor walks.
    pub fn source(&self) -> VertexId {
        self.of
    }

    /// Identity of the neighbor under the cursor.
    pub fn id(&self) -> Option<VertexId> {
        match self.state {
            NeighborState::List { edges, pos, .. } => edges.get(pos).map(|edge| edge.target),
            NeighborState::Matrix { current, .. } => current.map(|(id, _)| id),
        }
    }

    /// Weight of the edge to the neighbor under the cursor.
    pub fn weight(&self) -> Option<f64> {
        match self.state {
            NeighborState::List { edges, pos, .. } => edges.get(pos).map(|edge| edge.weight),
            NeighborState::Matrix { current, .. } => current.map(|(_, weight)| weight),
        }
    }

    /// Neighbor under the cursor, `None` once exhausted.
    pub fn get(&self) -> Option<&'a Vertex<T>> {
        let id = self.id()?;
        match self.state {
            NeighborState::List { slots, .. } => slots.get(&id).map(|slot| &slot.vertex),
            NeighborState::Matrix { slots, .. } => slots.get(&id).map(|slot| &slot.vertex),
        }
    }

    /// Steps to the next connected neighbor. Does nothing once exhausted.
    pub fn advance(&mut self) {
        match &mut self.state {
            NeighborState::List { edges, pos, .. } => {
                if *pos < edges.len() {
                    *pos += 1;
                }
            }
            NeighborState::Matrix { row, current, .. } => {
                if let Some((id, _)) = *current {
                    *current = row
                        .range((Bound::Excluded(&id), Bound::Unbounded))
                        .find(|&(_, &weight)| is_connected(weight))
                        .map(|(&next, &weight)| (next, weight));
                }
            }
        }
    }

    /// Returns `true` once the cursor is past the last neighbor.
    pub fn is_end(&self) -> bool {
        match self.state {
            NeighborState::List { edges, pos, .. } => pos >= edges.len(),
            NeighborState::Matrix { current, .. } => current.is_none(),
        }
    }

    /// Like [`Iterator::next`], also yielding the edge weight.
    pub fn next_weighted(&mut self) -> Option<(&'a Vertex<T>, f64)> {
        let vertex = self.get()?;
        let weight = self.weight()?;
        self.advance();
        Some((vertex, weight))
    }

    fn list_position(&self) -> Option<usize> {
        match self.state {
            NeighborState::List { edges, pos, .. } => Some(pos.min(edges.len())),
            NeighborState::Matrix { .. } => None,
        }
    }
}

impl<T> Clone for NeighborCursor<'_, T> {
    fn clone(&self) -> Self {
        let state = match self.state {
            NeighborState::List { slots, edges, pos } => NeighborState::List { slots, edges, pos },
            NeighborState::Matrix { slots, row, current } => NeighborState::Matrix { slots, row, current },
        };
        Self { of: self.of, state }
    }
}

impl<T> PartialEq for NeighborCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        if self.of != other.of {
            return false;
        }
        match (&self.state, &other.state) {
            (NeighborState::List { slots: a, .. }, NeighborState::List { slots: b, .. }) => {
                ptr::eq(*a, *b) && self.list_position() == other.list_position()
            }
            (NeighborState::Matrix { slots: a, .. }, NeighborState::Matrix { slots: b, .. }) => {
                ptr::eq(*a, *b) && self.id() == other.id()
            }
            _ => false,
        }
    }
}

impl<'a, T> Iterator for NeighborCursor<'a, T> {
    type Item = &'a Vertex<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.get()?;
        self.advance();
        Some(vertex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            NeighborState::List { edges, pos, .. } => {
                let left = edges.len().saturating_sub(pos);
                (left, Some(left))
            }
            NeighborState::Matrix { row, current, .. } => (0, current.map(|_| row.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{Backend, ListBackend, MatrixBackend};

    fn star<B: Backend<Payload = u32>>(backend: &mut B) -> Vec<crate::graph::VertexId> {
        let ids: Vec<_> = (0..4).map(|i| backend.add_vertex(i)).collect();
        let mut weight = 0.0;
        for &leaf in &ids[1..] {
            weight += 1.5;
            backend.add_edge(ids[0], leaf, weight).unwrap();
        }
        ids
    }

    fn walk_by_cursor<B: Backend<Payload = u32>>(backend: &B) {
        let ids = backend.ids();
        let mut cursor = backend.vertices();
        let end = backend.vertices_end();
        let mut seen = Vec::new();
        while cursor != end {
            seen.push(cursor.id().unwrap());
            cursor.advance();
        }
        assert_eq!(seen, ids);
        assert!(cursor.is_end());
        assert!(cursor.get().is_none());

        // Advancing past the end stays at the end.
        cursor.advance();
        assert!(cursor == end);
    }

    #[test]
    fn vertex_cursor_contract_list() {
        let mut list = ListBackend::new();
        star(&mut list);
        walk_by_cursor(&list);
    }

    #[test]
    fn vertex_cursor_contract_matrix() {
        let mut matrix = MatrixBackend::new();
        star(&mut matrix);
        walk_by_cursor(&matrix);
    }

    fn neighbor_walk<B: Backend<Payload = u32>>(backend: &B, hub: crate::graph::VertexId) -> usize {
        let mut cursor = backend.neighbors(hub).unwrap();
        let end = backend.neighbors_end(hub).unwrap();
        let mut count = 0;
        while cursor != end {
            let vertex = cursor.get().unwrap();
            assert_eq!(Some(vertex.id()), cursor.id());
            assert_eq!(backend.edge_weight(hub, vertex.id()).unwrap(), cursor.weight());
            count += 1;
            cursor.advance();
        }
        assert!(cursor.is_end());
        count
    }

    #[test]
    fn neighbor_cursor_contract_both_backends() {
        let mut list = ListBackend::new();
        let ids = star(&mut list);
        assert_eq!(neighbor_walk(&list, ids[0]), 3);
        assert_eq!(neighbor_walk(&list, ids[1]), 1);

        let mut matrix = MatrixBackend::new();
        let ids = star(&mut matrix);
        assert_eq!(neighbor_walk(&matrix, ids[0]), 3);
        assert_eq!(neighbor_walk(&matrix, ids[2]), 1);
    }

    #[test]
    fn matrix_neighbor_cursor_skips_sentinels() {
        let mut matrix = MatrixBackend::new();
        let ids: Vec<_> = (0..6u32).map(|i| matrix.add_vertex(i)).collect();
        matrix.add_edge(ids[0], ids[5], 1.0).unwrap();
        matrix.add_edge(ids[0], ids[3], 0.0).unwrap();

        let found: Vec<_> = matrix.neighbors(ids[0]).unwrap().map(|v| v.id()).collect();
        let mut expected = vec![ids[3], ids[5]];
        expected.sort();
        // Matrix rows are walked in identity order.
        assert_eq!(found, expected);

        let isolated = matrix.neighbors(ids[1]).unwrap();
        assert!(isolated.is_end());
        assert!(isolated == matrix.neighbors_end(ids[1]).unwrap());
    }

    #[test]
    fn cursors_of_different_vertices_differ() {
        let mut list = ListBackend::new();
        let a = list.add_vertex(1u32);
        let b = list.add_vertex(2u32);
        assert!(list.neighbors_end(a).unwrap() != list.neighbors_end(b).unwrap());
        assert!(list.neighbors(a).unwrap() == list.neighbors_end(a).unwrap());
    }

    #[test]
    fn next_weighted_yields_pairs() {
        let mut list = ListBackend::new();
        let a = list.add_vertex(1u32);
        let b = list.add_vertex(2u32);
        list.add_edge(a, b, 4.5).unwrap();
        let mut cursor = list.neighbors(a).unwrap();
        let (vertex, weight) = cursor.next_weighted().unwrap();
        assert_eq!(vertex.id(), b);
        assert_eq!(weight, 4.5);
        assert!(cursor.next_weighted().is_none());
    }

    #[test]
    fn cloned_cursor_is_independent() {
        let mut list = ListBackend::new();
        star(&mut list);
        let mut first = list.vertices();
        let second = first.clone();
        first.advance();
        assert!(first != second);
        assert_eq!(second.count(), 4);
        assert_eq!(first.len(), 3);
    }
}
