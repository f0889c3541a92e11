//! Graph algorithms built on the public backend contract.
//!
//! Nothing here looks inside a representation: every routine drives
//! [`Backend::neighbors`] and [`NeighborCursor::next_weighted`], so the same
//! code serves the list store, the matrix store and the façade.
//!
//! [`NeighborCursor::next_weighted`]: crate::graph::NeighborCursor::next_weighted

use core::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use super::access::visited::VisitedSet;
use super::traversal::{Algorithm, Traversal, VisitPolicy};
use super::{Backend, VertexId};
use crate::error::{GraphError, Result};

/// Distances and predecessor links from one source vertex.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: VertexId,
    distance: HashMap<VertexId, f64>,
    previous: HashMap<VertexId, VertexId>,
}

impl ShortestPaths {
    /// Vertex the search started from.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Total weight of the lightest path to `target`, `None` if unreachable.
    pub fn distance_to(&self, target: VertexId) -> Option<f64> {
        self.distance.get(&target).copied()
    }

    /// Vertices from the source to `target` inclusive, `None` if unreachable.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.distance.contains_key(&target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(&previous) = self.previous.get(&current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }

    /// Reachable vertices with their distances, in no particular order.
    pub fn reachable(&self) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.distance.iter().map(|(&id, &distance)| (id, distance))
    }
}

/// Heap entry ordered so the `BinaryHeap` pops the lowest cost first.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    cost: f64,
    id: VertexId,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Single-source shortest paths (Dijkstra) over edge weights.
///
/// Parallel list edges are all relaxed, so the lightest one wins.
///
/// # Errors
/// [`GraphError::NotFound`] if `source` is absent;
/// [`GraphError::NegativeWeight`] on the first negative edge reached.
pub fn shortest_paths<B: Backend + ?Sized>(backend: &B, source: VertexId) -> Result<ShortestPaths> {
    if !backend.contains(source) {
        return Err(GraphError::NotFound(source));
    }

    let mut distance = HashMap::with_capacity(backend.len());
    let mut previous = HashMap::new();
    let mut heap = BinaryHeap::new();
    distance.insert(source, 0.0);
    heap.push(Candidate { cost: 0.0, id: source });

    while let Some(Candidate { cost, id }) = heap.pop() {
        if distance.get(&id).is_some_and(|&best| cost > best) {
            continue;
        }
        let mut cursor = backend.neighbors(id)?;
        while let Some((neighbor, weight)) = cursor.next_weighted() {
            if weight < 0.0 {
                return Err(GraphError::NegativeWeight {
                    from: id,
                    to: neighbor.id(),
                    weight,
                });
            }
            let next = cost + weight;
            let to = neighbor.id();
            if distance.get(&to).map_or(true, |&best| next < best) {
                distance.insert(to, next);
                previous.insert(to, id);
                heap.push(Candidate { cost: next, id: to });
            }
        }
    }

    tracing::debug!(%source, reachable = distance.len(), "shortest_paths");
    Ok(ShortestPaths {
        source,
        distance,
        previous,
    })
}

/// Splits the graph into connected components.
///
/// Components are listed in the enumeration order of their first vertex;
/// members appear in breadth-first order from that vertex.
pub fn connected_components<B: Backend + ?Sized>(backend: &B) -> Vec<Vec<VertexId>> {
    let mut seen = VisitedSet::with_capacity(backend.len());
    let mut components = Vec::new();

    for root in backend.ids() {
        if seen.is_visited(root) {
            continue;
        }
        let Ok(mut walk) = Traversal::new(backend, root, Algorithm::Bfs, VisitPolicy::Related) else {
            continue;
        };
        let mut component = Vec::new();
        while let Some(member) = walk.next(backend) {
            seen.try_visit(member);
            component.push(member);
        }
        components.push(component);
    }

    components
}
