//! The user-facing graph type.
//!
//! [`Graph`] owns exactly one storage backend, picked when the graph is
//! built, and forwards every [`Backend`] operation to it. Because it is itself
//! a [`Backend`], cursors, traversal and the extension algorithms accept it
//! directly.

use core::fmt;

use super::algorithms::{connected_components, shortest_paths, ShortestPaths};
use super::backend::Backend;
use super::cursor::{NeighborCursor, VertexCursor};
use super::identity::{OwnerId, VertexId};
use super::list::ListBackend;
use super::matrix::MatrixBackend;
use super::traversal::{self, Algorithm, VisitPolicy};
use super::vertex::Vertex;
use crate::config::{BackendKind, GraphConfig};
use crate::error::Result;
use crate::format::{GraphDisplay, VertexFormat};

#[derive(Debug)]
enum Storage<T> {
    List(ListBackend<T>),
    Matrix(MatrixBackend<T>),
}

/// Forwards a call to whichever backend is active.
macro_rules! dispatch {
    ($storage:expr, $backend:ident => $call:expr) => {
        match $storage {
            Storage::List($backend) => $call,
            Storage::Matrix($backend) => $call,
        }
    };
}

/// Undirected, optionally weighted graph over payloads of type `T`.
///
/// ```
/// use duograph::{Algorithm, Backend, Graph, VisitPolicy};
///
/// let mut graph = Graph::matrix();
/// let a = graph.add_vertex("a");
/// let b = graph.add_vertex("b");
/// graph.add_edge(a, b, 2.5).unwrap();
///
/// assert_eq!(graph.degree(a).unwrap(), 1);
/// assert_eq!(graph.visit_order(Some(b), Algorithm::Dfs, VisitPolicy::Related).unwrap(), vec![b, a]);
/// ```
#[derive(Debug)]
pub struct Graph<T> {
    storage: Storage<T>,
}

impl<T> Graph<T> {
    /// Creates an empty graph on the chosen backend.
    pub fn new(kind: BackendKind) -> Self {
        Self::with_config(GraphConfig::new(kind))
    }

    /// Graph backed by adjacency lists.
    pub fn list() -> Self {
        Self::new(BackendKind::List)
    }

    /// Graph backed by an adjacency matrix.
    pub fn matrix() -> Self {
        Self::new(BackendKind::Matrix)
    }

    /// Creates an empty graph from a full configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        let storage = match config.backend {
            BackendKind::List => Storage::List(ListBackend::with_capacity(config.capacity)),
            BackendKind::Matrix => Storage::Matrix(MatrixBackend::with_capacity(config.capacity)),
        };
        tracing::debug!(backend = %config.backend, capacity = config.capacity, "graph created");
        Self { storage }
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        dispatch!(&self.storage, backend => backend.edge_count())
    }

    /// The list backend, if that is the active representation.
    pub fn as_list(&self) -> Option<&ListBackend<T>> {
        match &self.storage {
            Storage::List(list) => Some(list),
            Storage::Matrix(_) => None,
        }
    }

    /// The matrix backend, if that is the active representation.
    pub fn as_matrix(&self) -> Option<&MatrixBackend<T>> {
        match &self.storage {
            Storage::Matrix(matrix) => Some(matrix),
            Storage::List(_) => None,
        }
    }

    /// Visits vertices from `start` (or the first vertex), handing each to
    /// `visit`. Returns how many were visited.
    ///
    /// # Errors
    /// See [`traverse`](crate::graph::traverse).
    pub fn traverse<F>(
        &mut self,
        start: Option<VertexId>,
        algorithm: Algorithm,
        policy: VisitPolicy,
        visit: F,
    ) -> Result<usize>
    where
        F: FnMut(&mut Vertex<T>),
    {
        traversal::traverse(self, start, algorithm, policy, visit)
    }

    /// Like [`Graph::traverse`], but `visit` may change the graph structure.
    ///
    /// # Errors
    /// See [`traverse_with`](crate::graph::traverse_with).
    pub fn traverse_with<F>(
        &mut self,
        start: Option<VertexId>,
        algorithm: Algorithm,
        policy: VisitPolicy,
        visit: F,
    ) -> Result<usize>
    where
        F: FnMut(&mut Self, VertexId) -> Result<()>,
    {
        traversal::traverse_with(self, start, algorithm, policy, visit)
    }

    /// Identities in visit order, without a callback.
    ///
    /// # Errors
    /// See [`Traversal::new`](crate::graph::Traversal::new).
    pub fn visit_order(
        &self,
        start: Option<VertexId>,
        algorithm: Algorithm,
        policy: VisitPolicy,
    ) -> Result<Vec<VertexId>> {
        traversal::visit_order(self, start, algorithm, policy)
    }

    /// Lightest paths from `source`.
    ///
    /// # Errors
    /// See [`shortest_paths`](crate::graph::algorithms::shortest_paths).
    pub fn shortest_paths(&self, source: VertexId) -> Result<ShortestPaths> {
        shortest_paths(self, source)
    }

    /// Connected components of the graph.
    pub fn connected_components(&self) -> Vec<Vec<VertexId>> {
        connected_components(self)
    }

    /// One line per vertex in enumeration order.
    pub fn display(&self, format: VertexFormat) -> GraphDisplay<'_, Self> {
        GraphDisplay::new(self, format)
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::with_config(GraphConfig::default())
    }
}

impl<T: fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(VertexFormat::Shortest), f)
    }
}

impl<T> Backend for Graph<T> {
    type Payload = T;

    fn owner(&self) -> OwnerId {
        dispatch!(&self.storage, backend => backend.owner())
    }

    fn kind(&self) -> BackendKind {
        dispatch!(&self.storage, backend => backend.kind())
    }

    fn insert_vertex(&mut self, vertex: Vertex<T>) -> VertexId {
        dispatch!(&mut self.storage, backend => backend.insert_vertex(vertex))
    }

    fn add_edge(&mut self, a: VertexId, b: VertexId, weight: f64) -> Result<()> {
        dispatch!(&mut self.storage, backend => backend.add_edge(a, b, weight))
    }

    fn remove_vertex(&mut self, id: VertexId) -> Result<Vertex<T>> {
        dispatch!(&mut self.storage, backend => backend.remove_vertex(id))
    }

    fn remove_edge(&mut self, a: VertexId, b: VertexId) -> Result<()> {
        dispatch!(&mut self.storage, backend => backend.remove_edge(a, b))
    }

    fn get_vertex(&self, id: VertexId) -> Result<&Vertex<T>> {
        dispatch!(&self.storage, backend => backend.get_vertex(id))
    }

    fn get_vertex_mut(&mut self, id: VertexId) -> Result<&mut Vertex<T>> {
        dispatch!(&mut self.storage, backend => backend.get_vertex_mut(id))
    }

    fn contains(&self, id: VertexId) -> bool {
        dispatch!(&self.storage, backend => backend.contains(id))
    }

    fn len(&self) -> usize {
        dispatch!(&self.storage, backend => backend.len())
    }

    fn degree(&self, id: VertexId) -> Result<usize> {
        dispatch!(&self.storage, backend => backend.degree(id))
    }

    fn edge_weight(&self, a: VertexId, b: VertexId) -> Result<Option<f64>> {
        dispatch!(&self.storage, backend => backend.edge_weight(a, b))
    }

    fn clear(&mut self) {
        dispatch!(&mut self.storage, backend => backend.clear());
    }

    fn vertices(&self) -> VertexCursor<'_, T> {
        dispatch!(&self.storage, backend => backend.vertices())
    }

    fn vertices_end(&self) -> VertexCursor<'_, T> {
        dispatch!(&self.storage, backend => backend.vertices_end())
    }

    fn neighbors(&self, id: VertexId) -> Result<NeighborCursor<'_, T>> {
        dispatch!(&self.storage, backend => backend.neighbors(id))
    }

    fn neighbors_end(&self, id: VertexId) -> Result<NeighborCursor<'_, T>> {
        dispatch!(&self.storage, backend => backend.neighbors_end(id))
    }
}
