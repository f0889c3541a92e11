//! # `duograph` - Backend-Agnostic Graph Container
//!
//! Stores typed vertex payloads joined by undirected, optionally weighted
//! edges, over one of two interchangeable storage representations:
//!
//! - **Adjacency lists** ([`ListBackend`]): sparse; a vertex knows only the
//!   edges it has, in the order they were added.
//! - **Adjacency matrix** ([`MatrixBackend`]): dense; every pair of live
//!   vertices has a cell, holding a weight or the `NaN` "no edge" sentinel.
//!
//! Everything above storage (vertex and edge CRUD, cursors, BFS/DFS with a
//! visit policy, predicate removal, shortest paths) is written once against
//! the [`Backend`] trait and behaves identically on both.
//!
//! ## Invariants
//!
//! After every public operation returns:
//! - **Symmetry**: `b` is a neighbor of `a` with weight `w` iff `a` is a
//!   neighbor of `b` with weight `w`.
//! - **Identity uniqueness**: no two live vertices share a [`VertexId`], and
//!   identities are never reused.
//! - **Count consistency**: `len()` is the number of live vertices and
//!   `degree(id)` the number of connected neighbors.
//! - **Matrix completeness**: every matrix row has exactly `len() - 1` cells.
//!
//! ## Ownership
//!
//! A backend owns its vertices in an identity-keyed arena. Vertices carry no
//! pointer back to their backend; [`VertexHandle`] re-expresses the
//! "delegate to my owner" operations as methods that take the backend
//! explicitly, and reports [`GraphError::Detached`] once the vertex is gone.
//!
//! ## Example
//!
//! ```rust
//! use duograph::{Algorithm, Backend, Graph, VisitPolicy};
//!
//! let mut graph = Graph::list();
//! let f = graph.add_vertex('F');
//! let b = graph.add_vertex('B');
//! let g = graph.add_vertex('G');
//! graph.add_unweighted_edge(f, b).unwrap();
//! graph.add_unweighted_edge(f, g).unwrap();
//!
//! let order = graph.visit_order(Some(f), Algorithm::Bfs, VisitPolicy::Related).unwrap();
//! assert_eq!(order, vec![f, b, g]);
//!
//! let mut seen = String::new();
//! graph
//!     .traverse(None, Algorithm::Dfs, VisitPolicy::All, |v| seen.push(*v.payload()))
//!     .unwrap();
//! assert_eq!(seen, "FGB");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod callbacks;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;

pub use config::{BackendKind, GraphConfig};
pub use error::{GraphError, Result};
pub use format::{GraphDisplay, VertexDisplay, VertexFormat};
pub use graph::{
    traverse, traverse_with, visit_order, Algorithm, Backend, Graph, ListBackend, MatrixBackend,
    NeighborCursor, Traversal, Vertex, VertexCursor, VertexHandle, VertexId, VisitPolicy,
};

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Identities are plain 128-bit values.
const _: () = {
    use core::mem;
    assert!(mem::size_of::<VertexId>() == 16);
};
