//! Graph storage, cursors and traversals.
//!
//! The module is organized leaf-first:
//! - `identity` and `vertex`: identities, vertex records and handles
//! - `backend`: the storage contract, implemented by `list` and `matrix`
//! - `cursor`: backend-agnostic vertex and neighbor cursors
//! - `traversal`: BFS/DFS over any backend
//! - `algorithms`: shortest paths and connected components
//! - `facade`: [`Graph`], the backend-selecting front door

pub(crate) mod access;
pub mod algorithms;
mod backend;
mod cursor;
mod facade;
mod identity;
mod list;
mod matrix;
mod traversal;
mod vertex;

pub use algorithms::{connected_components, shortest_paths, ShortestPaths};
pub use backend::Backend;
pub use cursor::{NeighborCursor, VertexCursor};
pub use facade::Graph;
pub use identity::{OwnerId, VertexId};
pub use list::ListBackend;
pub use matrix::{MatrixBackend, NO_EDGE};
pub use traversal::{traverse, traverse_with, visit_order, Algorithm, Traversal, VisitPolicy};
pub use vertex::{Vertex, VertexHandle};
