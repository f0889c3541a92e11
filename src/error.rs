//! Error type shared by every backend, the façade and the traversal engine.
//!
//! Every failure aborts the call that triggered it and leaves the graph
//! untouched; there is no partial-success state.

use thiserror::Error;

use crate::graph::VertexId;

/// Errors surfaced by graph operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// The identity is not present in the backend.
    #[error("vertex with id {0} not found")]
    NotFound(VertexId),

    /// A structural operation was issued through a handle whose vertex no
    /// longer belongs to the backend it was used with.
    #[error("vertex {0} is not part of a graph")]
    Detached(VertexId),

    /// A traversal was requested on a backend holding no vertices.
    #[error("graph is empty")]
    EmptyGraph,

    /// Both endpoints of an edge are the same vertex.
    #[error("self-loop on vertex {0} is not supported")]
    SelfLoop(VertexId),

    /// The weight collides with the matrix "no edge" sentinel.
    #[error("invalid weight {weight} for edge {from} -- {to}")]
    InvalidWeight {
        /// First endpoint.
        from: VertexId,
        /// Second endpoint.
        to: VertexId,
        /// Rejected weight.
        weight: f64,
    },

    /// Shortest-path search met an edge it cannot relax.
    #[error("negative weight {weight} on edge {from} -- {to}")]
    NegativeWeight {
        /// Vertex being expanded.
        from: VertexId,
        /// Neighbor reached through the offending edge.
        to: VertexId,
        /// Offending weight.
        weight: f64,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
