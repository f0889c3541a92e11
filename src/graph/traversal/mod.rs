//! Breadth-first and depth-first traversal.
//!
//! Both algorithms share one state machine and differ only in the
//! [`Frontier`](frontier::Frontier) they pop from. The walker never inspects
//! backend internals: it reaches neighbors through [`Backend::neighbors`] and
//! nothing else, so it runs unchanged over either representation (or the
//! [`Graph`](crate::graph::Graph) façade).
//!
//! ### Mutation between steps
//! [`Traversal`] does not hold a borrow of the backend between calls to
//! [`Traversal::next`], so the caller may add or remove vertices and edges
//! after each step. The walker follows these rules:
//! - the neighbors of a returned vertex are enumerated on the *following*
//!   `next` call, so structural changes made in between are honoured
//! - a queued identity that no longer resolves is skipped and not expanded
//! - under [`VisitPolicy::All`] the remaining vertices are snapshotted when
//!   the reachable phase ends; snapshot entries removed later are skipped
//!
//! Vertices are marked visited when pushed, so each identity is returned at
//! most once per walk.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::access::visited::VisitedSet;
use crate::graph::{Backend, Vertex, VertexId};

mod frontier;


use frontier::Frontier;

/// Frontier discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Breadth-first: level order.
    #[default]
    Bfs,
    /// Depth-first: one branch to its end before backtracking.
    Dfs,
}

/// Which vertices a walk reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitPolicy {
    /// Only vertices reachable from the start.
    #[default]
    Related,
    /// Reachable vertices, then every other vertex in enumeration order.
    All,
}

/// Step-wise walker over a backend.
#[derive(Debug, Clone)]
pub struct Traversal {
    algorithm: Algorithm,
    policy: VisitPolicy,
    frontier: Frontier,
    visited: VisitedSet,
    pending: Option<VertexId>,
    sweep: Option<std::vec::IntoIter<VertexId>>,
}

impl Traversal {
    /// Starts a walk at `start`.
    ///
    /// # Errors
    /// [`GraphError::EmptyGraph`] if the backend holds no vertices,
    /// [`GraphError::NotFound`] if `start` is absent.
    pub fn new<B: Backend + ?Sized>(
        backend: &B,
        start: VertexId,
        algorithm: Algorithm,
        policy: VisitPolicy,
    ) -> Result<Self> {
        if backend.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        if !backend.contains(start) {
            return Err(GraphError::NotFound(start));
        }

        let mut visited = VisitedSet::with_capacity(backend.len());
        let mut frontier = Frontier::new(algorithm, backend.len());
        visited.try_visit(start);
        frontier.push(start);

        Ok(Self {
            algorithm,
            policy,
            frontier,
            visited,
            pending: None,
            sweep: None,
        })
    }

    /// Starts a walk at the first vertex in enumeration order.
    pub fn from_first<B: Backend + ?Sized>(
        backend: &B,
        algorithm: Algorithm,
        policy: VisitPolicy,
    ) -> Result<Self> {
        let start = backend.first_id().ok_or(GraphError::EmptyGraph)?;
        Self::new(backend, start, algorithm, policy)
    }

    /// Visit order this walker uses.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Coverage policy this walker uses.
    pub fn policy(&self) -> VisitPolicy {
        self.policy
    }

    /// Whether `id` has been returned or queued by this walk.
    pub fn is_visited(&self, id: VertexId) -> bool {
        self.visited.is_visited(id)
    }

    /// Identities claimed so far, queued ones included.
    pub fn claimed(&self) -> usize {
        self.visited.len()
    }

    /// Returns the next vertex to visit, or `None` once the walk is done.
    pub fn next<B: Backend + ?Sized>(&mut self, backend: &B) -> Option<VertexId> {
        self.expand_pending(backend);

        while let Some(id) = self.frontier.pop() {
            if backend.contains(id) {
                self.pending = Some(id);
                return Some(id);
            }
            tracing::trace!(%id, "traversal: skipping removed vertex");
        }

        if self.policy == VisitPolicy::All {
            let sweep = self.sweep.get_or_insert_with(|| backend.ids().into_iter());
            for id in sweep.by_ref() {
                if backend.contains(id) && self.visited.try_visit(id) {
                    return Some(id);
                }
            }
        }
        None
    }

    fn expand_pending<B: Backend + ?Sized>(&mut self, backend: &B) {
        let Some(id) = self.pending.take() else {
            return;
        };
        let Ok(neighbors) = backend.neighbors(id) else {
            tracing::trace!(%id, "traversal: visited vertex removed before expansion");
            return;
        };
        for neighbor in neighbors {
            if self.visited.try_visit(neighbor.id()) {
                self.frontier.push(neighbor.id());
            }
        }
        tracing::trace!(%id, frontier = self.frontier.len(), "traversal: expanded");
    }
}

/// Walks `backend` handing each visited vertex to `visit`.
///
/// `start` defaults to the first vertex in enumeration order. Returns the
/// number of vertices visited.
///
/// # Errors
/// [`GraphError::EmptyGraph`] on an empty backend, [`GraphError::NotFound`]
/// when `start` is absent.
pub fn traverse<B, F>(
    backend: &mut B,
    start: Option<VertexId>,
    algorithm: Algorithm,
    policy: VisitPolicy,
    mut visit: F,
) -> Result<usize>
where
    B: Backend + ?Sized,
    F: FnMut(&mut Vertex<B::Payload>),
{
    traverse_with(backend, start, algorithm, policy, |backend, id| {
        visit(backend.get_vertex_mut(id)?);
        Ok(())
    })
}

/// Like [`traverse`], but the callback receives the backend itself and may
/// change its structure.
///
/// # Errors
/// As [`traverse`]; additionally the first error returned by `visit` aborts
/// the walk and is returned unchanged.
pub fn traverse_with<B, F>(
    backend: &mut B,
    start: Option<VertexId>,
    algorithm: Algorithm,
    policy: VisitPolicy,
    mut visit: F,
) -> Result<usize>
where
    B: Backend + ?Sized,
    F: FnMut(&mut B, VertexId) -> Result<()>,
{
    let mut walk = match start {
        Some(id) => Traversal::new(&*backend, id, algorithm, policy)?,
        None => Traversal::from_first(&*backend, algorithm, policy)?,
    };
    tracing::debug!(?algorithm, ?policy, vertices = backend.len(), "traversal: start");

    let mut visited = 0;
    while let Some(id) = walk.next(&*backend) {
        visit(backend, id)?;
        visited += 1;
    }

    tracing::debug!(visited, "traversal: finished");
    Ok(visited)
}

/// Identities in the order a walk would visit them.
///
/// # Errors
/// As [`Traversal::new`].
pub fn visit_order<B: Backend + ?Sized>(
    backend: &B,
    start: Option<VertexId>,
    algorithm: Algorithm,
    policy: VisitPolicy,
) -> Result<Vec<VertexId>> {
    let mut walk = match start {
        Some(id) => Traversal::new(backend, id, algorithm, policy)?,
        None => Traversal::from_first(backend, algorithm, policy)?,
    };
    let mut order = Vec::with_capacity(backend.len());
    while let Some(id) = walk.next(backend) {
        order.push(id);
    }
    Ok(order)
}
