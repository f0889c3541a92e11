//! Vertex records and handles.
//!
//! A backend owns every [`Vertex`] it holds, keyed by [`VertexId`]. Vertices
//! never point back at their backend; they only remember the backend's
//! [`OwnerId`] tag. Operations that conceptually belong to a vertex
//! (neighbor iteration, self-removal) live on [`VertexHandle`] and take the
//! backend as an explicit argument.

use super::backend::Backend;
use super::cursor::NeighborCursor;
use super::identity::{OwnerId, VertexId};
use crate::error::{GraphError, Result};

/// A payload together with its identity.
///
/// Vertices are deliberately not `Clone`: a clone would carry the same
/// identity and could break identity uniqueness inside a backend.
#[derive(Debug)]
pub struct Vertex<T> {
    id: VertexId,
    payload: T,
    owner: Option<OwnerId>,
    retired: bool,
}

impl<T> Vertex<T> {
    /// Creates a detached vertex with a fresh identity.
    pub fn new(payload: T) -> Self {
        Self {
            id: VertexId::new(),
            payload,
            owner: None,
            retired: false,
        }
    }

    /// Identity of this vertex.
    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Shared access to the payload.
    #[inline]
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Exclusive access to the payload.
    #[inline]
    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    /// Consumes the vertex, returning its payload.
    pub fn into_payload(self) -> T {
        self.payload
    }

    /// Returns `true` while the vertex is held by a backend.
    pub fn is_attached(&self) -> bool {
        self.owner.is_some()
    }

    /// Copyable handle carrying this vertex's identity and owner tag.
    pub fn handle(&self) -> VertexHandle {
        VertexHandle {
            id: self.id,
            owner: self.owner,
        }
    }

    /// Stamps the owner tag. A vertex that was removed from a backend gets a
    /// fresh identity here, so its old identity never resolves again.
    pub(crate) fn attach(&mut self, owner: OwnerId) {
        if self.retired {
            self.id = VertexId::new();
            self.retired = false;
        }
        self.owner = Some(owner);
    }

    pub(crate) fn detach(&mut self) {
        self.owner = None;
        self.retired = true;
    }
}

/// Lightweight reference to a vertex, valid across backend mutations.
///
/// A handle is *detached* when it was taken from a vertex that was not in a
/// backend, when it is used with a backend other than the one that issued it,
/// or when its vertex has since been removed. Every operation on a detached
/// handle fails with [`GraphError::Detached`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexHandle {
    id: VertexId,
    owner: Option<OwnerId>,
}

impl VertexHandle {
    /// Identity the handle refers to.
    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Checks the handle against `backend` and returns the live identity.
    pub fn resolve<B: Backend + ?Sized>(&self, backend: &B) -> Result<VertexId> {
        match self.owner {
            Some(owner) if owner == backend.owner() && backend.contains(self.id) => Ok(self.id),
            _ => Err(GraphError::Detached(self.id)),
        }
    }

    /// Neighbor cursor of the referenced vertex.
    pub fn neighbors<'a, B: Backend + ?Sized>(
        &self,
        backend: &'a B,
    ) -> Result<NeighborCursor<'a, B::Payload>> {
        backend.neighbors(self.resolve(backend)?)
    }

    /// Connected-neighbor count of the referenced vertex.
    pub fn degree<B: Backend + ?Sized>(&self, backend: &B) -> Result<usize> {
        backend.degree(self.resolve(backend)?)
    }

    /// Removes the referenced vertex from `backend`, returning it detached.
    /// Re-inserting the returned vertex gives it a new identity.
    pub fn remove<B: Backend + ?Sized>(&self, backend: &mut B) -> Result<Vertex<B::Payload>> {
        let id = self.resolve(backend)?;
        backend.remove_vertex(id)
    }

    /// Removes every edge between the referenced vertex and `other`.
    pub fn remove_edge<B: Backend + ?Sized>(&self, backend: &mut B, other: VertexId) -> Result<()> {
        let id = self.resolve(backend)?;
        backend.remove_edge(id, other)
    }
}
