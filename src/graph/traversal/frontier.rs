//! Pending-work structure driving traversal order.

use std::collections::VecDeque;

use super::Algorithm;
use crate::graph::VertexId;

/// FIFO for breadth-first walks, LIFO for depth-first walks.
#[derive(Debug, Clone)]
pub(crate) enum Frontier {
    Queue(VecDeque<VertexId>),
    Stack(Vec<VertexId>),
}

impl Frontier {
    pub(crate) fn new(algorithm: Algorithm, capacity: usize) -> Self {
        match algorithm {
            Algorithm::Bfs => Self::Queue(VecDeque::with_capacity(capacity)),
            Algorithm::Dfs => Self::Stack(Vec::with_capacity(capacity)),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, id: VertexId) {
        match self {
            Self::Queue(queue) => queue.push_back(id),
            Self::Stack(stack) => stack.push(id),
        }
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<VertexId> {
        match self {
            Self::Queue(queue) => queue.pop_front(),
            Self::Stack(stack) => stack.pop(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Queue(queue) => queue.len(),
            Self::Stack(stack) => stack.len(),
        }
    }
}
