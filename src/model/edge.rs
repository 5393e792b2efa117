//! Edge — a directed view of one statement.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::store::{same_store, MemoryStore, TermStore};
use super::{Node, Quad, Term};

/// Which way a statement is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// subject → object
    Forward,
    /// object → subject
    Reverse,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// A statement walked in one direction.
///
/// `start` and `end` are computed on every call; the edge itself only
/// holds the statement.
pub struct Edge<S: TermStore = MemoryStore> {
    store: Arc<S>,
    direction: Direction,
    quad: Quad,
}

impl<S: TermStore> Edge<S> {
    pub fn new(store: Arc<S>, direction: Direction, quad: Quad) -> Self {
        Self { store, direction, quad }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn quad(&self) -> &Quad {
        &self.quad
    }

    pub fn predicate(&self) -> &Term {
        &self.quad.predicate
    }

    /// Term the edge leaves from.
    pub fn start_term(&self) -> &Term {
        match self.direction {
            Direction::Forward => &self.quad.subject,
            Direction::Reverse => &self.quad.object,
        }
    }

    /// Term the edge arrives at.
    pub fn end_term(&self) -> &Term {
        match self.direction {
            Direction::Forward => &self.quad.object,
            Direction::Reverse => &self.quad.subject,
        }
    }

    pub fn start(&self) -> Node<S> {
        self.node_at(self.start_term())
    }

    pub fn end(&self) -> Node<S> {
        self.node_at(self.end_term())
    }

    fn node_at(&self, term: &Term) -> Node<S> {
        Node::in_graph(Arc::clone(&self.store), term.clone(), self.quad.graph.clone())
    }
}

impl<S: TermStore> Clone for Edge<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            direction: self.direction,
            quad: self.quad.clone(),
        }
    }
}

impl<S: TermStore> PartialEq for Edge<S> {
    fn eq(&self, other: &Self) -> bool {
        self.direction == other.direction
            && self.quad == other.quad
            && same_store(&self.store, &other.store)
    }
}

impl<S: TermStore> Eq for Edge<S> {}

impl<S: TermStore> Hash for Edge<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.direction.hash(state);
        self.quad.hash(state);
    }
}

impl<S: TermStore> fmt::Debug for Edge<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("direction", &self.direction)
            .field("quad", &self.quad)
            .finish_non_exhaustive()
    }
}

impl<S: TermStore> fmt::Display for Edge<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Forward => write!(f, "{} -[{}]-> {}", self.start_term(), self.quad.predicate, self.end_term()),
            Direction::Reverse => write!(f, "{} <-[{}]- {}", self.start_term(), self.quad.predicate, self.end_term()),
        }
    }
}
