//! Path — an ordered walk of edges through one store.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::store::{same_store, MemoryStore, TermStore};
use crate::{Error, Result};
use super::{Direction, Edge, Node};

/// A walk: edge 0 starts at node 0, edge i ends where edge i+1 starts.
///
/// The node sequence is derived from edge boundaries, so a path of length
/// `n` has `n + 1` nodes and an empty path has none.
pub struct Path<S: TermStore = MemoryStore> {
    /// Unset until the first edge is appended, unless given up front.
    store: Option<Arc<S>>,
    edges: SmallVec<[Edge<S>; 4]>,
}

impl<S: TermStore> Path<S> {
    pub fn new() -> Self {
        Self { store: None, edges: SmallVec::new() }
    }

    pub fn with_store(store: Arc<S>) -> Self {
        Self { store: Some(store), edges: SmallVec::new() }
    }

    pub fn store(&self) -> Option<&Arc<S>> {
        self.store.as_ref()
    }

    pub fn edges(&self) -> &[Edge<S>] {
        &self.edges
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn has_forward(&self) -> bool {
        self.edges.iter().any(|e| e.direction() == Direction::Forward)
    }

    pub fn has_reverse(&self) -> bool {
        self.edges.iter().any(|e| e.direction() == Direction::Reverse)
    }

    /// Node at `index` in `0..=len`. `None` for an empty path or an index
    /// past the end.
    pub fn node(&self, index: usize) -> Option<Node<S>> {
        let len = self.edges.len();
        if len == 0 || index > len {
            return None;
        }
        if index == len {
            return Some(self.edges[len - 1].end());
        }
        Some(self.edges[index].start())
    }

    pub fn start(&self) -> Option<Node<S>> {
        self.node(0)
    }

    pub fn end(&self) -> Option<Node<S>> {
        self.node(self.len())
    }

    /// All `len + 1` nodes, or none for an empty path.
    pub fn nodes(&self) -> Vec<Node<S>> {
        (0..=self.len()).filter_map(|i| self.node(i)).collect()
    }

    /// Extend the path by one edge.
    ///
    /// The first edge fixes the store of a path created without one. Every
    /// later edge must come from a store with the same content.
    pub fn append(&mut self, edge: Edge<S>) -> Result<&mut Self> {
        if let Some(store) = &self.store {
            if !same_store(store, edge.store()) {
                return Err(Error::IncompatibleStore);
            }
        } else {
            self.store = Some(Arc::clone(edge.store()));
        }
        self.edges.push(edge);
        Ok(self)
    }

    /// Node terms in N-Triples syntax joined by `", "`; empty for an empty
    /// path. Diagnostic output only.
    pub fn render(&self) -> String {
        self.nodes()
            .iter()
            .map(|n| n.term().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<S: TermStore> Default for Path<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shares the store handle and copies the edge list; edges are immutable.
impl<S: TermStore> Clone for Path<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            edges: self.edges.clone(),
        }
    }
}

impl<S: TermStore> PartialEq for Path<S> {
    fn eq(&self, other: &Self) -> bool {
        self.edges == other.edges
    }
}

impl<S: TermStore> Eq for Path<S> {}

impl<S: TermStore> fmt::Debug for Path<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path").field("edges", &self.edges).finish_non_exhaustive()
    }
}

impl<S: TermStore> fmt::Display for Path<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
