//! Node — a term anchored to a store and a graph.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::store::{same_store, MemoryStore, TermStore};
use super::Term;

/// A traversal position: a term inside one graph of a store.
///
/// Two nodes are equal when their terms and graphs are equal and their
/// stores hold the same statements, even if the stores are distinct
/// handles.
pub struct Node<S: TermStore = MemoryStore> {
    store: Arc<S>,
    term: Term,
    graph: Term,
}

impl<S: TermStore> Node<S> {
    /// Node in the default graph.
    pub fn new(store: Arc<S>, term: Term) -> Self {
        Self::in_graph(store, term, Term::DefaultGraph)
    }

    pub fn in_graph(store: Arc<S>, term: Term, graph: Term) -> Self {
        Self { store, term, graph }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn term(&self) -> &Term {
        &self.term
    }

    pub fn graph(&self) -> &Term {
        &self.graph
    }
}

impl<S: TermStore> Clone for Node<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            term: self.term.clone(),
            graph: self.graph.clone(),
        }
    }
}

impl<S: TermStore> PartialEq for Node<S> {
    fn eq(&self, other: &Self) -> bool {
        self.term == other.term && self.graph == other.graph && same_store(&self.store, &other.store)
    }
}

impl<S: TermStore> Eq for Node<S> {}

impl<S: TermStore> Hash for Node<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.term.hash(state);
        self.graph.hash(state);
    }
}

impl<S: TermStore> fmt::Debug for Node<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("term", &self.term)
            .field("graph", &self.graph)
            .finish_non_exhaustive()
    }
}

impl<S: TermStore> fmt::Display for Node<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.term, f)
    }
}
