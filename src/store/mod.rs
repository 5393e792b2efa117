//! # Term Store Trait
//!
//! This is the contract between traversal and any quad store. Traversal
//! only ever reads: it asks for statements matching a pattern and compares
//! stores by content.
//!
//! ## Implementations
//!
//! | Store | Module | Description |
//! |-------|--------|-------------|
//! | `MemoryStore` | `memory` | Indexed in-memory dataset |

pub mod memory;

use crate::model::{Quad, Term};

pub use memory::MemoryStore;

/// The read side of an RDF dataset.
pub trait TermStore: Send + Sync + 'static {
    /// All statements matching the pattern. `None` positions are wildcards.
    fn match_quads(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
        graph: Option<&Term>,
    ) -> Vec<Quad>;

    /// Deep, order-independent content equality.
    ///
    /// Nodes, edges and paths built over two different store handles are
    /// considered equal when this returns true.
    fn same_content(&self, other: &Self) -> bool;

    /// Number of statements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, quad: &Quad) -> bool {
        !self
            .match_quads(
                Some(&quad.subject),
                Some(&quad.predicate),
                Some(&quad.object),
                Some(&quad.graph),
            )
            .is_empty()
    }
}

/// Content equality for shared store handles, skipping the deep compare
/// when both handles point at the same allocation.
pub(crate) fn same_store<S: TermStore>(a: &std::sync::Arc<S>, b: &std::sync::Arc<S>) -> bool {
    std::sync::Arc::ptr_eq(a, b) || a.same_content(b)
}
