//! # rdf-pathfinder — Shortest Paths over RDF Quad Stores
//!
//! Graph-style traversal over an RDF dataset: terms anchored in a graph
//! become [`Node`]s, statements become directed [`Edge`]s, and
//! [`shortest`] runs a breadth-first search that yields the first
//! [`Path`] connecting two nodes.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `TermStore` is the contract between traversal and storage
//! 2. **Value semantics**: nodes, edges and stores compare by content, not identity
//! 3. **One options value**: every filter lives in `TraversalOptions`, validated at call entry
//! 4. **Data, not errors**: "no path" is `Ok(None)`, "no neighbors" is an empty set
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use rdf_pathfinder::{shortest, MemoryStore, Node, Quad, Term, TraversalOptions};
//!
//! # fn example() -> rdf_pathfinder::Result<()> {
//! let store = Arc::new(MemoryStore::new());
//! let (a, b, c) = (
//!     Term::named_node("http://example.org/a"),
//!     Term::named_node("http://example.org/b"),
//!     Term::named_node("http://example.org/c"),
//! );
//! let p = Term::named_node("http://example.org/p");
//! store.insert(Quad::triple(a.clone(), p.clone(), b.clone()));
//! store.insert(Quad::triple(b, p, c.clone()));
//!
//! let start = Node::new(store.clone(), a);
//! let end = Node::new(store, c);
//!
//! if let Some(path) = shortest(&start, &end, &TraversalOptions::default())? {
//!     println!("{path}");
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod store;
pub mod traversal;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{Direction, Edge, Literal, Node, Path, Quad, Term, TermSet};

// ============================================================================
// Re-exports: Store
// ============================================================================

pub use store::{MemoryStore, TermStore};

// ============================================================================
// Re-exports: Traversal
// ============================================================================

pub use traversal::{neighbors, shortest, DirectionFilter, EdgeSet, TraversalOptions};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Incompatible store: a path can't be defined over multiple stores")]
    IncompatibleStore,

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
