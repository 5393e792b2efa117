//! # Traversal
//!
//! Neighbor expansion and breadth-first shortest-path search over any
//! `TermStore`. Both entry points take the same `TraversalOptions`.
//!
//! ```text
//! shortest(start, end)
//!   frontier = [empty path]
//!   loop: neighbors(frontier tips) → extend paths → stop at first hit on end
//! ```

pub mod options;
pub mod neighbors;
pub mod shortest;

pub use options::{DirectionFilter, TraversalOptions};
pub use neighbors::{neighbors, EdgeSet};
pub use shortest::shortest;
