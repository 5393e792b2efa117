//! # RDF Traversal Model
//!
//! Value types that cross every boundary: store ↔ traversal ↔ user.
//!
//! Design rule: nodes, edges and paths share their store through an `Arc`
//! and never mutate it. Equality is by content, never by handle identity.

pub mod term;
pub mod quad;
pub mod node;
pub mod edge;
pub mod path;

pub use term::{Term, Literal, TermSet, XSD_STRING, RDF_LANG_STRING};
pub use quad::Quad;
pub use node::Node;
pub use edge::{Edge, Direction};
pub use path::Path;
