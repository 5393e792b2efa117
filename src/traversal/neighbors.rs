//! Neighbor expansion: the edges incident to one node.

use std::sync::Arc;

use hashbrown::HashSet;

use crate::model::{Direction, Edge, Node};
use crate::store::TermStore;
use crate::Result;
use super::TraversalOptions;

/// Result of neighbor expansion, deduplicated by edge equality.
pub type EdgeSet<S> = HashSet<Edge<S>>;

/// All edges leaving `node` that pass the filters in `options`.
///
/// Reverse edges come from statements whose object is the node's term,
/// forward edges from statements whose subject is. Both are restricted to
/// the node's graph. Forward edges onto literal objects are dropped unless
/// `follow_literals` is set, since a literal has no outgoing statements.
///
/// Fails with `InvalidArgument` when both predicate lists are given.
#[tracing::instrument(skip(node, options), fields(term = %node.term(), direction = ?options.direction))]
pub fn neighbors<S: TermStore>(node: &Node<S>, options: &TraversalOptions) -> Result<EdgeSet<S>> {
    options.validate()?;

    let store = node.store();
    let mut edges = EdgeSet::new();

    if options.direction.includes(Direction::Reverse) {
        for quad in store.match_quads(None, None, Some(node.term()), Some(node.graph())) {
            if !options.allows_predicate(&quad.predicate) || !options.allows_nodes(&quad.subject, &quad.object) {
                continue;
            }
            edges.insert(Edge::new(Arc::clone(store), Direction::Reverse, quad));
        }
    }

    if options.direction.includes(Direction::Forward) {
        for quad in store.match_quads(Some(node.term()), None, None, Some(node.graph())) {
            if !options.follow_literals && quad.object.is_literal() {
                continue;
            }
            if !options.allows_predicate(&quad.predicate) || !options.allows_nodes(&quad.subject, &quad.object) {
                continue;
            }
            edges.insert(Edge::new(Arc::clone(store), Direction::Forward, quad));
        }
    }

    tracing::trace!(count = edges.len(), "expanded node");
    Ok(edges)
}
