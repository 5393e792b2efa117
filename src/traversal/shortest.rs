//! Breadth-first shortest-path search.

use std::sync::Arc;

use crate::model::{Node, Path, TermSet};
use crate::store::TermStore;
use crate::Result;
use super::{neighbors, TraversalOptions};

/// Shortest path (by edge count) from `start` to a node with `end`'s term.
///
/// The search is level-synchronous: every path in the frontier has the
/// same length, so the first path to reach `end` is a shortest one. A term
/// reached once is never extended again. Among paths of equal length, the
/// one returned depends on store and hash-set iteration order.
///
/// Returns `Ok(None)` when no path of length `<= cutoff` exists. When
/// `start` and `end` share a term the result is an empty path bound to
/// `start`'s store; no cycle back to the start is searched for.
///
/// Fails with `InvalidArgument` when both predicate lists are given.
#[tracing::instrument(skip(start, end, options), fields(from = %start.term(), to = %end.term(), direction = ?options.direction, cutoff = ?options.cutoff))]
pub fn shortest<S: TermStore>(
    start: &Node<S>,
    end: &Node<S>,
    options: &TraversalOptions,
) -> Result<Option<Path<S>>> {
    options.validate()?;

    if start.term() == end.term() {
        tracing::debug!("start is end, returning empty path");
        return Ok(Some(Path::with_store(Arc::clone(start.store()))));
    }

    let cutoff = options.cutoff.unwrap_or(usize::MAX);
    let mut frontier = vec![Path::with_store(Arc::clone(start.store()))];
    let mut visited = TermSet::new();
    let mut depth = 0;

    while !frontier.is_empty() && depth < cutoff {
        let mut next = Vec::new();

        for path in &frontier {
            let tip = path.end().unwrap_or_else(|| start.clone());

            for edge in neighbors(&tip, options)? {
                if visited.contains(edge.end_term()) {
                    continue;
                }

                let reached = edge.end_term().clone();
                let mut expanded = path.clone();
                expanded.append(edge)?;

                if reached == *end.term() {
                    tracing::debug!(length = expanded.len(), "path found");
                    return Ok(Some(expanded));
                }

                next.push(expanded);
                visited.insert(reached);
            }
        }

        depth += 1;
        tracing::trace!(depth, frontier = next.len(), "level expanded");
        frontier = next;
    }

    if frontier.is_empty() {
        tracing::debug!(depth, "search exhausted");
    } else {
        tracing::debug!(depth, "cutoff reached");
    }
    Ok(None)
}
