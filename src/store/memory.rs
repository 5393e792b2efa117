//! In-memory quad store.
//!
//! This is the reference implementation of `TermStore`. Statements live in
//! a hash set with subject and object indexes, all behind one `RwLock`, so
//! a store can be shared as `Arc<MemoryStore>` and still be populated.
//!
//! ## Limitations
//!
//! - **No persistence**: dropping the store drops its statements.
//! - **Two indexes only**: patterns that bind neither subject nor object
//!   scan every statement. Traversal always binds one of them.

use parking_lot::RwLock;

use hashbrown::{HashMap, HashSet};

use crate::model::{Quad, Term};
use super::TermStore;

// ============================================================================
// MemoryStore
// ============================================================================

/// Indexed in-memory RDF dataset.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    quads: HashSet<Quad>,
    /// subject → statements with that subject
    by_subject: HashMap<Term, Vec<Quad>>,
    /// object → statements with that object
    by_object: HashMap<Term, Vec<Quad>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_quads(quads: impl IntoIterator<Item = Quad>) -> Self {
        let store = Self::new();
        store.extend(quads);
        store
    }

    /// Add a statement. Returns false if it was already present.
    pub fn insert(&self, quad: Quad) -> bool {
        let mut guard = self.inner.write();
        let inner = &mut *guard;
        if inner.quads.contains(&quad) {
            return false;
        }
        inner.by_subject.entry(quad.subject.clone()).or_default().push(quad.clone());
        inner.by_object.entry(quad.object.clone()).or_default().push(quad.clone());
        inner.quads.insert(quad);
        true
    }

    pub fn extend(&self, quads: impl IntoIterator<Item = Quad>) {
        for quad in quads {
            self.insert(quad);
        }
    }

    /// Remove a statement. Returns true if it existed.
    pub fn remove(&self, quad: &Quad) -> bool {
        let mut guard = self.inner.write();
        let inner = &mut *guard;
        if !inner.quads.remove(quad) {
            return false;
        }
        if let Some(list) = inner.by_subject.get_mut(&quad.subject) {
            list.retain(|q| q != quad);
            if list.is_empty() {
                inner.by_subject.remove(&quad.subject);
            }
        }
        if let Some(list) = inner.by_object.get_mut(&quad.object) {
            list.retain(|q| q != quad);
            if list.is_empty() {
                inner.by_object.remove(&quad.object);
            }
        }
        true
    }

    /// Snapshot of all statements, in no particular order.
    pub fn quads(&self) -> Vec<Quad> {
        self.inner.read().quads.iter().cloned().collect()
    }
}

impl Clone for MemoryStore {
    fn clone(&self) -> Self {
        Self::from_quads(self.quads())
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore").field("len", &self.len()).finish()
    }
}

impl FromIterator<Quad> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = Quad>>(iter: I) -> Self {
        Self::from_quads(iter)
    }
}

// ============================================================================
// TermStore impl
// ============================================================================

impl TermStore for MemoryStore {
    fn match_quads(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
        graph: Option<&Term>,
    ) -> Vec<Quad> {
        let inner = self.inner.read();

        let candidates: Box<dyn Iterator<Item = &Quad> + '_> = match (subject, object) {
            (Some(s), _) => Box::new(inner.by_subject.get(s).into_iter().flatten()),
            (None, Some(o)) => Box::new(inner.by_object.get(o).into_iter().flatten()),
            (None, None) => Box::new(inner.quads.iter()),
        };

        candidates
            .filter(|q| q.matches(subject, predicate, object, graph))
            .cloned()
            .collect()
    }

    fn same_content(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        // Locks are taken in address order.
        let (first, second) = if (self as *const Self) < (other as *const Self) {
            (self, other)
        } else {
            (other, self)
        };
        let a = first.inner.read();
        let b = second.inner.read();
        a.quads == b.quads
    }

    fn len(&self) -> usize {
        self.inner.read().quads.len()
    }

    fn contains(&self, quad: &Quad) -> bool {
        self.inner.read().quads.contains(quad)
    }
}

// ============================================================================
// Tests
// ============================================================================
