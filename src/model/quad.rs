//! Quad — a (subject, predicate, object, graph) statement.

use std::fmt;

use serde::{Deserialize, Serialize};
use super::Term;

/// An RDF statement. Equality compares all four positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Quad {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
    #[serde(default)]
    pub graph: Term,
}

impl Quad {
    pub fn new(subject: Term, predicate: Term, object: Term, graph: Term) -> Self {
        Self { subject, predicate, object, graph }
    }

    /// A statement in the default graph.
    pub fn triple(subject: Term, predicate: Term, object: Term) -> Self {
        Self::new(subject, predicate, object, Term::DefaultGraph)
    }

    /// Pattern match; `None` positions are wildcards.
    pub fn matches(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
        graph: Option<&Term>,
    ) -> bool {
        subject.is_none_or(|s| *s == self.subject)
            && predicate.is_none_or(|p| *p == self.predicate)
            && object.is_none_or(|o| *o == self.object)
            && graph.is_none_or(|g| *g == self.graph)
    }
}

/// N-Quads line, without the trailing newline.
impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)?;
        if !self.graph.is_default_graph() {
            write!(f, " {}", self.graph)?;
        }
        f.write_str(" .")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nn(s: &str) -> Term {
        Term::named_node(format!("http://example.org/{s}"))
    }

    #[test]
    fn test_matches_wildcards() {
        let q = Quad::triple(nn("a"), nn("p"), nn("b"));
        assert!(q.matches(None, None, None, None));
        assert!(q.matches(Some(&nn("a")), None, None, Some(&Term::DefaultGraph)));
        assert!(!q.matches(None, None, Some(&nn("a")), None));
        assert!(!q.matches(None, None, None, Some(&nn("g"))));
    }

    #[test]
    fn test_display_nquads() {
        let q = Quad::triple(nn("a"), nn("p"), Term::literal("x"));
        assert_eq!(q.to_string(), "<http://example.org/a> <http://example.org/p> \"x\" .");

        let q = Quad::new(nn("a"), nn("p"), nn("b"), nn("g"));
        assert_eq!(
            q.to_string(),
            "<http://example.org/a> <http://example.org/p> <http://example.org/b> <http://example.org/g> ."
        );
    }
}
