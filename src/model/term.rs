//! RDF terms: IRIs, blank nodes, literals and the default graph.

use std::fmt;

use serde::{Deserialize, Serialize};

/// `xsd:string`, the datatype of plain literals.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// `rdf:langString`, the datatype of language-tagged literals.
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

/// A set of terms compared by value.
pub type TermSet = hashbrown::HashSet<Term>;

/// An RDF term.
///
/// Terms are immutable values. Equality and hashing are structural, so two
/// terms built independently from the same IRI are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Term {
    NamedNode(String),
    BlankNode(String),
    Literal(Literal),
    DefaultGraph,
}

/// A literal value with its language tag or datatype.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    pub value: String,
    pub language: Option<String>,
    pub datatype: String,
}

// ============================================================================
// Constructors
// ============================================================================

impl Term {
    pub fn named_node(iri: impl Into<String>) -> Self {
        Term::NamedNode(iri.into())
    }

    pub fn blank_node(id: impl Into<String>) -> Self {
        Term::BlankNode(id.into())
    }

    /// Plain `xsd:string` literal.
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal(Literal {
            value: value.into(),
            language: None,
            datatype: XSD_STRING.to_string(),
        })
    }

    /// Language-tagged literal. Tags are normalized to lowercase.
    pub fn lang_literal(value: impl Into<String>, language: impl Into<String>) -> Self {
        Term::Literal(Literal {
            value: value.into(),
            language: Some(language.into().to_lowercase()),
            datatype: RDF_LANG_STRING.to_string(),
        })
    }

    pub fn typed_literal(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Term::Literal(Literal {
            value: value.into(),
            language: None,
            datatype: datatype.into(),
        })
    }

    pub fn default_graph() -> Self {
        Term::DefaultGraph
    }

    // ========================================================================
    // Type checking
    // ========================================================================

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    pub fn is_default_graph(&self) -> bool {
        matches!(self, Term::DefaultGraph)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Term::NamedNode(_) => "NamedNode",
            Term::BlankNode(_) => "BlankNode",
            Term::Literal(_) => "Literal",
            Term::DefaultGraph => "DefaultGraph",
        }
    }

    /// The IRI, blank node label or literal lexical form.
    pub fn value(&self) -> &str {
        match self {
            Term::NamedNode(iri) => iri,
            Term::BlankNode(id) => id,
            Term::Literal(lit) => &lit.value,
            Term::DefaultGraph => "",
        }
    }
}

impl Default for Term {
    fn default() -> Self {
        Term::DefaultGraph
    }
}

// ============================================================================
// N-Triples rendering
// ============================================================================

/// Canonical N-Triples syntax. The default graph has no textual form and
/// renders as the empty string.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::NamedNode(iri) => write!(f, "<{iri}>"),
            Term::BlankNode(id) => write!(f, "_:{id}"),
            Term::Literal(lit) => fmt::Display::fmt(lit, f),
            Term::DefaultGraph => Ok(()),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        write_escaped(f, &self.value)?;
        f.write_str("\"")?;
        if let Some(lang) = &self.language {
            write!(f, "@{lang}")
        } else if self.datatype != XSD_STRING {
            write!(f, "^^<{}>", self.datatype)
        } else {
            Ok(())
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    for c in value.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '"' => f.write_str("\\\"")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c => write!(f, "{c}")?,
        }
    }
    Ok(())
}
