//! Traversal options shared by neighbor expansion and search.

use serde::{Deserialize, Serialize};

use crate::model::{Direction, Term, TermSet};
use crate::{Error, Result};

/// Which statement directions a traversal follows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionFilter {
    /// Subject to object only.
    #[default]
    Forward,
    /// Object to subject only.
    Reverse,
    Both,
}

impl DirectionFilter {
    pub fn includes(self, direction: Direction) -> bool {
        match (self, direction) {
            (DirectionFilter::Both, _) => true,
            (DirectionFilter::Forward, Direction::Forward) => true,
            (DirectionFilter::Reverse, Direction::Reverse) => true,
            _ => false,
        }
    }
}

/// Filters and limits for `neighbors` and `shortest`.
///
/// | Field | Default | Meaning |
/// |-------|---------|---------|
/// | `predicate_blacklist` | none | skip statements with these predicates |
/// | `predicate_whitelist` | none | follow only these predicates |
/// | `node_blacklist` | none | skip statements touching these terms |
/// | `follow_literals` | false | walk forward onto literal objects |
/// | `direction` | `Forward` | which directions to walk |
/// | `cutoff` | none | maximum path length for `shortest` |
///
/// The two predicate lists are mutually exclusive. The combination is
/// representable (it can arrive from JSON) and rejected by `validate`,
/// which both traversal entry points call first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalOptions {
    pub predicate_blacklist: Option<TermSet>,
    pub predicate_whitelist: Option<TermSet>,
    pub node_blacklist: Option<TermSet>,
    pub follow_literals: bool,
    pub direction: DirectionFilter,
    pub cutoff: Option<usize>,
}

impl TraversalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        Ok(options)
    }

    pub fn with_predicate_blacklist(mut self, predicates: impl IntoIterator<Item = Term>) -> Self {
        self.predicate_blacklist = Some(predicates.into_iter().collect());
        self
    }

    pub fn with_predicate_whitelist(mut self, predicates: impl IntoIterator<Item = Term>) -> Self {
        self.predicate_whitelist = Some(predicates.into_iter().collect());
        self
    }

    pub fn with_node_blacklist(mut self, terms: impl IntoIterator<Item = Term>) -> Self {
        self.node_blacklist = Some(terms.into_iter().collect());
        self
    }

    pub fn with_follow_literals(mut self, follow: bool) -> Self {
        self.follow_literals = follow;
        self
    }

    pub fn with_direction(mut self, direction: DirectionFilter) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_cutoff(mut self, cutoff: usize) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.predicate_blacklist.is_some() && self.predicate_whitelist.is_some() {
            return Err(Error::InvalidArgument(
                "blacklist or whitelist must be given, not both at the same time".into(),
            ));
        }
        Ok(())
    }

    /// Whether a statement with this predicate may be followed.
    pub fn allows_predicate(&self, predicate: &Term) -> bool {
        if let Some(blacklist) = &self.predicate_blacklist {
            if blacklist.contains(predicate) {
                return false;
            }
        }
        if let Some(whitelist) = &self.predicate_whitelist {
            if !whitelist.contains(predicate) {
                return false;
            }
        }
        true
    }

    /// Whether a statement between these two terms may be followed.
    pub fn allows_nodes(&self, subject: &Term, object: &Term) -> bool {
        self.node_blacklist
            .as_ref()
            .is_none_or(|blocked| !blocked.contains(subject) && !blocked.contains(object))
    }
}
