use crate::operator::RelationOperator;
use oxrdf::{Literal, NamedNode};

/// A hypermedia relation announced by a TREE node.
///
/// Produced by the metadata extractor from the `tree:relation` description
/// of a fetched page; the solver reads it and never writes it back. Every
/// field except the target is optional on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRelation {
    /// URL of the page the relation points to (`tree:node`).
    pub node: String,
    /// Predicate path connecting collection members to the compared value
    /// (`tree:path`).
    pub path: Option<NamedNode>,
    /// Boundary value of the relation (`tree:value`).
    pub value: Option<RelationValue>,
    /// Comparison the members behind the target satisfy, derived from the
    /// relation's `rdf:type`.
    pub operator: Option<RelationOperator>,
    /// Number of members remaining behind the target
    /// (`tree:remainingItems`).
    pub remaining_items: Option<u64>,
}

impl TreeRelation {
    /// Creates a relation that only announces its target page.
    #[must_use]
    pub fn new(node: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            path: None,
            value: None,
            operator: None,
            remaining_items: None,
        }
    }
}

/// The literal a relation compares members against, keeping the raw
/// lexical form alongside the parsed term.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationValue {
    /// Lexical form as it appeared on the wire.
    pub raw: String,
    /// The typed literal.
    pub term: Literal,
}

impl RelationValue {
    #[must_use]
    pub fn new(term: Literal) -> Self {
        Self {
            raw: term.value().to_owned(),
            term,
        }
    }
}
