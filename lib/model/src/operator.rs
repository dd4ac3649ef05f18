use crate::vocab::tree;
use oxrdf::NamedNodeRef;
use std::fmt;

/// Selects which combinator a resolved subtree applies to a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicOperator {
    And,
    Or,
    Not,
}

/// A comparison carried by a TREE relation or a filter term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationOperator {
    EqualTo,
    NotEqualTo,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl RelationOperator {
    /// Maps a TREE relation type IRI to its comparison operator.
    ///
    /// Returns [`None`] for relation types that do not describe a value
    /// comparison (prefix, substring, suffix and geospatial relations).
    /// Not-equal has no TREE relation type; it only arises from negated
    /// filter terms.
    #[must_use]
    pub fn from_tree_iri(iri: NamedNodeRef<'_>) -> Option<Self> {
        if iri == tree::EQUAL_TO_RELATION || iri == tree::EQUAL_THAN_RELATION {
            Some(Self::EqualTo)
        } else if iri == tree::LESS_THAN_RELATION {
            Some(Self::LessThan)
        } else if iri == tree::LESS_THAN_OR_EQUAL_TO_RELATION {
            Some(Self::LessThanOrEqual)
        } else if iri == tree::GREATER_THAN_RELATION {
            Some(Self::GreaterThan)
        } else if iri == tree::GREATER_THAN_OR_EQUAL_TO_RELATION {
            Some(Self::GreaterThanOrEqual)
        } else {
            None
        }
    }

    /// The logical complement, used when a negation is pushed into a
    /// comparison.
    #[must_use]
    pub fn complement(self) -> Self {
        match self {
            Self::EqualTo => Self::NotEqualTo,
            Self::NotEqualTo => Self::EqualTo,
            Self::LessThan => Self::GreaterThanOrEqual,
            Self::GreaterThanOrEqual => Self::LessThan,
            Self::LessThanOrEqual => Self::GreaterThan,
            Self::GreaterThan => Self::LessThanOrEqual,
        }
    }

    /// The mirrored operator, used when the operands of a comparison
    /// switch sides.
    #[must_use]
    pub fn mirror(self) -> Self {
        match self {
            Self::LessThan => Self::GreaterThan,
            Self::GreaterThan => Self::LessThan,
            Self::LessThanOrEqual => Self::GreaterThanOrEqual,
            Self::GreaterThanOrEqual => Self::LessThanOrEqual,
            Self::EqualTo => Self::EqualTo,
            Self::NotEqualTo => Self::NotEqualTo,
        }
    }
}

impl fmt::Display for RelationOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EqualTo => "=",
            Self::NotEqualTo => "!=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
        })
    }
}
