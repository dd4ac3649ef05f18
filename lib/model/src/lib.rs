mod domain;
mod interval;
mod operator;
mod relation;
pub mod vocab;
mod xsd;

pub use domain::*;
pub use interval::*;
pub use operator::*;
pub use relation::*;
pub use xsd::*;

// Re-export some oxrdf types.
pub use oxrdf::{
    Literal, LiteralRef, NamedNode, NamedNodeRef, Term, TermRef, Variable, VariableRef,
};
