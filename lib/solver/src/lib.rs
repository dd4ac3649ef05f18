mod classifier;
mod error;
mod expression;
mod resolver;

pub use classifier::{classify_relations, classify_relations_in_query, find_filter_expression};
pub use error::SolverError;
pub use expression::{
    are_types_compatible, parse_numeric_literal, solution_intervals, SolverExpression,
};
pub use resolver::resolve_filter_domain;
