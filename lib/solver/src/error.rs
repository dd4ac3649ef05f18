use tree_reach_model::InvalidIntervalError;

/// An error raised while turning relations and filter terms into
/// intervals.
///
/// Only [`SolverError::InvalidInterval`] indicates a genuine fault. The
/// other variants are expected on real-world inputs and every caller maps
/// them to "follow the link": a solver limitation may cause extra
/// crawling, never lost answers.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SolverError {
    /// The comparison constrains a different variable. Not a failure: the
    /// term simply says nothing about the variable being solved for.
    #[error("the comparison is about variable ?{0}, not the one being solved for")]
    MismatchedVariable(String),
    /// The expression is missing a variable or literal operand, or uses a
    /// form outside the comparison fragment. The query engine reports the
    /// real evaluation error later.
    #[error("expression cannot be interpreted as a comparison: {0}")]
    MalformedExpression(String),
    /// The literal's datatype has no ordering the solver understands, or
    /// its lexical form did not parse as a value of that datatype.
    #[error("datatype is not supported for range reasoning: {0}")]
    UnsupportedDatatype(String),
    /// An interval invariant was violated; points at malformed relation
    /// metadata.
    #[error(transparent)]
    InvalidInterval(#[from] InvalidIntervalError),
}
