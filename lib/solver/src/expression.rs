use crate::error::SolverError;
use oxrdf::vocab::xsd;
use oxrdf::{LiteralRef, NamedNode, Variable};
use oxsdatatypes::{DateTime, Decimal, Double, Float, Integer};
use spargebra::algebra::Expression;
use std::str::FromStr;
use tree_reach_model::{
    is_integer_datatype, is_numeric_datatype, RelationOperator, SolutionInterval, TreeRelation,
};

/// A comparison in canonical form: one variable against one number.
///
/// This is the common denominator of a hypermedia relation and a filter
/// comparison term; both are lowered to it before any interval reasoning
/// happens.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverExpression {
    variable: Variable,
    raw_value: String,
    datatype: NamedNode,
    value: f64,
    operator: RelationOperator,
}

impl SolverExpression {
    /// The variable the comparison constrains.
    #[must_use]
    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    /// The lexical form of the compared literal.
    #[must_use]
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// The declared datatype of the compared literal.
    #[must_use]
    pub fn datatype(&self) -> &NamedNode {
        &self.datatype
    }

    /// The compared value, coerced to a double.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn operator(&self) -> RelationOperator {
        self.operator
    }

    /// Extracts the canonical comparison a relation describes for
    /// `variable`.
    ///
    /// Needs both a boundary value and an operator on the relation;
    /// without them there is nothing to reason about and the caller
    /// follows the link unconditionally.
    pub fn from_relation(
        relation: &TreeRelation,
        variable: &Variable,
    ) -> Result<Self, SolverError> {
        let value = relation.value.as_ref().ok_or_else(|| {
            SolverError::MalformedExpression("relation carries no value".to_owned())
        })?;
        let operator = relation.operator.ok_or_else(|| {
            SolverError::MalformedExpression("relation carries no operator".to_owned())
        })?;
        let number = parse_numeric_literal(value.term.as_ref())?;
        Ok(Self {
            variable: variable.clone(),
            raw_value: value.raw.clone(),
            datatype: value.term.datatype().into_owned(),
            value: number,
            operator,
        })
    }

    /// Extracts the canonical comparison from the operands of a filter
    /// comparison.
    ///
    /// Exactly one operand must be a variable and the other a literal; a
    /// literal on the left-hand side mirrors the operator. A comparison
    /// over some other variable reports
    /// [`SolverError::MismatchedVariable`] so the caller can skip it.
    pub fn from_comparison(
        operator: RelationOperator,
        lhs: &Expression,
        rhs: &Expression,
        variable: &Variable,
    ) -> Result<Self, SolverError> {
        let (found, literal, operator) = match (lhs, rhs) {
            (Expression::Variable(found), Expression::Literal(literal)) => {
                (found, literal, operator)
            }
            (Expression::Literal(literal), Expression::Variable(found)) => {
                (found, literal, operator.mirror())
            }
            _ => {
                return Err(SolverError::MalformedExpression(
                    "comparison needs one variable and one literal operand".to_owned(),
                ))
            }
        };
        if found != variable {
            return Err(SolverError::MismatchedVariable(found.as_str().to_owned()));
        }
        let number = parse_numeric_literal(literal.as_ref())?;
        Ok(Self {
            variable: variable.clone(),
            raw_value: literal.value().to_owned(),
            datatype: literal.datatype().into_owned(),
            value: number,
            operator,
        })
    }

    /// The interval(s) of values satisfying this comparison.
    pub fn solution_intervals(&self) -> Result<Vec<SolutionInterval>, SolverError> {
        solution_intervals(self.value, self.operator)
    }
}

/// Maps a `(value, operator)` pair to the intervals satisfying it.
///
/// Strict bounds move one representable double beyond the value;
/// not-equal yields the two-piece union around the excluded point.
pub fn solution_intervals(
    value: f64,
    operator: RelationOperator,
) -> Result<Vec<SolutionInterval>, SolverError> {
    let intervals = match operator {
        RelationOperator::EqualTo => vec![SolutionInterval::new(value, value)?],
        RelationOperator::GreaterThan => {
            vec![SolutionInterval::new(value.next_up(), f64::INFINITY)?]
        }
        RelationOperator::GreaterThanOrEqual => {
            vec![SolutionInterval::new(value, f64::INFINITY)?]
        }
        RelationOperator::LessThan => {
            vec![SolutionInterval::new(f64::NEG_INFINITY, value.next_down())?]
        }
        RelationOperator::LessThanOrEqual => {
            vec![SolutionInterval::new(f64::NEG_INFINITY, value)?]
        }
        RelationOperator::NotEqualTo => vec![
            SolutionInterval::new(f64::NEG_INFINITY, value.next_down())?,
            SolutionInterval::new(value.next_up(), f64::INFINITY)?,
        ],
    };
    Ok(intervals)
}

/// Converts a literal's lexical form to a double for interval reasoning.
///
/// Integer datatypes parse exactly, `xsd:dateTime` converts to fractional
/// milliseconds since the Unix epoch. Anything outside the supported set,
/// including values that do not parse, reports
/// [`SolverError::UnsupportedDatatype`].
pub fn parse_numeric_literal(literal: LiteralRef<'_>) -> Result<f64, SolverError> {
    let datatype = literal.datatype();
    let value = literal.value();
    let unsupported = || SolverError::UnsupportedDatatype(datatype.as_str().to_owned());

    let number = if is_integer_datatype(datatype) {
        let integer = Integer::from_str(value).map_err(|_| unsupported())?;
        i64::from(integer) as f64
    } else if datatype == xsd::DECIMAL {
        let decimal = Decimal::from_str(value).map_err(|_| unsupported())?;
        f64::from(Double::from(decimal))
    } else if datatype == xsd::FLOAT {
        let float = Float::from_str(value).map_err(|_| unsupported())?;
        f64::from(f32::from(float))
    } else if datatype == xsd::DOUBLE {
        let double = Double::from_str(value).map_err(|_| unsupported())?;
        f64::from(double)
    } else if datatype == xsd::DATE_TIME {
        let date_time = DateTime::from_str(value).map_err(|_| unsupported())?;
        epoch_milliseconds(date_time).ok_or_else(unsupported)?
    } else {
        return Err(unsupported());
    };
    if number.is_nan() {
        return Err(unsupported());
    }
    Ok(number)
}

/// Fractional milliseconds between the Unix epoch and `value`.
fn epoch_milliseconds(value: DateTime) -> Option<f64> {
    let epoch = DateTime::from_str("1970-01-01T00:00:00Z").ok()?;
    let elapsed = value.checked_sub(epoch)?;
    Some(f64::from(Double::from(elapsed.as_seconds())) * 1000.0)
}

/// Checks that extracted comparisons talk about comparable values:
/// identical declared datatypes, or all drawn from the numeric family.
#[must_use]
pub fn are_types_compatible(expressions: &[SolverExpression]) -> bool {
    let Some((first, rest)) = expressions.split_first() else {
        return true;
    };
    rest.iter().all(|expression| {
        expression.datatype() == first.datatype()
            || (is_numeric_datatype(expression.datatype().as_ref())
                && is_numeric_datatype(first.datatype().as_ref()))
    })
}
