use crate::error::SolverError;
use crate::expression::SolverExpression;
use oxrdf::vocab::xsd;
use oxrdf::{Literal, Variable};
use spargebra::algebra::Expression;
use tree_reach_model::{LogicOperator, RelationOperator, SolutionDomain, SolutionInterval};

/// Resolves the domain of values `variable` may take under `expression`.
///
/// Never fails: expression shapes or datatypes outside the supported
/// fragment widen the result to the full real line, so the crawler can
/// only follow too many links, never too few.
#[must_use]
pub fn resolve_filter_domain(expression: &Expression, variable: &Variable) -> SolutionDomain {
    match resolve(expression, variable, SolutionDomain::new(), LogicOperator::Or) {
        Ok(domain) => domain,
        Err(error) => {
            tracing::debug!(
                variable = variable.as_str(),
                %error,
                "filter outside the supported fragment, widening to the full line"
            );
            SolutionDomain::from_initial_intervals([SolutionInterval::ALL])
        }
    }
}

/// One step of the recursive resolution.
///
/// The accumulator is threaded through the tree: connectives switch the
/// active combinator and recurse, comparisons and boolean literals apply
/// intervals to the accumulator with it.
fn resolve(
    expression: &Expression,
    variable: &Variable,
    domain: SolutionDomain,
    operator: LogicOperator,
) -> Result<SolutionDomain, SolverError> {
    match expression {
        Expression::Or(lhs, rhs) => {
            let domain = resolve(lhs, variable, domain, LogicOperator::Or)?;
            resolve(rhs, variable, domain, LogicOperator::Or)
        }
        Expression::And(lhs, rhs) => {
            let domain = resolve(lhs, variable, domain, LogicOperator::And)?;
            resolve(rhs, variable, domain, LogicOperator::And)
        }
        Expression::Not(inner) => match comparison_parts(inner) {
            // `!=` has no node of its own: the parser encodes it as a
            // negated equality, and De Morgan rewrites produce the same
            // shape for every negated comparison.
            Some((comparison, lhs, rhs)) => apply_comparison(
                comparison.complement(),
                lhs,
                rhs,
                variable,
                domain,
                operator,
            ),
            None => resolve(&negate_expression(inner)?, variable, domain, operator),
        },
        Expression::Literal(literal) if literal.datatype() == xsd::BOOLEAN => {
            let interval = match literal.value() {
                "true" | "1" => SolutionInterval::ALL,
                "false" | "0" => SolutionInterval::EMPTY,
                other => {
                    return Err(SolverError::MalformedExpression(format!(
                        "invalid boolean literal: {other}"
                    )))
                }
            };
            Ok(domain.add(interval, operator))
        }
        Expression::Equal(..)
        | Expression::Less(..)
        | Expression::LessOrEqual(..)
        | Expression::Greater(..)
        | Expression::GreaterOrEqual(..) => {
            let Some((comparison, lhs, rhs)) = comparison_parts(expression) else {
                return Err(SolverError::MalformedExpression(
                    "comparison node without operands".to_owned(),
                ));
            };
            apply_comparison(comparison, lhs, rhs, variable, domain, operator)
        }
        _ => Err(SolverError::MalformedExpression(
            "expression form outside the comparison fragment".to_owned(),
        )),
    }
}

/// Extracts a comparison and applies its intervals to the accumulator.
fn apply_comparison(
    comparison: RelationOperator,
    lhs: &Expression,
    rhs: &Expression,
    variable: &Variable,
    domain: SolutionDomain,
    operator: LogicOperator,
) -> Result<SolutionDomain, SolverError> {
    let expression = match SolverExpression::from_comparison(comparison, lhs, rhs, variable) {
        Ok(expression) => expression,
        // About another variable: it must not constrain the result.
        Err(SolverError::MismatchedVariable(_)) => {
            return Ok(domain.add(SolutionInterval::ALL, operator))
        }
        Err(error) => return Err(error),
    };
    let intervals = expression.solution_intervals()?;
    Ok(apply_intervals(domain, &intervals, operator))
}

/// Applies a one- or two-piece constraint with the active combinator.
///
/// A two-piece union under And goes through the pairwise intersection;
/// under Or the pieces are unioned in sequence.
pub(crate) fn apply_intervals(
    domain: SolutionDomain,
    intervals: &[SolutionInterval],
    operator: LogicOperator,
) -> SolutionDomain {
    match (operator, intervals) {
        (LogicOperator::And, [first, second, ..]) => domain.and_union(*first, *second),
        _ => intervals
            .iter()
            .fold(domain, |domain, &interval| domain.add(interval, operator)),
    }
}

/// Splits a comparison node into its operator and operands.
fn comparison_parts(
    expression: &Expression,
) -> Option<(RelationOperator, &Expression, &Expression)> {
    match expression {
        Expression::Equal(lhs, rhs) => Some((RelationOperator::EqualTo, lhs, rhs)),
        Expression::Less(lhs, rhs) => Some((RelationOperator::LessThan, lhs, rhs)),
        Expression::LessOrEqual(lhs, rhs) => Some((RelationOperator::LessThanOrEqual, lhs, rhs)),
        Expression::Greater(lhs, rhs) => Some((RelationOperator::GreaterThan, lhs, rhs)),
        Expression::GreaterOrEqual(lhs, rhs) => {
            Some((RelationOperator::GreaterThanOrEqual, lhs, rhs))
        }
        _ => None,
    }
}

/// Rewrites an expression into its logical negation without evaluating it.
///
/// The rewrite is one level deep and pure: connective arguments are
/// wrapped in `Not` and unwrapped again when recursion reaches them, so
/// stacked negations cancel out through repeated rewriting. Comparisons
/// never reach this function; the caller complements their operator
/// directly.
fn negate_expression(expression: &Expression) -> Result<Expression, SolverError> {
    Ok(match expression {
        Expression::Not(inner) => inner.as_ref().clone(),
        Expression::And(lhs, rhs) => Expression::Or(
            Box::new(Expression::Not(lhs.clone())),
            Box::new(Expression::Not(rhs.clone())),
        ),
        Expression::Or(lhs, rhs) => Expression::And(
            Box::new(Expression::Not(lhs.clone())),
            Box::new(Expression::Not(rhs.clone())),
        ),
        Expression::Literal(literal) if literal.datatype() == xsd::BOOLEAN => {
            let flipped = !matches!(literal.value(), "true" | "1");
            Expression::Literal(Literal::from(flipped))
        }
        _ => {
            return Err(SolverError::MalformedExpression(
                "cannot negate an expression outside the comparison fragment".to_owned(),
            ))
        }
    })
}

/// Collects every comparison about `variable` in the filter, skipping
/// terms the extraction cannot interpret.
pub(crate) fn collect_comparisons(
    expression: &Expression,
    variable: &Variable,
    into: &mut Vec<SolverExpression>,
) {
    match expression {
        Expression::Or(lhs, rhs) | Expression::And(lhs, rhs) => {
            collect_comparisons(lhs, variable, into);
            collect_comparisons(rhs, variable, into);
        }
        Expression::Not(inner) => collect_comparisons(inner, variable, into),
        other => {
            if let Some((comparison, lhs, rhs)) = comparison_parts(other) {
                if let Ok(expression) =
                    SolverExpression::from_comparison(comparison, lhs, rhs, variable)
                {
                    into.push(expression);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::vocab::xsd;

    fn variable(name: &str) -> Variable {
        Variable::new_unchecked(name)
    }

    fn integer(value: &str) -> Expression {
        Expression::Literal(Literal::new_typed_literal(value, xsd::INTEGER))
    }

    fn comparison(
        operator: RelationOperator,
        name: &str,
        value: &str,
    ) -> Expression {
        let lhs = Box::new(Expression::Variable(variable(name)));
        let rhs = Box::new(integer(value));
        match operator {
            RelationOperator::EqualTo => Expression::Equal(lhs, rhs),
            RelationOperator::NotEqualTo => {
                Expression::Not(Box::new(Expression::Equal(lhs, rhs)))
            }
            RelationOperator::LessThan => Expression::Less(lhs, rhs),
            RelationOperator::LessThanOrEqual => Expression::LessOrEqual(lhs, rhs),
            RelationOperator::GreaterThan => Expression::Greater(lhs, rhs),
            RelationOperator::GreaterThanOrEqual => Expression::GreaterOrEqual(lhs, rhs),
        }
    }

    fn and(lhs: Expression, rhs: Expression) -> Expression {
        Expression::And(Box::new(lhs), Box::new(rhs))
    }

    fn or(lhs: Expression, rhs: Expression) -> Expression {
        Expression::Or(Box::new(lhs), Box::new(rhs))
    }

    fn not(inner: Expression) -> Expression {
        Expression::Not(Box::new(inner))
    }

    #[test]
    fn conjunction_narrows_to_a_point() {
        // x = 2 && x < 5
        let filter = and(
            comparison(RelationOperator::EqualTo, "x", "2"),
            comparison(RelationOperator::LessThan, "x", "5"),
        );
        let domain = resolve_filter_domain(&filter, &variable("x"));
        assert_eq!(
            domain.intervals(),
            &[SolutionInterval::new(2.0, 2.0).unwrap()]
        );
    }

    #[test]
    fn negated_conjunction_splits_the_line() {
        // !(x = 2 && x < 5)
        let filter = not(and(
            comparison(RelationOperator::EqualTo, "x", "2"),
            comparison(RelationOperator::LessThan, "x", "5"),
        ));
        let domain = resolve_filter_domain(&filter, &variable("x"));
        assert_eq!(domain.intervals().len(), 2);
        assert_eq!(domain.intervals()[0].upper(), 2.0_f64.next_down());
        assert_eq!(domain.intervals()[1].lower(), 2.0_f64.next_up());
    }

    #[test]
    fn triple_negation_equals_single_negation() {
        let single = not(and(
            comparison(RelationOperator::EqualTo, "x", "2"),
            comparison(RelationOperator::LessThan, "x", "5"),
        ));
        let triple = not(not(not(and(
            comparison(RelationOperator::EqualTo, "x", "2"),
            comparison(RelationOperator::LessThan, "x", "5"),
        ))));
        let target = variable("x");
        assert_eq!(
            resolve_filter_domain(&single, &target),
            resolve_filter_domain(&triple, &target)
        );
    }

    #[test]
    fn double_negation_restores_the_domain() {
        let plain = comparison(RelationOperator::EqualTo, "x", "2");
        let double = not(not(comparison(RelationOperator::EqualTo, "x", "2")));
        let target = variable("x");
        assert_eq!(
            resolve_filter_domain(&plain, &target),
            resolve_filter_domain(&double, &target)
        );
    }

    #[test]
    fn not_equal_under_conjunction_keeps_both_sides() {
        // x != 5 && x > 2
        let filter = and(
            comparison(RelationOperator::NotEqualTo, "x", "5"),
            comparison(RelationOperator::GreaterThan, "x", "2"),
        );
        let domain = resolve_filter_domain(&filter, &variable("x"));
        assert_eq!(domain.intervals().len(), 2);
        assert_eq!(domain.intervals()[0].lower(), 2.0_f64.next_up());
        assert_eq!(domain.intervals()[0].upper(), 5.0_f64.next_down());
        assert_eq!(domain.intervals()[1].lower(), 5.0_f64.next_up());
    }

    #[test]
    fn disjunction_unions_the_branches() {
        // x <= 2 || x > 8
        let filter = or(
            comparison(RelationOperator::LessThanOrEqual, "x", "2"),
            comparison(RelationOperator::GreaterThan, "x", "8"),
        );
        let domain = resolve_filter_domain(&filter, &variable("x"));
        assert_eq!(domain.intervals().len(), 2);
        assert_eq!(domain.intervals()[0].upper(), 2.0);
        assert_eq!(domain.intervals()[1].lower(), 8.0_f64.next_up());
    }

    #[test]
    fn comparisons_about_other_variables_do_not_constrain() {
        // x = 2 && y = 3, solved for x
        let filter = and(
            comparison(RelationOperator::EqualTo, "x", "2"),
            comparison(RelationOperator::EqualTo, "y", "3"),
        );
        let domain = resolve_filter_domain(&filter, &variable("x"));
        assert_eq!(
            domain.intervals(),
            &[SolutionInterval::new(2.0, 2.0).unwrap()]
        );
        // and solved for y
        let domain = resolve_filter_domain(&filter, &variable("y"));
        assert_eq!(
            domain.intervals(),
            &[SolutionInterval::new(3.0, 3.0).unwrap()]
        );
    }

    #[test]
    fn boolean_literals_resolve_to_everything_or_nothing() {
        let domain = resolve_filter_domain(&Expression::Literal(Literal::from(true)), &variable("x"));
        assert_eq!(domain.intervals(), &[SolutionInterval::ALL]);
        let domain =
            resolve_filter_domain(&Expression::Literal(Literal::from(false)), &variable("x"));
        assert!(domain.is_domain_empty());
    }

    #[test]
    fn negated_boolean_literals_flip() {
        let filter = not(Expression::Literal(Literal::from(false)));
        let domain = resolve_filter_domain(&filter, &variable("x"));
        assert_eq!(domain.intervals(), &[SolutionInterval::ALL]);
    }

    #[test]
    fn unsupported_forms_widen_to_the_full_line() {
        let filter = Expression::Bound(variable("x"));
        let domain = resolve_filter_domain(&filter, &variable("x"));
        assert_eq!(domain.intervals(), &[SolutionInterval::ALL]);
    }

    #[test]
    fn unsupported_datatypes_widen_to_the_full_line() {
        // x = "apple", solved for x
        let filter = Expression::Equal(
            Box::new(Expression::Variable(variable("x"))),
            Box::new(Expression::Literal(Literal::new_simple_literal("apple"))),
        );
        let domain = resolve_filter_domain(&filter, &variable("x"));
        assert_eq!(domain.intervals(), &[SolutionInterval::ALL]);
    }

    #[test]
    fn collect_comparisons_walks_the_whole_tree() {
        let filter = not(and(
            comparison(RelationOperator::EqualTo, "x", "2"),
            or(
                comparison(RelationOperator::LessThan, "x", "5"),
                comparison(RelationOperator::EqualTo, "y", "3"),
            ),
        ));
        let mut found = Vec::new();
        collect_comparisons(&filter, &variable("x"), &mut found);
        assert_eq!(found.len(), 2);
    }
}
