use crate::error::SolverError;
use crate::expression::{are_types_compatible, SolverExpression};
use crate::resolver::{apply_intervals, collect_comparisons, resolve_filter_domain};
use itertools::Itertools;
use oxrdf::{NamedNode, Variable};
use rustc_hash::FxHashMap;
use spargebra::algebra::{Expression, GraphPattern, PropertyPathExpression};
use spargebra::term::{NamedNodePattern, TermPattern, TriplePattern};
use spargebra::Query;
use std::collections::HashMap;
use tree_reach_model::{LogicOperator, SolutionDomain, SolutionInterval, TreeRelation};

/// Decides for every relation target of a TREE node whether it can still
/// lead to bindings satisfying the query's filter.
///
/// Relations are grouped by `(target, path)` so that the two boundaries of
/// a range act as one constraint, and a target reachable through several
/// paths is followed if any of them accepts it. No error escapes: whatever
/// the solver cannot interpret makes the affected target followed, so a
/// solver limitation can cause extra crawling but never lost answers.
#[must_use]
pub fn classify_relations(
    relations: &[TreeRelation],
    pattern: &GraphPattern,
) -> HashMap<String, bool> {
    if relations.is_empty() {
        return HashMap::new();
    }
    let Some(filter) = find_filter_expression(pattern) else {
        return HashMap::new();
    };

    // One resolved domain per variable, shared by every relation of this call.
    let mut domains: FxHashMap<Variable, SolutionDomain> = FxHashMap::default();
    let mut decisions: HashMap<String, bool> = HashMap::new();

    let groups = relations
        .iter()
        .into_group_map_by(|relation| (relation.node.clone(), relation.path.clone()));
    for ((node, path), members) in groups {
        let follow = group_follows(&members, path.as_ref(), filter, pattern, &mut domains)
            .unwrap_or_else(|error| {
                tracing::debug!(node = %node, %error, "solver failed for relation group, following");
                true
            });
        tracing::debug!(node = %node, follow, "classified relation group");
        decisions
            .entry(node)
            .and_modify(|decision| *decision |= follow)
            .or_insert(follow);
    }
    decisions
}

/// Convenience entry resolving the operation tree out of a parsed query.
#[must_use]
pub fn classify_relations_in_query(
    relations: &[TreeRelation],
    query: &Query,
) -> HashMap<String, bool> {
    match query {
        Query::Select { pattern, .. }
        | Query::Construct { pattern, .. }
        | Query::Describe { pattern, .. }
        | Query::Ask { pattern, .. } => classify_relations(relations, pattern),
    }
}

/// Locates the query's `FILTER` expression by descending the chain of
/// single-child wrappers from the root of the operation tree.
#[must_use]
pub fn find_filter_expression(pattern: &GraphPattern) -> Option<&Expression> {
    match pattern {
        GraphPattern::Filter { expr, .. } => Some(expr),
        GraphPattern::Graph { inner, .. }
        | GraphPattern::Extend { inner, .. }
        | GraphPattern::OrderBy { inner, .. }
        | GraphPattern::Project { inner, .. }
        | GraphPattern::Distinct { inner }
        | GraphPattern::Reduced { inner }
        | GraphPattern::Slice { inner, .. }
        | GraphPattern::Group { inner, .. } => find_filter_expression(inner),
        _ => None,
    }
}

/// Decides one `(target, path)` group of relations.
fn group_follows(
    members: &[&TreeRelation],
    path: Option<&NamedNode>,
    filter: &Expression,
    pattern: &GraphPattern,
    domains: &mut FxHashMap<Variable, SolutionDomain>,
) -> Result<bool, SolverError> {
    let Some(representative) = members.first() else {
        return Ok(true);
    };
    let Some(path) = path else {
        return Ok(true);
    };
    if representative.value.is_none() {
        return Ok(true);
    }

    let variables = variables_bound_by_path(pattern, path);
    if variables.is_empty() {
        // The filter cannot constrain a path absent from the query shape.
        return Ok(true);
    }

    for variable in &variables {
        let domain = domains
            .entry(variable.clone())
            .or_insert_with(|| resolve_filter_domain(filter, variable))
            .clone();
        for member in members {
            if member_reachable(member, variable, filter, &domain)? {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Checks whether one relation's own interval intersects the filter
/// domain of `variable`.
fn member_reachable(
    relation: &TreeRelation,
    variable: &Variable,
    filter: &Expression,
    domain: &SolutionDomain,
) -> Result<bool, SolverError> {
    let intervals = match SolverExpression::from_relation(relation, variable) {
        Ok(expression) => {
            let mut comparisons = vec![expression.clone()];
            collect_comparisons(filter, variable, &mut comparisons);
            if !are_types_compatible(&comparisons) {
                // No defined ordering across families, nothing to prune on.
                return Ok(true);
            }
            expression.solution_intervals()?
        }
        Err(SolverError::InvalidInterval(error)) => return Err(error.into()),
        Err(_) => vec![SolutionInterval::ALL],
    };
    let constrained = apply_intervals(domain.clone(), &intervals, LogicOperator::And);
    Ok(!constrained.is_domain_empty())
}

/// Every variable the query binds through `path` in a triple or property
/// path pattern.
fn variables_bound_by_path(pattern: &GraphPattern, path: &NamedNode) -> Vec<Variable> {
    let mut variables = Vec::new();
    collect_path_variables(pattern, path, &mut variables);
    variables
}

fn collect_path_variables(pattern: &GraphPattern, path: &NamedNode, into: &mut Vec<Variable>) {
    match pattern {
        GraphPattern::Bgp { patterns } => {
            for triple in patterns {
                push_triple_variable(triple, path, into);
            }
        }
        GraphPattern::Path {
            path: expression,
            object,
            ..
        } => {
            if let (PropertyPathExpression::NamedNode(predicate), TermPattern::Variable(variable)) =
                (expression, object)
            {
                if predicate == path && !into.contains(variable) {
                    into.push(variable.clone());
                }
            }
        }
        GraphPattern::Join { left, right }
        | GraphPattern::Union { left, right }
        | GraphPattern::LeftJoin { left, right, .. }
        | GraphPattern::Minus { left, right } => {
            collect_path_variables(left, path, into);
            collect_path_variables(right, path, into);
        }
        GraphPattern::Filter { inner, .. }
        | GraphPattern::Graph { inner, .. }
        | GraphPattern::Extend { inner, .. }
        | GraphPattern::OrderBy { inner, .. }
        | GraphPattern::Project { inner, .. }
        | GraphPattern::Distinct { inner }
        | GraphPattern::Reduced { inner }
        | GraphPattern::Slice { inner, .. }
        | GraphPattern::Group { inner, .. }
        | GraphPattern::Service { inner, .. } => collect_path_variables(inner, path, into),
        _ => {}
    }
}

fn push_triple_variable(triple: &TriplePattern, path: &NamedNode, into: &mut Vec<Variable>) {
    let NamedNodePattern::NamedNode(predicate) = &triple.predicate else {
        return;
    };
    if predicate != path {
        return;
    }
    if let TermPattern::Variable(variable) = &triple.object {
        if !into.contains(variable) {
            into.push(variable.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::vocab::xsd;
    use oxrdf::Literal;
    use tree_reach_model::{RelationOperator, RelationValue};

    const EX_PATH: &str = "http://example.org/path";

    fn parse(query: &str) -> Query {
        Query::parse(query, None).unwrap()
    }

    fn pattern(query: &Query) -> &GraphPattern {
        match query {
            Query::Select { pattern, .. } => pattern,
            _ => panic!("expected a SELECT query"),
        }
    }

    fn relation(node: &str, value: &str, operator: RelationOperator) -> TreeRelation {
        TreeRelation {
            node: node.to_owned(),
            path: Some(NamedNode::new_unchecked(EX_PATH)),
            value: Some(RelationValue::new(Literal::new_typed_literal(
                value,
                xsd::INTEGER,
            ))),
            operator: Some(operator),
            remaining_items: None,
        }
    }

    #[test]
    fn filter_is_found_under_projection() {
        let query = parse(
            "SELECT ?o WHERE { <http://example.org/foo> <http://example.org/path> ?o . FILTER(?o = 5) }",
        );
        assert!(find_filter_expression(pattern(&query)).is_some());
    }

    #[test]
    fn no_filter_yields_no_decisions() {
        let query = parse(
            "SELECT ?o WHERE { <http://example.org/foo> <http://example.org/path> ?o }",
        );
        let relations = vec![relation("http://example.org/page/2", "5", RelationOperator::EqualTo)];
        assert!(classify_relations_in_query(&relations, &query).is_empty());
    }

    #[test]
    fn no_relations_yield_no_decisions() {
        let query = parse(
            "SELECT ?o WHERE { <http://example.org/foo> <http://example.org/path> ?o . FILTER(?o = 5) }",
        );
        assert!(classify_relations_in_query(&[], &query).is_empty());
    }

    #[test]
    fn variables_are_looked_up_by_predicate() {
        let query = parse(
            "SELECT * WHERE { ?s <http://example.org/path> ?o ; <http://example.org/other> ?p . FILTER(?o = 5) }",
        );
        let path = NamedNode::new_unchecked(EX_PATH);
        let variables = variables_bound_by_path(pattern(&query), &path);
        assert_eq!(variables, vec![Variable::new_unchecked("o")]);
    }

    #[test]
    fn property_path_patterns_bind_variables_too() {
        let query = parse(
            "SELECT * WHERE { ?s <http://example.org/path>+ ?o . FILTER(?o = 5) }",
        );
        // A one-step path parses into a plain triple pattern; the `+` form
        // stays a Path pattern and is not a direct binding.
        let path = NamedNode::new_unchecked(EX_PATH);
        assert!(variables_bound_by_path(pattern(&query), &path).is_empty());
    }
}
