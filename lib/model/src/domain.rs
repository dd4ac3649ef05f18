use crate::interval::SolutionInterval;
use crate::operator::LogicOperator;

/// The set of real values consistent with a constraint, kept as a sorted
/// union of pairwise non-overlapping [`SolutionInterval`]s.
///
/// Every combinator returns a new domain; a domain is never mutated in
/// place. A domain without intervals is ambiguous on its own: it either
/// has no constraint recorded yet (and grants assignment semantics to the
/// next intersection) or a conjunction has excluded every value. The
/// `exhausted` flag tells the two apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolutionDomain {
    intervals: Vec<SolutionInterval>,
    exhausted: bool,
}

impl SolutionDomain {
    /// Creates a domain with no recorded constraint.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a domain covering the union of the given intervals.
    #[must_use]
    pub fn from_initial_intervals(
        intervals: impl IntoIterator<Item = SolutionInterval>,
    ) -> Self {
        intervals
            .into_iter()
            .fold(Self::new(), |domain, interval| domain.or(interval))
    }

    /// The intervals of this domain, sorted ascending by lower bound.
    #[must_use]
    pub fn intervals(&self) -> &[SolutionInterval] {
        &self.intervals
    }

    /// Checks whether no value is covered — either because nothing was
    /// recorded yet, or because a conjunction excluded everything.
    #[must_use]
    pub fn is_domain_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Applies `operator` to this domain and `interval`.
    ///
    /// [`LogicOperator::Not`] complements the domain and ignores the
    /// interval.
    #[must_use]
    pub fn add(&self, interval: SolutionInterval, operator: LogicOperator) -> Self {
        match operator {
            LogicOperator::Or => self.or(interval),
            LogicOperator::And => self.and(interval),
            LogicOperator::Not => self.not(),
        }
    }

    /// Union with a single interval.
    ///
    /// Every existing interval that shares points with the incoming one is
    /// folded into it; the grown interval is inserted and the list
    /// re-sorted, so the result is again minimal, sorted and
    /// non-overlapping.
    #[must_use]
    pub fn or(&self, interval: SolutionInterval) -> Self {
        if interval.is_empty() {
            return self.clone();
        }
        let mut current = interval;
        let mut intervals = Vec::with_capacity(self.intervals.len() + 1);
        for &piece in &self.intervals {
            match SolutionInterval::fuse(piece, current).as_slice() {
                [fused] => current = *fused,
                _ => intervals.push(piece),
            }
        }
        intervals.push(current);
        intervals.sort_by(|first, second| first.lower().total_cmp(&second.lower()));
        Self {
            intervals,
            exhausted: false,
        }
    }

    /// Intersection with a single interval.
    ///
    /// On a domain with no recorded constraint this is an assignment: the
    /// interval becomes the domain. Once constraints exist every piece is
    /// intersected and empty results are dropped; if nothing survives the
    /// domain is exhausted and stays exhausted under further
    /// intersections.
    #[must_use]
    pub fn and(&self, interval: SolutionInterval) -> Self {
        if self.exhausted {
            return self.clone();
        }
        if interval.is_empty() {
            return Self {
                intervals: Vec::new(),
                exhausted: true,
            };
        }
        if self.intervals.is_empty() {
            return Self {
                intervals: vec![interval],
                exhausted: false,
            };
        }
        let mut intervals: Vec<_> = self
            .intervals
            .iter()
            .map(|&piece| SolutionInterval::intersection(piece, interval))
            .filter(|piece| !piece.is_empty())
            .collect();
        intervals.sort_by(|first, second| first.lower().total_cmp(&second.lower()));
        let exhausted = intervals.is_empty();
        Self {
            intervals,
            exhausted,
        }
    }

    /// Intersection with a union of two intervals, as produced by
    /// not-equal constraints and two-boundary range relations.
    ///
    /// Overlapping inputs are redundant; only the first is applied.
    /// Otherwise both intersections are computed independently: if both
    /// vanish the domain is returned unchanged (neither boundary can be
    /// recorded), if one survives it wins, and if both survive the one
    /// with more pieces is kept and the other candidate interval is
    /// unioned into it. The last rule is a deliberate tie-break toward the
    /// looser result.
    #[must_use]
    pub fn and_union(&self, first: SolutionInterval, second: SolutionInterval) -> Self {
        if first.is_overlapping(second) {
            return self.and(first);
        }
        let with_first = self.and(first);
        let with_second = self.and(second);
        match (with_first.is_domain_empty(), with_second.is_domain_empty()) {
            (true, true) => self.clone(),
            (false, true) => with_first,
            (true, false) => with_second,
            (false, false) => {
                if with_first.intervals.len() > with_second.intervals.len() {
                    with_first.or(second)
                } else {
                    with_second.or(first)
                }
            }
        }
    }

    /// The complement of the domain within the reals.
    ///
    /// Each piece contributes the union of its interval inverses, and the
    /// contributions are intersected: the complement of a union is the
    /// intersection of the complements.
    #[must_use]
    pub fn not(&self) -> Self {
        if self.intervals.is_empty() {
            return Self {
                intervals: vec![SolutionInterval::ALL],
                exhausted: false,
            };
        }
        let mut result = Self::new();
        for piece in &self.intervals {
            result = match piece.inverse().as_slice() {
                [] => result.and(SolutionInterval::EMPTY),
                [single] => result.and(*single),
                [first, second, ..] => result.and_union(*first, *second),
            };
        }
        result
    }
}
