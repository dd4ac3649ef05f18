/// A closed interval over the reals, or the empty interval.
///
/// There is no native open-interval representation: a strict bound is
/// encoded by moving the boundary to the nearest representable [`f64`]
/// beyond the excluded value ([`f64::next_up`] / [`f64::next_down`]), so
/// every non-empty interval is closed on both sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolutionInterval {
    lower: f64,
    upper: f64,
    empty: bool,
}

impl SolutionInterval {
    /// The interval covering every real number.
    pub const ALL: Self = Self {
        lower: f64::NEG_INFINITY,
        upper: f64::INFINITY,
        empty: false,
    };

    /// The interval covering no value at all.
    pub const EMPTY: Self = Self {
        lower: f64::INFINITY,
        upper: f64::NEG_INFINITY,
        empty: true,
    };

    /// Creates the closed interval `[lower, upper]`.
    ///
    /// Fails with [`InvalidIntervalError`] if `lower > upper`. Use
    /// [`SolutionInterval::EMPTY`] for the interval without values.
    pub fn new(lower: f64, upper: f64) -> Result<Self, InvalidIntervalError> {
        if lower > upper {
            return Err(InvalidIntervalError { lower, upper });
        }
        Ok(Self {
            lower,
            upper,
            empty: false,
        })
    }

    /// The lower bound. Meaningless when the interval is empty.
    #[inline]
    #[must_use]
    pub fn lower(self) -> f64 {
        self.lower
    }

    /// The upper bound. Meaningless when the interval is empty.
    #[inline]
    #[must_use]
    pub fn upper(self) -> f64 {
        self.upper
    }

    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.empty
    }

    /// Checks whether the two closed intervals share at least one point.
    ///
    /// The empty interval overlaps nothing, not even itself.
    #[must_use]
    pub fn is_overlapping(self, other: Self) -> bool {
        if self.empty || other.empty {
            return false;
        }
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// Checks whether `other` lies fully inside this interval.
    #[must_use]
    pub fn is_inside(self, other: Self) -> bool {
        if self.empty || other.empty {
            return false;
        }
        self.lower <= other.lower && other.upper <= self.upper
    }

    /// Merges two intervals into one if they share points.
    ///
    /// An empty input vanishes; two disjoint non-empty inputs are returned
    /// unchanged, in input order.
    #[must_use]
    pub fn fuse(first: Self, second: Self) -> Vec<Self> {
        if first.empty {
            return vec![second];
        }
        if second.empty {
            return vec![first];
        }
        if first.is_overlapping(second) {
            vec![Self {
                lower: first.lower.min(second.lower),
                upper: first.upper.max(second.upper),
                empty: false,
            }]
        } else {
            vec![first, second]
        }
    }

    /// The complement of this interval within the reals.
    ///
    /// A finite boundary of the complement sits one representable double
    /// beyond the corresponding bound of this interval.
    #[must_use]
    pub fn inverse(self) -> Vec<Self> {
        if self.empty {
            return vec![Self::ALL];
        }
        match (
            self.lower == f64::NEG_INFINITY,
            self.upper == f64::INFINITY,
        ) {
            (true, true) => Vec::new(),
            (true, false) => vec![Self {
                lower: self.upper.next_up(),
                upper: f64::INFINITY,
                empty: false,
            }],
            (false, true) => vec![Self {
                lower: f64::NEG_INFINITY,
                upper: self.lower.next_down(),
                empty: false,
            }],
            (false, false) => vec![
                Self {
                    lower: f64::NEG_INFINITY,
                    upper: self.lower.next_down(),
                    empty: false,
                },
                Self {
                    lower: self.upper.next_up(),
                    upper: f64::INFINITY,
                    empty: false,
                },
            ],
        }
    }

    /// The intersection of two intervals; empty when they share no point.
    #[must_use]
    pub fn intersection(first: Self, second: Self) -> Self {
        if !first.is_overlapping(second) {
            return Self::EMPTY;
        }
        Self {
            lower: first.lower.max(second.lower),
            upper: first.upper.min(second.upper),
            empty: false,
        }
    }
}

/// An interval was constructed with its lower bound above its upper bound.
///
/// This is an invariant violation rather than an expected failure; it
/// usually points at malformed relation metadata.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("invalid interval: lower bound {lower} is greater than upper bound {upper}")]
pub struct InvalidIntervalError {
    lower: f64,
    upper: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_inverted_bounds() {
        SolutionInterval::new(2.0, 1.0).unwrap_err();
        SolutionInterval::new(1.0, 1.0).unwrap();
        SolutionInterval::new(f64::NEG_INFINITY, f64::INFINITY).unwrap();
    }

    #[test]
    fn overlap_is_reflexive_and_symmetric() {
        let interval = SolutionInterval::new(1.0, 5.0).unwrap();
        let other = SolutionInterval::new(5.0, 9.0).unwrap();
        assert!(interval.is_overlapping(interval));
        assert!(interval.is_overlapping(other));
        assert!(other.is_overlapping(interval));
    }

    #[test]
    fn empty_overlaps_nothing() {
        let interval = SolutionInterval::new(1.0, 5.0).unwrap();
        assert!(!SolutionInterval::EMPTY.is_overlapping(interval));
        assert!(!interval.is_overlapping(SolutionInterval::EMPTY));
        assert!(!SolutionInterval::EMPTY.is_overlapping(SolutionInterval::EMPTY));
    }

    #[test]
    fn is_inside_requires_full_containment() {
        let outer = SolutionInterval::new(0.0, 10.0).unwrap();
        let inner = SolutionInterval::new(2.0, 3.0).unwrap();
        assert!(outer.is_inside(inner));
        assert!(!inner.is_inside(outer));
        assert!(!outer.is_inside(SolutionInterval::EMPTY));
    }

    #[test]
    fn fuse_merges_overlapping_intervals() {
        let first = SolutionInterval::new(1.0, 5.0).unwrap();
        let second = SolutionInterval::new(4.0, 9.0).unwrap();
        let fused = SolutionInterval::fuse(first, second);
        assert_eq!(fused, vec![SolutionInterval::new(1.0, 9.0).unwrap()]);
    }

    #[test]
    fn fuse_keeps_disjoint_intervals_in_input_order() {
        let first = SolutionInterval::new(6.0, 9.0).unwrap();
        let second = SolutionInterval::new(1.0, 5.0).unwrap();
        assert_eq!(SolutionInterval::fuse(first, second), vec![first, second]);
    }

    #[test]
    fn fuse_drops_empty_inputs() {
        let interval = SolutionInterval::new(1.0, 5.0).unwrap();
        assert_eq!(
            SolutionInterval::fuse(SolutionInterval::EMPTY, interval),
            vec![interval]
        );
        assert_eq!(
            SolutionInterval::fuse(interval, SolutionInterval::EMPTY),
            vec![interval]
        );
        assert_eq!(
            SolutionInterval::fuse(SolutionInterval::EMPTY, SolutionInterval::EMPTY),
            vec![SolutionInterval::EMPTY]
        );
    }

    #[test]
    fn inverse_of_empty_is_the_full_line() {
        assert_eq!(SolutionInterval::EMPTY.inverse(), vec![SolutionInterval::ALL]);
    }

    #[test]
    fn inverse_of_the_full_line_is_empty() {
        assert_eq!(SolutionInterval::ALL.inverse(), Vec::new());
    }

    #[test]
    fn inverse_of_half_bounded_interval() {
        let interval = SolutionInterval::new(f64::NEG_INFINITY, 5.0).unwrap();
        let inverse = interval.inverse();
        assert_eq!(inverse.len(), 1);
        assert_eq!(inverse[0].lower(), 5.0_f64.next_up());
        assert_eq!(inverse[0].upper(), f64::INFINITY);
    }

    #[test]
    fn inverse_of_bounded_interval_splits_at_ulp_boundaries() {
        let interval = SolutionInterval::new(2.0, 5.0).unwrap();
        let inverse = interval.inverse();
        assert_eq!(inverse.len(), 2);
        assert_eq!(inverse[0].lower(), f64::NEG_INFINITY);
        assert_eq!(inverse[0].upper(), 2.0_f64.next_down());
        assert_eq!(inverse[1].lower(), 5.0_f64.next_up());
        assert_eq!(inverse[1].upper(), f64::INFINITY);
    }

    #[test]
    fn intersection_of_overlapping_intervals() {
        let first = SolutionInterval::new(1.0, 5.0).unwrap();
        let second = SolutionInterval::new(3.0, 9.0).unwrap();
        assert_eq!(
            SolutionInterval::intersection(first, second),
            SolutionInterval::new(3.0, 5.0).unwrap()
        );
    }

    #[test]
    fn intersection_of_disjoint_intervals_is_empty() {
        let first = SolutionInterval::new(1.0, 2.0).unwrap();
        let second = SolutionInterval::new(3.0, 4.0).unwrap();
        assert!(SolutionInterval::intersection(first, second).is_empty());
        assert!(SolutionInterval::intersection(first, SolutionInterval::EMPTY).is_empty());
    }
}
