//! The discrete distribution contract.

use dd_core::{ensure, Integer, Probability, Real, Result};

use crate::inverse_search::InverseCdfSearch;

/// An integer-valued probability distribution.
///
/// Implementors supply [`probability`](Self::probability) and
/// [`cumulative_probability`](Self::cumulative_probability); interval
/// probabilities and the inverse CDF are provided on top of them.  Support
/// bounds are optional but let the inverse CDF skip bracketing.
///
/// Implementations are expected to be immutable values, so every method is
/// a pure function of the parameters and the argument.
///
/// # Example
/// ```
/// use dd_math::distributions::{BinomialDistribution, DiscreteDistribution};
///
/// let d = BinomialDistribution::new(10, 0.5).unwrap();
/// assert!((d.probability(5) - 0.2461).abs() < 1e-4);
/// assert!((d.cumulative_probability(5) - 0.6230).abs() < 1e-4);
/// assert_eq!(d.inverse_cumulative_probability(0.6230).unwrap(), 5);
/// ```
pub trait DiscreteDistribution {
    /// Probability mass `P(X = x)`.  Zero outside the support.
    fn probability(&self, x: Integer) -> Real;

    /// Cumulative probability `P(X ≤ x)`.
    ///
    /// Zero below the support, one at or above its upper end.
    fn cumulative_probability(&self, x: Integer) -> Probability;

    /// `P(x0 ≤ X ≤ x1) = F(x1) − F(x0 − 1)`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`](dd_core::Error::InvalidArgument) if
    /// `x0 > x1`.
    fn cumulative_probability_between(&self, x0: Integer, x1: Integer) -> Result<Probability> {
        ensure!(
            x0 <= x1,
            "lower end ({x0}) must be less than or equal to upper end ({x1})"
        );
        let below = match x0.checked_sub(1) {
            Some(x) => self.cumulative_probability(x),
            None => 0.0,
        };
        Ok((self.cumulative_probability(x1) - below).clamp(0.0, 1.0))
    }

    /// Smallest `x` with `P(X ≤ x) ≥ p`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`](dd_core::Error::InvalidArgument) unless
    /// `0 < p < 1`;
    /// [`Error::InternalConsistency`](dd_core::Error::InternalConsistency) if
    /// the CDF never reaches `p`.
    fn inverse_cumulative_probability(&self, p: Probability) -> Result<Integer> {
        InverseCdfSearch::default().solve(self, p)
    }

    /// Smallest integer that can carry mass.
    fn support_lower_bound(&self) -> Integer {
        0
    }

    /// Largest integer that can carry mass, or `None` when the support is
    /// unbounded above.
    fn support_upper_bound(&self) -> Option<Integer> {
        None
    }
}

impl<D: DiscreteDistribution + ?Sized> DiscreteDistribution for &D {
    fn probability(&self, x: Integer) -> Real {
        (**self).probability(x)
    }

    fn cumulative_probability(&self, x: Integer) -> Probability {
        (**self).cumulative_probability(x)
    }

    fn cumulative_probability_between(&self, x0: Integer, x1: Integer) -> Result<Probability> {
        (**self).cumulative_probability_between(x0, x1)
    }

    fn inverse_cumulative_probability(&self, p: Probability) -> Result<Integer> {
        (**self).inverse_cumulative_probability(p)
    }

    fn support_lower_bound(&self) -> Integer {
        (**self).support_lower_bound()
    }

    fn support_upper_bound(&self) -> Option<Integer> {
        (**self).support_upper_bound()
    }
}

/// Largest trial, success, or population count the shipped families accept.
///
/// Their masses are evaluated in log space, where the absolute rounding
/// error grows like `n ln n` times machine epsilon; at this size it is near
/// `1e-5` relative.
pub const MAX_COUNT: u64 = i32::MAX as u64;

/// Convert a query point to a `statrs` index, `None` below zero.
pub(crate) fn as_index(x: Integer) -> Option<u64> {
    u64::try_from(x).ok()
}

/// Pin a computed probability into `[0, 1]`.
///
/// NaN is passed through rather than clamped: it never reaches a target in
/// the inverse search, which then reports an error instead of a quantile.
pub(crate) fn unit_interval(value: Real) -> Probability {
    if value.is_nan() {
        value
    } else {
        value.clamp(0.0, 1.0)
    }
}
