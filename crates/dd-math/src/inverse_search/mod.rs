//! Inverse-CDF search over integer-valued step functions.
//!
//! [`InverseCdfSearch`] finds the smallest integer `x` with `F(x) ≥ p` for
//! any non-decreasing cumulative distribution function `F`, using nothing
//! but evaluations of `F`.  When the support has a known upper bound the
//! bracket is `[lower, upper]`; otherwise it is found by probing
//! `lower + 1, lower + 2, lower + 4, …` until the CDF reaches `p`.  The
//! bracket is then narrowed by bisection.
//!
//! The engine keeps no state between calls and is `Copy`, so one value can
//! serve any number of threads.

use dd_core::{ensure, ensure_post, fail, Integer, Real, Result};
use log::{debug, trace, warn};

use crate::comparison::{reaches, DEFAULT_ULPS};
use crate::distributions::DiscreteDistribution;

/// Default cap on the number of step doublings while bracketing.
///
/// With a step starting at 1, 62 doublings cover every non-negative offset
/// representable in an `i64`.
pub const MAX_BRACKET_EXPANSIONS: u32 = 62;

/// Default absolute tolerance when comparing a CDF value against `p`.
///
/// Zero: a fixed floor would let a CDF of about 0 reach any tiny `p`, so
/// only the relative ulp tolerance absorbs rounding.
pub const DEFAULT_ABSOLUTE_TOLERANCE: Real = 0.0;

/// Check that `p` lies in the open interval `(0, 1)`.
///
/// NaN is rejected.
pub fn check_probability(p: Real) -> Result<()> {
    ensure!(
        p > 0.0 && p < 1.0,
        "probability must be in the open interval (0, 1), got {p}"
    );
    Ok(())
}

/// Bracketing-plus-bisection quantile search for discrete distributions.
///
/// # Example
/// ```
/// use dd_math::inverse_search::InverseCdfSearch;
///
/// // CDF of a fair six-sided die.
/// let cdf = |x: i64| (x.clamp(0, 6) as f64) / 6.0;
/// let search = InverseCdfSearch::default();
/// assert_eq!(search.solve_with(cdf, 1, Some(6), 0.5).unwrap(), 3);
/// assert_eq!(search.solve_with(cdf, 1, None, 0.51).unwrap(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseCdfSearch {
    tolerance_ulps: u32,
    absolute_tolerance: Real,
    max_bracket_expansions: u32,
}

impl Default for InverseCdfSearch {
    fn default() -> Self {
        Self {
            tolerance_ulps: DEFAULT_ULPS,
            absolute_tolerance: DEFAULT_ABSOLUTE_TOLERANCE,
            max_bracket_expansions: MAX_BRACKET_EXPANSIONS,
        }
    }
}

impl InverseCdfSearch {
    /// Create a search with the default tolerances and bracket cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Relative tolerance, in ulps of `p`, below which a CDF value still
    /// counts as reaching `p`.
    pub fn with_tolerance_ulps(mut self, ulps: u32) -> Self {
        self.tolerance_ulps = ulps;
        self
    }

    /// Absolute tolerance below which a CDF value still counts as reaching
    /// `p`.  Negative and NaN values are treated as zero.
    pub fn with_absolute_tolerance(mut self, tolerance: Real) -> Self {
        self.absolute_tolerance = if tolerance > 0.0 { tolerance } else { 0.0 };
        self
    }

    /// Maximum number of step doublings before bracketing gives up.
    pub fn with_max_bracket_expansions(mut self, expansions: u32) -> Self {
        self.max_bracket_expansions = expansions;
        self
    }

    /// Relative tolerance in ulps.
    pub fn tolerance_ulps(&self) -> u32 {
        self.tolerance_ulps
    }

    /// Absolute tolerance.
    pub fn absolute_tolerance(&self) -> Real {
        self.absolute_tolerance
    }

    /// Bracket expansion cap.
    pub fn max_bracket_expansions(&self) -> u32 {
        self.max_bracket_expansions
    }

    /// Smallest `x` with `dist.cumulative_probability(x) ≥ p`.
    ///
    /// Uses the distribution's declared support bounds to seed the bracket.
    pub fn solve<D>(&self, dist: &D, p: Real) -> Result<Integer>
    where
        D: DiscreteDistribution + ?Sized,
    {
        self.solve_with(
            |x| dist.cumulative_probability(x),
            dist.support_lower_bound(),
            dist.support_upper_bound(),
            p,
        )
    }

    /// Smallest `x ≥ lower` with `cdf(x) ≥ p`.
    ///
    /// `cdf` must be non-decreasing.  `upper`, when given, must satisfy
    /// `cdf(upper) = 1`; with `None` the support is treated as unbounded
    /// above.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`](dd_core::Error::InvalidArgument) when `p`
    ///   is not in `(0, 1)`.
    /// - [`Error::InternalConsistency`](dd_core::Error::InternalConsistency)
    ///   when `upper < lower`, when `cdf(upper)` does not reach `p`, or when
    ///   bracketing exhausts its cap without reaching `p`.
    pub fn solve_with<F>(
        &self,
        mut cdf: F,
        lower: Integer,
        upper: Option<Integer>,
        p: Real,
    ) -> Result<Integer>
    where
        F: FnMut(Integer) -> Real,
    {
        check_probability(p)?;
        if let Some(upper) = upper {
            ensure_post!(
                upper >= lower,
                "empty support: upper bound {upper} is below lower bound {lower}"
            );
        }

        let mut evaluations: u32 = 0;
        let mut probe = |x: Integer| {
            evaluations += 1;
            let value = cdf(x);
            let hit = reaches(value, p, self.tolerance_ulps, self.absolute_tolerance);
            trace!("cdf({x}) = {value} (target {p}, reached: {hit})");
            hit
        };

        if probe(lower) {
            debug!("inverse cdf for p = {p} is the lower support bound {lower}");
            return Ok(lower);
        }

        let (mut lo, mut hi) = match upper {
            Some(upper) => {
                if upper == lower || !probe(upper) {
                    warn!("cdf at upper support bound {upper} does not reach p = {p}");
                    fail!("cumulative probability at upper support bound {upper} does not reach {p}");
                }
                (lower, upper)
            }
            None => self.bracket(&mut probe, lower, p)?,
        };

        // Invariant: cdf(lo) < p <= cdf(hi).
        while lo.abs_diff(hi) > 1 {
            let mid = lo + (lo.abs_diff(hi) / 2) as Integer;
            if probe(mid) {
                hi = mid;
            } else {
                lo = mid;
            }
        }

        debug!("inverse cdf for p = {p} is {hi} after {evaluations} cdf evaluations");
        Ok(hi)
    }

    /// Find `(lo, hi)` with `cdf(lo) < p <= cdf(hi)` by doubling the step
    /// away from `lower`.  The caller has already seen `cdf(lower) < p`.
    fn bracket<P>(&self, probe: &mut P, lower: Integer, p: Real) -> Result<(Integer, Integer)>
    where
        P: FnMut(Integer) -> bool,
    {
        let mut lo = lower;
        let mut step: Integer = 1;
        let mut expansions: u32 = 0;
        loop {
            let Some(candidate) = lower.checked_add(step) else {
                warn!("bracket for p = {p} overflowed above {lo}");
                fail!("bracketing overflowed the integer range above {lo} without reaching {p}");
            };
            if probe(candidate) {
                trace!("bracketed p = {p} in [{lo}, {candidate}] after {expansions} expansions");
                return Ok((lo, candidate));
            }
            lo = candidate;
            if expansions == self.max_bracket_expansions {
                break;
            }
            let Some(next) = step.checked_mul(2) else {
                warn!("bracket step for p = {p} overflowed at {step}");
                fail!("bracketing overflowed the integer range above {lo} without reaching {p}");
            };
            step = next;
            expansions += 1;
        }
        warn!(
            "cdf did not reach p = {p} within {} bracket expansions (last probe {lo})",
            self.max_bracket_expansions
        );
        fail!(
            "cumulative probability did not reach {p} after {} bracket expansions; \
             the distribution's cdf is not monotone or never saturates",
            self.max_bracket_expansions
        )
    }
}
