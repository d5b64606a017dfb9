//! Binomial distribution.
//!
//! Masses come from the `statrs` crate.  The CDF is `I_{1−p}(n − k, k + 1)`
//! through the local incomplete beta, which converges for large `n`.

use dd_core::{ensure, Error, Integer, Probability, Real, Result};
use statrs::distribution::{Binomial, Discrete};

use super::discrete::{as_index, unit_interval, DiscreteDistribution, MAX_COUNT};
use super::incomplete_beta::regularized_beta;

/// Number of successes in `n` independent trials with success probability
/// `p`.  Support is `[0, n]`.
#[derive(Debug, Clone)]
pub struct BinomialDistribution {
    dist: Binomial,
    n: u64,
    p: Real,
}

impl BinomialDistribution {
    /// Create a binomial distribution with `n` trials and probability `p`.
    ///
    /// `p = 0` and `p = 1` are accepted and give a one-point support.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `p` is not in `[0, 1]` or `n` exceeds
    /// [`MAX_COUNT`].
    pub fn new(n: u64, p: Real) -> Result<Self> {
        ensure!(
            (0.0..=1.0).contains(&p),
            "success probability must be in [0, 1], got {p}"
        );
        ensure!(
            n <= MAX_COUNT,
            "number of trials {n} exceeds the supported maximum {MAX_COUNT}"
        );
        let dist = Binomial::new(p, n).map_err(|e| Error::InvalidArgument(e.to_string()))?;
        Ok(Self { dist, n, p })
    }

    /// Number of trials.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Success probability.
    pub fn p(&self) -> Real {
        self.p
    }

    /// Mean of the distribution (= np).
    pub fn mean(&self) -> Real {
        self.n as Real * self.p
    }

    /// Variance of the distribution (= np(1-p)).
    pub fn variance(&self) -> Real {
        self.n as Real * self.p * (1.0 - self.p)
    }
}

impl DiscreteDistribution for BinomialDistribution {
    fn probability(&self, x: Integer) -> Real {
        match as_index(x) {
            Some(k) if k <= self.n => self.dist.pmf(k),
            _ => 0.0,
        }
    }

    fn cumulative_probability(&self, x: Integer) -> Probability {
        match as_index(x) {
            None => 0.0,
            Some(k) if k >= self.n => 1.0,
            Some(k) => unit_interval(regularized_beta(
                (self.n - k) as Real,
                k as Real + 1.0,
                1.0 - self.p,
            )),
        }
    }

    fn support_upper_bound(&self) -> Option<Integer> {
        Integer::try_from(self.n).ok()
    }
}
