//! Pascal (negative binomial) distribution.
//!
//! Masses come from the `statrs` crate's negative binomial with an integral
//! number of successes.  The CDF is `I_p(r, k + 1)` through the local
//! incomplete beta, which stays converged for small `p` and large `r`.

use dd_core::{ensure, Error, Integer, Probability, Real, Result};
use statrs::distribution::{Discrete, NegativeBinomial};

use super::discrete::{as_index, unit_interval, DiscreteDistribution, MAX_COUNT};
use super::incomplete_beta::regularized_beta;

/// Number of failures before the `r`-th success in Bernoulli trials with
/// success probability `p`.  Support is `[0, ∞)`.
#[derive(Debug, Clone)]
pub struct PascalDistribution {
    dist: NegativeBinomial,
    r: u64,
    p: Real,
}

impl PascalDistribution {
    /// Create a Pascal distribution with `r` successes and success
    /// probability `p`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `r` is zero or above [`MAX_COUNT`], or
    /// `p` is not in `(0, 1]`.
    pub fn new(r: u64, p: Real) -> Result<Self> {
        ensure!(r > 0, "number of successes must be positive");
        ensure!(
            r <= MAX_COUNT,
            "number of successes {r} exceeds the supported maximum {MAX_COUNT}"
        );
        ensure!(
            p > 0.0 && p <= 1.0,
            "success probability must be in (0, 1], got {p}"
        );
        let dist =
            NegativeBinomial::new(r as Real, p).map_err(|e| Error::InvalidArgument(e.to_string()))?;
        Ok(Self { dist, r, p })
    }

    /// Number of successes `r`.
    pub fn r(&self) -> u64 {
        self.r
    }

    /// Success probability.
    pub fn p(&self) -> Real {
        self.p
    }

    /// Mean `r(1−p)/p`.
    pub fn mean(&self) -> Real {
        self.r as Real * (1.0 - self.p) / self.p
    }

    /// Variance `r(1−p)/p²`.
    pub fn variance(&self) -> Real {
        self.r as Real * (1.0 - self.p) / (self.p * self.p)
    }
}

impl DiscreteDistribution for PascalDistribution {
    fn probability(&self, x: Integer) -> Real {
        match as_index(x) {
            Some(0) if self.p == 1.0 => 1.0,
            Some(k) if self.p < 1.0 => self.dist.pmf(k),
            _ => 0.0,
        }
    }

    fn cumulative_probability(&self, x: Integer) -> Probability {
        match as_index(x) {
            Some(_) if self.p == 1.0 => 1.0,
            Some(k) => unit_interval(regularized_beta(self.r as Real, k as Real + 1.0, self.p)),
            None => 0.0,
        }
    }
}
