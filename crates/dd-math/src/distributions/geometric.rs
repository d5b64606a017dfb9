//! Geometric distribution.
//!
//! Wraps the `statrs` crate's geometric implementation, which counts trials
//! up to and including the first success.

use dd_core::{ensure, Error, Integer, Probability, Real, Result};
use statrs::distribution::{Discrete, DiscreteCDF, Geometric};

use super::discrete::{as_index, unit_interval, DiscreteDistribution};

/// Number of Bernoulli trials needed to get one success.  Support is
/// `[1, ∞)`.
#[derive(Debug, Clone)]
pub struct GeometricDistribution {
    dist: Geometric,
    p: Real,
}

impl GeometricDistribution {
    /// Create a geometric distribution with success probability `p`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] unless `0 < p ≤ 1`.
    pub fn new(p: Real) -> Result<Self> {
        ensure!(
            p > 0.0 && p <= 1.0,
            "success probability must be in (0, 1], got {p}"
        );
        let dist = Geometric::new(p).map_err(|e| Error::InvalidArgument(e.to_string()))?;
        Ok(Self { dist, p })
    }

    /// Success probability.
    pub fn p(&self) -> Real {
        self.p
    }

    /// Mean `1/p`.
    pub fn mean(&self) -> Real {
        1.0 / self.p
    }

    /// Variance `(1−p)/p²`.
    pub fn variance(&self) -> Real {
        (1.0 - self.p) / (self.p * self.p)
    }
}

impl DiscreteDistribution for GeometricDistribution {
    fn probability(&self, x: Integer) -> Real {
        match as_index(x) {
            Some(1) if self.p == 1.0 => 1.0,
            Some(k) if k >= 1 && self.p < 1.0 => self.dist.pmf(k),
            _ => 0.0,
        }
    }

    fn cumulative_probability(&self, x: Integer) -> Probability {
        match as_index(x) {
            Some(k) if k >= 1 && self.p == 1.0 => 1.0,
            Some(k) if k >= 1 => unit_interval(self.dist.cdf(k)),
            _ => 0.0,
        }
    }

    fn support_lower_bound(&self) -> Integer {
        1
    }
}
