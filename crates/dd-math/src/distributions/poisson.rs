//! Poisson distribution.
//!
//! Wraps the `statrs` crate's Poisson implementation.

use dd_core::{ensure, Error, Integer, Probability, Real, Result};
use statrs::distribution::{Discrete, DiscreteCDF, Poisson};
use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

use super::discrete::{as_index, unit_interval, DiscreteDistribution};

/// Poisson distribution with mean `lambda`.  Support is `[0, ∞)`.
#[derive(Debug, Clone)]
pub struct PoissonDistribution {
    dist: Poisson,
    lambda: Real,
}

impl PoissonDistribution {
    /// Create a Poisson distribution with the given mean `lambda`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `lambda` is not finite and positive.
    pub fn new(lambda: Real) -> Result<Self> {
        ensure!(
            lambda > 0.0 && lambda.is_finite(),
            "mean must be positive and finite, got {lambda}"
        );
        let dist = Poisson::new(lambda).map_err(|e| Error::InvalidArgument(e.to_string()))?;
        Ok(Self { dist, lambda })
    }

    /// Mean parameter λ.
    pub fn lambda(&self) -> Real {
        self.lambda
    }

    /// Mean of the distribution (= λ).
    pub fn mean(&self) -> Real {
        self.lambda
    }

    /// Variance of the distribution (= λ).
    pub fn variance(&self) -> Real {
        self.lambda
    }

    /// Normal approximation of `P(X ≤ x)` with continuity correction,
    /// `Φ((x + 0.5 − λ) / √λ)`.
    pub fn normal_approximate_probability(&self, x: Integer) -> Probability {
        let z = (x as Real + 0.5 - self.lambda) / self.lambda.sqrt();
        0.5 * erfc(-z / SQRT_2)
    }
}

impl DiscreteDistribution for PoissonDistribution {
    fn probability(&self, x: Integer) -> Real {
        as_index(x).map_or(0.0, |k| self.dist.pmf(k))
    }

    fn cumulative_probability(&self, x: Integer) -> Probability {
        as_index(x).map_or(0.0, |k| unit_interval(self.dist.cdf(k)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn poisson_pmf() {
        let d = PoissonDistribution::new(3.0).unwrap();
        // P(X=0) = e^{-3}
        let expected = (-3.0_f64).exp();
        assert_abs_diff_eq!(d.probability(0), expected, epsilon = 1e-10);
        // P(X=3) = e^{-3} * 3^3 / 3!
        assert_abs_diff_eq!(d.probability(3), expected * 27.0 / 6.0, epsilon = 1e-10);
        assert_eq!(d.probability(-1), 0.0);
    }

    #[test]
    fn poisson_cdf_saturates() {
        let d = PoissonDistribution::new(5.0).unwrap();
        assert_eq!(d.cumulative_probability(-3), 0.0);
        assert!((d.cumulative_probability(50) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn poisson_interval_matches_direct_summation() {
        let d = PoissonDistribution::new(4.0).unwrap();
        let between = d.cumulative_probability_between(4, 6).unwrap();
        let difference = d.cumulative_probability(6) - d.cumulative_probability(3);
        let summed: Real = (4..=6).map(|k| d.probability(k)).sum();
        assert_abs_diff_eq!(between, difference, epsilon = 1e-12);
        assert_abs_diff_eq!(between, summed, epsilon = 1e-10);
        assert_abs_diff_eq!(between, 0.455856, epsilon = 1e-6);
    }

    #[test]
    fn poisson_large_mean_quantile() {
        let d = PoissonDistribution::new(1000.0).unwrap();
        assert_eq!(d.inverse_cumulative_probability(0.5).unwrap(), 1000);
    }

    #[test]
    fn poisson_normal_approximation() {
        let d = PoissonDistribution::new(100.0).unwrap();
        for x in [80, 95, 100, 110, 120] {
            let exact = d.cumulative_probability(x);
            let normal = d.normal_approximate_probability(x);
            assert!((exact - normal).abs() < 0.02, "x={x}: {exact} vs {normal}");
        }
        assert_abs_diff_eq!(
            PoissonDistribution::new(4.5).unwrap().normal_approximate_probability(4),
            0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn poisson_tiny_p_quantile_is_in_the_left_tail() {
        // cdf(0) = e^-100 is far below 1e-15; cdf first reaches it at 32.
        let d = PoissonDistribution::new(100.0).unwrap();
        let p = 1e-15;
        let x = d.inverse_cumulative_probability(p).unwrap();
        assert_eq!(x, 32, "cdf(0) = {}", d.cumulative_probability(0));
        assert!(d.cumulative_probability(x) >= p);
        assert!(d.cumulative_probability(x - 1) < p);
    }

    #[test]
    fn poisson_large_mean_cdf_stays_in_unit_interval() {
        let d = PoissonDistribution::new(1.0e8).unwrap();
        let mut prev = 0.0;
        for j in -6..=6 {
            let c = d.cumulative_probability(100_000_000 + j * 10_000);
            assert!((0.0..=1.0).contains(&c) && c >= prev, "step {j}: {c}");
            prev = c;
        }
    }

    #[test]
    fn poisson_invalid_parameters() {
        for lambda in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(PoissonDistribution::new(lambda).unwrap_err().is_invalid_argument());
        }
    }
}
