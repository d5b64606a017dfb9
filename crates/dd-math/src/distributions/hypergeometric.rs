//! Hypergeometric distribution.
//!
//! Probability masses come from `statrs`; the CDF sums them from the bottom
//! of the support, which keeps it consistent with the masses to rounding.
//! Once `C(N, n)` overflows an `f64` (populations past about a thousand)
//! the masses are taken from `ln_pmf` instead.

use dd_core::{ensure, Error, Integer, Probability, Real, Result};
use statrs::distribution::{Discrete, Hypergeometric};
use statrs::function::factorial::binomial;

use super::discrete::{as_index, unit_interval, DiscreteDistribution, MAX_COUNT};

/// Number of successes in `draws` draws without replacement from a
/// population of `population` items of which `successes` are successes.
///
/// Support is `[max(0, draws + successes − population), min(successes, draws)]`.
#[derive(Debug, Clone)]
pub struct HypergeometricDistribution {
    dist: Hypergeometric,
    population: u64,
    successes: u64,
    draws: u64,
    log_space: bool,
}

impl HypergeometricDistribution {
    /// Create a hypergeometric distribution.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `successes` or `draws` exceeds
    /// `population`, or the population exceeds [`MAX_COUNT`].
    pub fn new(population: u64, successes: u64, draws: u64) -> Result<Self> {
        ensure!(
            population <= MAX_COUNT,
            "population size {population} exceeds the supported maximum {MAX_COUNT}"
        );
        ensure!(
            successes <= population,
            "number of successes ({successes}) must not exceed population size ({population})"
        );
        ensure!(
            draws <= population,
            "sample size ({draws}) must not exceed population size ({population})"
        );
        let dist = Hypergeometric::new(population, successes, draws)
            .map_err(|e| Error::InvalidArgument(e.to_string()))?;
        Ok(Self {
            dist,
            population,
            successes,
            draws,
            log_space: !binomial(population, draws).is_finite(),
        })
    }

    /// Population size `N`.
    pub fn population(&self) -> u64 {
        self.population
    }

    /// Number of successes `K` in the population.
    pub fn successes(&self) -> u64 {
        self.successes
    }

    /// Sample size `n`.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    fn min_value(&self) -> u64 {
        (self.draws + self.successes).saturating_sub(self.population)
    }

    fn max_value(&self) -> u64 {
        self.successes.min(self.draws)
    }

    // Callers keep `k` inside the support.
    fn mass(&self, k: u64) -> Real {
        if self.log_space {
            self.dist.ln_pmf(k).exp()
        } else {
            self.dist.pmf(k)
        }
    }

    /// Mean `nK/N`.
    pub fn mean(&self) -> Real {
        if self.population == 0 {
            return 0.0;
        }
        self.draws as Real * self.successes as Real / self.population as Real
    }

    /// Variance `n (K/N) ((N−K)/N) ((N−n)/(N−1))`.
    pub fn variance(&self) -> Real {
        if self.population < 2 {
            return 0.0;
        }
        let n = self.population as Real;
        let k = self.successes as Real;
        let s = self.draws as Real;
        s * (k / n) * ((n - k) / n) * ((n - s) / (n - 1.0))
    }
}

impl DiscreteDistribution for HypergeometricDistribution {
    fn probability(&self, x: Integer) -> Real {
        match as_index(x) {
            Some(k) if (self.min_value()..=self.max_value()).contains(&k) => self.mass(k),
            _ => 0.0,
        }
    }

    fn cumulative_probability(&self, x: Integer) -> Probability {
        let Some(k) = as_index(x) else {
            return 0.0;
        };
        if k < self.min_value() {
            return 0.0;
        }
        if k >= self.max_value() {
            return 1.0;
        }
        let total: Real = (self.min_value()..=k).map(|i| self.mass(i)).sum();
        unit_interval(total)
    }

    // Both bounds fit: they never exceed the population, checked in `new`.
    fn support_lower_bound(&self) -> Integer {
        self.min_value() as Integer
    }

    fn support_upper_bound(&self) -> Option<Integer> {
        Some(self.max_value() as Integer)
    }
}
