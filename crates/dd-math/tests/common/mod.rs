//! Conformance checks shared by the integration tests.
//!
//! A [`DiscreteConformanceCase`] bundles one distribution with parallel
//! arrays of inputs and expected outputs for each operation.  The `verify_*`
//! functions run one operation over its arrays and panic on the first
//! mismatch, naming the offending input.

#![allow(dead_code)]

use dd_core::{Integer, Real};
use dd_math::DiscreteDistribution;

/// Absolute tolerance used for density and cumulative comparisons.
pub const DEFAULT_TOLERANCE: Real = 1e-4;

/// Inverse-CDF probabilities every conformance case is checked at.
pub const INVERSE_POINTS: [Real; 10] = [
    0.001, 0.010, 0.025, 0.050, 0.100, 0.999, 0.990, 0.975, 0.950, 0.900,
];

/// Test data for one distribution instance.
#[derive(Debug, Clone)]
pub struct DiscreteConformanceCase<D> {
    pub distribution: D,
    pub tolerance: Real,
    pub density_points: Vec<Integer>,
    pub density_values: Vec<Real>,
    pub cumulative_points: Vec<Integer>,
    pub cumulative_values: Vec<Real>,
    pub inverse_points: Vec<Real>,
    pub inverse_values: Vec<Integer>,
}

impl<D: DiscreteDistribution> DiscreteConformanceCase<D> {
    pub fn new(distribution: D) -> Self {
        Self {
            distribution,
            tolerance: DEFAULT_TOLERANCE,
            density_points: Vec::new(),
            density_values: Vec::new(),
            cumulative_points: Vec::new(),
            cumulative_values: Vec::new(),
            inverse_points: Vec::new(),
            inverse_values: Vec::new(),
        }
    }

    pub fn with_tolerance(mut self, tolerance: Real) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Expected masses at consecutive points starting from `first`.
    pub fn with_densities(mut self, first: Integer, values: &[Real]) -> Self {
        self.density_points = (first..).take(values.len()).collect();
        self.density_values = values.to_vec();
        self
    }

    /// Expected cumulative probabilities at consecutive points starting
    /// from `first`.
    pub fn with_cumulative(mut self, first: Integer, values: &[Real]) -> Self {
        self.cumulative_points = (first..).take(values.len()).collect();
        self.cumulative_values = values.to_vec();
        self
    }

    /// Expected quantiles at [`INVERSE_POINTS`].
    pub fn with_inverse(mut self, values: &[Integer]) -> Self {
        self.inverse_points = INVERSE_POINTS.to_vec();
        self.inverse_values = values.to_vec();
        self
    }

    pub fn verify_all(&self) {
        verify_densities(self);
        verify_cumulative_probabilities(self);
        verify_inverse_cumulative_probabilities(self);
        verify_illegal_arguments(&self.distribution);
    }
}

pub fn verify_densities<D: DiscreteDistribution>(case: &DiscreteConformanceCase<D>) {
    assert_eq!(case.density_points.len(), case.density_values.len());
    for (&x, &expected) in case.density_points.iter().zip(&case.density_values) {
        let got = case.distribution.probability(x);
        assert!(
            (got - expected).abs() <= case.tolerance,
            "incorrect density value returned for {x}: expected {expected}, got {got}"
        );
    }
}

pub fn verify_cumulative_probabilities<D: DiscreteDistribution>(
    case: &DiscreteConformanceCase<D>,
) {
    assert_eq!(case.cumulative_points.len(), case.cumulative_values.len());
    for (&x, &expected) in case.cumulative_points.iter().zip(&case.cumulative_values) {
        let got = case.distribution.cumulative_probability(x);
        assert!(
            (got - expected).abs() <= case.tolerance,
            "incorrect cumulative probability value returned for {x}: expected {expected}, got {got}"
        );
    }
}

pub fn verify_inverse_cumulative_probabilities<D: DiscreteDistribution>(
    case: &DiscreteConformanceCase<D>,
) {
    assert_eq!(case.inverse_points.len(), case.inverse_values.len());
    for (&p, &expected) in case.inverse_points.iter().zip(&case.inverse_values) {
        let got = case
            .distribution
            .inverse_cumulative_probability(p)
            .unwrap_or_else(|e| panic!("inverse cumulative probability failed for {p}: {e}"));
        assert_eq!(
            got, expected,
            "incorrect inverse cumulative probability value returned for {p}"
        );
    }
}

pub fn verify_illegal_arguments<D: DiscreteDistribution>(distribution: &D) {
    let err = distribution
        .cumulative_probability_between(1, 0)
        .expect_err("expected an error for a reversed interval");
    assert!(err.is_invalid_argument(), "{err}");

    for p in [-1.0, 0.0, 1.0, 2.0, Real::NAN] {
        let err = distribution
            .inverse_cumulative_probability(p)
            .expect_err("expected an error for an out-of-range probability");
        assert!(err.is_invalid_argument(), "p = {p}: {err}");
    }
}
