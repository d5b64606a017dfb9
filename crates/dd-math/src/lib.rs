//! # dd-math
//!
//! Discrete probability distributions (via statrs), the generic
//! inverse-CDF search engine behind their quantiles, and the floating-point
//! comparisons the search relies on.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// Discrete probability distributions.
pub mod distributions;

/// Bracketing and bisection search for discrete quantiles.
pub mod inverse_search;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::{close, close_enough};
pub use distributions::{
    BinomialDistribution, DiscreteDistribution, GeometricDistribution,
    HypergeometricDistribution, PascalDistribution, PoissonDistribution,
};
pub use inverse_search::InverseCdfSearch;
