//! # ddist
//!
//! Discrete probability distributions with a generic inverse-CDF search.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `dd-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! ddist = "0.1"
//! ```
//!
//! ```rust
//! use ddist::math::{DiscreteDistribution, PoissonDistribution};
//!
//! let d = PoissonDistribution::new(4.0).unwrap();
//! let p = d.cumulative_probability_between(4, 6).unwrap();
//! assert!((p - (d.cumulative_probability(6) - d.cumulative_probability(3))).abs() < 1e-12);
//! assert_eq!(d.inverse_cumulative_probability(0.9).unwrap(), 7);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use dd_core as core;

/// Distributions, the inverse-CDF search, and comparison helpers.
pub use dd_math as math;

pub use dd_core::{Error, Integer, Probability, Real, Result};
pub use dd_math::{DiscreteDistribution, InverseCdfSearch};
