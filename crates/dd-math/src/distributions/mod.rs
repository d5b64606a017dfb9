//! Discrete probability distributions.
//!
//! [`DiscreteDistribution`] is the contract; Binomial, Poisson,
//! Hypergeometric, Geometric, and Pascal implement it on top of the `statrs`
//! crate's masses.  Binomial and Pascal CDFs go through a local incomplete
//! beta that converges for large counts.  The inverse CDF of every family
//! comes from [`crate::inverse_search`].

pub mod binomial;
pub mod discrete;
pub mod geometric;
pub mod hypergeometric;
mod incomplete_beta;
pub mod pascal;
pub mod poisson;

pub use binomial::BinomialDistribution;
pub use discrete::{DiscreteDistribution, MAX_COUNT};
pub use geometric::GeometricDistribution;
pub use hypergeometric::HypergeometricDistribution;
pub use pascal::PascalDistribution;
pub use poisson::PoissonDistribution;
