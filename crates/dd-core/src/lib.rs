//! # dd-core
//!
//! Core types and error definitions for ddist.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace: the scalar type aliases and the error hierarchy with its
//! `ensure!` / `ensure_post!` / `fail!` macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` / `ensure_post!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used for probabilities and moments.
pub type Real = f64;

/// Integer type of the random variable's values.
///
/// Signed so that queries below a support starting at zero are expressible.
pub type Integer = i64;

/// A probability in `[0, 1]`.
pub type Probability = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
