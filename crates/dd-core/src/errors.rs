//! Error types for ddist.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is one of two kinds: a caller supplied a bad argument, or a
//! distribution broke the assumptions the search engine relies on.  The
//! `ensure!`, `ensure_post!`, and `fail!` macros defined here build them.

use thiserror::Error;

/// The error type used throughout ddist.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// An argument was outside its valid domain: a reversed interval, a
    /// probability outside `(0, 1)`, or invalid distribution parameters.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A distribution violated the monotonicity or boundedness assumptions
    /// of the inverse-CDF search (for example a CDF that never reaches the
    /// target probability).
    #[error("internal consistency error: {0}")]
    InternalConsistency(String),
}

impl Error {
    /// `true` for [`Error::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// `true` for [`Error::InternalConsistency`].
    pub fn is_internal_consistency(&self) -> bool {
        matches!(self, Error::InternalConsistency(_))
    }
}

/// Shorthand `Result` type used throughout ddist.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Argument check.
///
/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dd_core::{ensure, errors::Error};
/// fn positive(x: f64) -> dd_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Consistency check on a computed state.
///
/// Returns `Err(Error::InternalConsistency(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dd_core::{ensure_post, errors::Error};
/// fn compute(x: f64) -> dd_core::errors::Result<f64> {
///     let result = x * 2.0;
///     ensure_post!(result > 0.0, "result must be positive, got {result}");
///     Ok(result)
/// }
/// assert!(compute(1.0).is_ok());
/// assert!(compute(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InternalConsistency(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::InternalConsistency(...))` immediately.
///
/// # Example
/// ```
/// use dd_core::{fail, errors::Error};
/// fn always_err() -> dd_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InternalConsistency(format!($($msg)*)))
    };
}
