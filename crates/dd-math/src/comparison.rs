//! Floating-point comparison utilities for probabilities.

use dd_core::Real;

/// Default number of ulps used by the inverse-CDF search when comparing a
/// cumulative probability against its target.
pub const DEFAULT_ULPS: u32 = 64;

/// Return `true` if `|a - b| <= epsilon`.
#[inline]
pub fn close(a: Real, b: Real, epsilon: Real) -> bool {
    (a - b).abs() <= epsilon
}

/// Return `true` if `|a - b| <= n * epsilon` where `epsilon` is the
/// machine-epsilon relative to `max(|a|, |b|)`.
#[inline]
pub fn close_enough(a: Real, b: Real, n: u32) -> bool {
    if a == b {
        return true;
    }
    let eps = (a.abs().max(b.abs())) * f64::EPSILON * n as f64;
    (a - b).abs() <= eps
}

/// Return `true` if `value >= target`, or if `value` falls short of `target`
/// by no more than `n` relative ulps or the absolute `floor`.
///
/// NaN never reaches anything.
#[inline]
pub fn reaches(value: Real, target: Real, n: u32, floor: Real) -> bool {
    if value.is_nan() || target.is_nan() {
        return false;
    }
    value >= target || close_enough(value, target, n) || close(value, target, floor)
}
