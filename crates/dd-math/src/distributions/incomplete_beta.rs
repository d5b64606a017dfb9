//! Regularized incomplete beta function `I_x(a, b)`.
//!
//! `statrs::function::beta::beta_reg` stops its continued fraction after a
//! fixed 140 terms.  Near the bulk of a distribution the fraction needs on
//! the order of `√max(a, b)` terms, so binomial and Pascal CDFs with counts
//! in the thousands come back unconverged, sometimes outside `[0, 1]`.  This
//! evaluation uses the same modified Lentz scheme with a budget that grows
//! with the shape parameters.

use dd_core::Real;
use log::warn;
use statrs::function::gamma::ln_gamma;

/// Relative change below which the continued fraction has converged.
const CONVERGENCE: Real = 1.0e-15;

/// Smallest magnitude allowed for a Lentz denominator.
const FPMIN: Real = f64::MIN_POSITIVE / f64::EPSILON;

/// Terms allowed on top of the `√max(a, b)` scaling.
const BASE_ITERATIONS: u64 = 200;

/// `I_x(a, b)` for `a, b > 0`.
///
/// `x` outside `(0, 1)` saturates to 0 or 1.  Returns NaN, after a warning,
/// if the continued fraction does not converge within its budget.
pub(crate) fn regularized_beta(a: Real, b: Real, x: Real) -> Real {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    if x > (a + 1.0) / (a + b + 2.0) {
        1.0 - continued_fraction(b, a, 1.0 - x)
    } else {
        continued_fraction(a, b, x)
    }
}

/// `I_x(a, b)` through the continued fraction, valid for
/// `x ≤ (a + 1) / (a + b + 2)`.
fn continued_fraction(a: Real, b: Real, x: Real) -> Real {
    let ln_front =
        ln_gamma(a + b) - ln_gamma(a) - ln_gamma(b) + a * x.ln() + b * (-x).ln_1p();
    let front = ln_front.exp() / a;
    if front == 0.0 {
        return 0.0;
    }

    let budget = BASE_ITERATIONS + 10 * a.max(b).sqrt() as u64;
    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;
    let mut c = 1.0;
    let mut d = guard(1.0 - qab * x / qap).recip();
    let mut h = d;

    for m in 1..=budget {
        let m = m as Real;
        let m2 = 2.0 * m;

        let even = m * (b - m) * x / ((qam + m2) * (a + m2));
        d = guard(1.0 + even * d).recip();
        c = guard(1.0 + even / c);
        h *= d * c;

        let odd = -(a + m) * (qab + m) * x / ((a + m2) * (qap + m2));
        d = guard(1.0 + odd * d).recip();
        c = guard(1.0 + odd / c);
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() <= CONVERGENCE {
            return front * h;
        }
    }

    warn!("incomplete beta I_{x}({a}, {b}) did not converge in {budget} terms");
    Real::NAN
}

#[inline]
fn guard(value: Real) -> Real {
    if value.abs() < FPMIN {
        FPMIN
    } else {
        value
    }
}
