//! Cubic Hermite blending over a normalized parameter.
//!
//! ```text
//! p(t) = h0(t)*P0 + h1(t)*T0 + h2(t)*P1 + h3(t)*T1
//!
//! h0(t) = 2t³ - 3t² + 1
//! h1(t) = t³ - 2t² + t
//! h2(t) = -2t³ + 3t²
//! h3(t) = t³ - t²
//! ```
//!
//! The blend is generic over anything that supports scalar-weighted
//! addition, so the same function serves angles, lengths and positions.

use std::ops::{Add, Mul};

/// Evaluate the cubic Hermite blend of `p0`..`p1` with tangents `t0`, `t1`.
///
/// `t <= 0` returns `p0` and `t >= 1` returns `p1` exactly, without going
/// through the basis polynomials.
#[inline]
pub fn hermite<T>(p0: T, p1: T, t0: T, t1: T, t: f64) -> T
where
    T: Copy + Add<Output = T> + Mul<f64, Output = T>,
{
    if t <= 0.0 {
        return p0;
    }
    if t >= 1.0 {
        return p1;
    }

    let t2 = t * t;
    let t3 = t2 * t;

    let h0 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h1 = t3 - 2.0 * t2 + t;
    let h2 = -2.0 * t3 + 3.0 * t2;
    let h3 = t3 - t2;

    p0 * h0 + t0 * h1 + p1 * h2 + t1 * h3
}

/// Derivative of [`hermite`] with respect to `t`.
///
/// Not clamped: the derivative is evaluated on the polynomial for any `t`.
#[inline]
pub fn hermite_derivative<T>(p0: T, p1: T, t0: T, t1: T, t: f64) -> T
where
    T: Copy + Add<Output = T> + Mul<f64, Output = T>,
{
    let t2 = t * t;

    let h0 = 6.0 * t2 - 6.0 * t;
    let h1 = 3.0 * t2 - 4.0 * t + 1.0;
    let h2 = -6.0 * t2 + 6.0 * t;
    let h3 = 3.0 * t2 - 2.0 * t;

    p0 * h0 + t0 * h1 + p1 * h2 + t1 * h3
}
