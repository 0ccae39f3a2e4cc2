//! Scalar math helpers bound to [`DefaultStrategy`].
//!
//! These are the single place the vector, matrix and quaternion code reaches
//! for trigonometry, inverse square roots and fused multiply-add. Enabling
//! the `fast-math` feature swaps all of them to [`Fast`](crate::Fast) at once.
//! Code that needs a per-call choice uses a [`MathStrategy`] value directly.

use crate::strategy::DefaultStrategy;
use crate::{MathStrategy, Scalar};

#[cfg(not(feature = "fast-math"))]
const STRATEGY: DefaultStrategy = crate::Exact;

#[cfg(feature = "fast-math")]
const STRATEGY: DefaultStrategy = crate::Fast;

/// Sine (radians).
#[inline]
pub fn sin<T: Scalar>(x: T) -> T {
    STRATEGY.sin(x)
}

/// Cosine (radians).
#[inline]
pub fn cos<T: Scalar>(x: T) -> T {
    STRATEGY.cos(x)
}

/// `1 / sqrt(x)`.
#[inline]
pub fn inv_sqrt<T: Scalar>(x: T) -> T {
    STRATEGY.inv_sqrt(x)
}

/// `a * b + c`.
#[inline]
pub fn fma<T: Scalar>(a: T, b: T, c: T) -> T {
    STRATEGY.fma(a, b, c)
}

/// Arc cosine clamped to `[-1, 1]`.
#[inline]
pub fn safe_acos<T: Scalar>(v: T) -> T {
    STRATEGY.safe_acos(v)
}

/// Arc sine clamped to `[-1, 1]`.
#[inline]
pub fn safe_asin<T: Scalar>(v: T) -> T {
    STRATEGY.safe_asin(v)
}

/// Four-quadrant arc tangent of `y / x`.
#[inline]
pub fn atan2<T: Scalar>(y: T, x: T) -> T {
    STRATEGY.atan2(y, x)
}

/// Linear interpolation `a + (b - a) * t`.
///
/// # Example
///
/// ```rust
/// use xform_core::math::lerp;
///
/// assert_eq!(lerp(0.0f32, 10.0, 0.5), 5.0);
/// ```
#[inline]
pub fn lerp<T: Scalar>(a: T, b: T, t: T) -> T {
    fma(b - a, t, a)
}

/// True when built with the `fast-math` feature.
pub const FAST_MATH: bool = cfg!(feature = "fast-math");

/// Comparison tolerance for results computed through these helpers.
///
/// Returns `exact` as is, unless `fast-math` is on. Then it is raised to
/// the approximations' error floor, `1e-5` for 64-bit scalars and `1e-4`
/// for 32-bit ones, so one assertion holds under either build.
///
/// ```rust
/// use xform_core::math::{FAST_MATH, tolerance};
///
/// let eps = tolerance(1e-12f64);
/// assert_eq!(eps, if FAST_MATH { 1e-5 } else { 1e-12 });
/// ```
#[inline]
pub fn tolerance<T: Scalar>(exact: T) -> T {
    if !FAST_MATH {
        return exact;
    }
    let floor = if T::BITS == 64 { 1e-5 } else { 1e-4 };
    exact.max(T::from_f64(floor))
}
