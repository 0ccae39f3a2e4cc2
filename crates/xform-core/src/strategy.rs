//! Precision strategies for the scalar math helpers.
//!
//! Trigonometry, inverse square roots and fused multiply-add are routed
//! through a [`MathStrategy`] so the precision/performance tradeoff is a
//! compile-time or construction-time choice:
//!
//! - [`Exact`] - standard library functions, true fused multiply-add
//! - [`Fast`] - polynomial sine/cosine, Newton-refined inverse square root,
//!   unfused multiply-add
//! - [`Precision`] - runtime selection between the two, e.g. from
//!   [`Options`](crate::Options)
//!
//! [`DefaultStrategy`] is what the plain helpers in [`math`](crate::math)
//! use. It is [`Exact`] unless the `fast-math` feature is enabled.
//!
//! # Usage
//!
//! ```rust
//! use xform_core::{Exact, Fast, MathStrategy};
//!
//! let x = 0.75f32;
//! let exact = Exact.sin(x);
//! let fast = Fast.sin(x);
//! assert!((exact - fast).abs() < 1e-6);
//! ```

use std::f64::consts::{FRAC_1_PI, FRAC_PI_2};
use std::fmt::Debug;

use crate::Scalar;

/// Selects how the scalar helpers are evaluated.
///
/// Only [`sin`](MathStrategy::sin), [`cos`](MathStrategy::cos),
/// [`inv_sqrt`](MathStrategy::inv_sqrt) and [`fma`](MathStrategy::fma) vary
/// between strategies; the clamped inverse trig functions are shared.
pub trait MathStrategy: Copy + Debug + Default + Send + Sync + 'static {
    /// Sine (radians).
    fn sin<T: Scalar>(&self, x: T) -> T;

    /// Cosine (radians).
    fn cos<T: Scalar>(&self, x: T) -> T;

    /// `1 / sqrt(x)`. Only meaningful for positive `x`.
    fn inv_sqrt<T: Scalar>(&self, x: T) -> T;

    /// `a * b + c`.
    fn fma<T: Scalar>(&self, a: T, b: T, c: T) -> T;

    /// Arc cosine with the argument clamped to `[-1, 1]`.
    ///
    /// Values slightly outside the domain (from rounding) map to `PI`
    /// or `0` instead of NaN. NaN input stays NaN.
    #[inline]
    fn safe_acos<T: Scalar>(&self, v: T) -> T {
        if v < -T::ONE {
            T::PI()
        } else if v > T::ONE {
            T::ZERO
        } else {
            v.acos()
        }
    }

    /// Arc sine with the argument clamped to `[-1, 1]`.
    #[inline]
    fn safe_asin<T: Scalar>(&self, v: T) -> T {
        if v <= -T::ONE {
            -T::PI() * T::half()
        } else if v >= T::ONE {
            T::PI() * T::half()
        } else {
            v.asin()
        }
    }

    /// Four-quadrant arc tangent of `y / x`.
    #[inline]
    fn atan2<T: Scalar>(&self, y: T, x: T) -> T {
        y.atan2(x)
    }
}

/// Standard library math with fused multiply-add.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Exact;

impl MathStrategy for Exact {
    #[inline]
    fn sin<T: Scalar>(&self, x: T) -> T {
        x.sin()
    }

    #[inline]
    fn cos<T: Scalar>(&self, x: T) -> T {
        x.cos()
    }

    #[inline]
    fn inv_sqrt<T: Scalar>(&self, x: T) -> T {
        T::ONE / x.sqrt()
    }

    #[inline]
    fn fma<T: Scalar>(&self, a: T, b: T, c: T) -> T {
        a.mul_add(b, c)
    }
}

/// Approximations trading a few ulps for speed.
///
/// - `sin`/`cos`: range reduction to `[-pi/2, pi/2]` and an odd polynomial
///   through `x^11`; absolute error below `1e-7`.
/// - `inv_sqrt`: bit-level initial guess at the scalar's width refined by
///   three Newton steps. Valid over the whole positive normal range of the
///   type. Zero maps to a large finite value rather than infinity.
/// - `fma`: separate multiply and add.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fast;

// Taylor coefficients of sin(x) for x^3 .. x^11.
const SIN_C3: f64 = -1.666_666_666_666_666_6e-1;
const SIN_C5: f64 = 8.333_333_333_333_333e-3;
const SIN_C7: f64 = -1.984_126_984_126_984e-4;
const SIN_C9: f64 = 2.755_731_922_398_589e-6;
const SIN_C11: f64 = -2.505_210_838_544_172e-8;

// Inverse square root seeds for the f32 and f64 bit layouts.
const INV_SQRT_MAGIC_32: u32 = 0x5f37_59df;
const INV_SQRT_MAGIC_64: u64 = 0x5fe6_eb50_c7b5_37a9;

impl MathStrategy for Fast {
    fn sin<T: Scalar>(&self, x: T) -> T {
        let k = (x * T::from_f64(FRAC_1_PI)).round();
        let mut r = x - k * T::PI();
        // sin(x) = (-1)^k sin(x - k*pi)
        if (k.as_f64() as i64) & 1 == 1 {
            r = -r;
        }
        let r2 = r * r;
        let mut p = T::from_f64(SIN_C11);
        p = p * r2 + T::from_f64(SIN_C9);
        p = p * r2 + T::from_f64(SIN_C7);
        p = p * r2 + T::from_f64(SIN_C5);
        p = p * r2 + T::from_f64(SIN_C3);
        r + r * r2 * p
    }

    #[inline]
    fn cos<T: Scalar>(&self, x: T) -> T {
        self.sin(x + T::from_f64(FRAC_PI_2))
    }

    fn inv_sqrt<T: Scalar>(&self, x: T) -> T {
        // initial guess from the bit pattern at the scalar's own width
        let guess = if T::BITS == 64 {
            let xd = x.as_f64();
            f64::from_bits(INV_SQRT_MAGIC_64.wrapping_sub(xd.to_bits() >> 1))
        } else {
            let xf = x.as_f64() as f32;
            f32::from_bits(INV_SQRT_MAGIC_32.wrapping_sub(xf.to_bits() >> 1)) as f64
        };
        let half_x = x * T::half();
        let three_halves = T::from_f64(1.5);
        let mut y = T::from_f64(guess);
        for _ in 0..3 {
            y = y * (three_halves - half_x * y * y);
        }
        y
    }

    #[inline]
    fn fma<T: Scalar>(&self, a: T, b: T, c: T) -> T {
        a * b + c
    }
}

/// Runtime choice between [`Exact`] and [`Fast`].
///
/// # Example
///
/// ```rust
/// use xform_core::{MathStrategy, Precision};
///
/// let p = Precision::Fast;
/// assert!((p.cos(0.0f64) - 1.0).abs() < 1e-7);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Precision {
    /// Standard library math.
    #[default]
    Exact,
    /// Approximations.
    Fast,
}

impl MathStrategy for Precision {
    #[inline]
    fn sin<T: Scalar>(&self, x: T) -> T {
        match self {
            Precision::Exact => Exact.sin(x),
            Precision::Fast => Fast.sin(x),
        }
    }

    #[inline]
    fn cos<T: Scalar>(&self, x: T) -> T {
        match self {
            Precision::Exact => Exact.cos(x),
            Precision::Fast => Fast.cos(x),
        }
    }

    #[inline]
    fn inv_sqrt<T: Scalar>(&self, x: T) -> T {
        match self {
            Precision::Exact => Exact.inv_sqrt(x),
            Precision::Fast => Fast.inv_sqrt(x),
        }
    }

    #[inline]
    fn fma<T: Scalar>(&self, a: T, b: T, c: T) -> T {
        match self {
            Precision::Exact => Exact.fma(a, b, c),
            Precision::Fast => Fast.fma(a, b, c),
        }
    }
}

/// Strategy used by the crate-level helpers in [`math`](crate::math).
#[cfg(not(feature = "fast-math"))]
pub type DefaultStrategy = Exact;

/// Strategy used by the crate-level helpers in [`math`](crate::math).
#[cfg(feature = "fast-math")]
pub type DefaultStrategy = Fast;
