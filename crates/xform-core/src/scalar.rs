//! Floating-point scalar abstraction.
//!
//! Every value type in xform is generic over [`Scalar`]. The trait is a
//! bundle of [`num_traits`] bounds ([`Float`], [`FloatConst`], the
//! `ConstZero`/`ConstOne` constants and a lossless cast to `f64`) plus
//! the `approx` comparison traits, with a blanket implementation. In
//! practice that means `f32` and `f64`.
//!
//! # Usage
//!
//! ```rust
//! use xform_core::Scalar;
//!
//! fn hypot<T: Scalar>(a: T, b: T) -> T {
//!     (a * a + b * b).sqrt()
//! }
//!
//! assert_eq!(hypot(3.0f32, 4.0), 5.0);
//! assert_eq!(hypot(3.0f64, 4.0), 5.0);
//! ```

use std::fmt::{Debug, Display};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::{AsPrimitive, ConstOne, ConstZero, Float, FloatConst};

/// Floating-point type usable as a vector/matrix/quaternion component.
///
/// `T::ZERO` and `T::ONE` come from `ConstZero`/`ConstOne`, `T::PI()` from
/// [`FloatConst`], and the raw operations (`sqrt`, `sin`, `mul_add`, ...)
/// from [`Float`]. Those are the exact library versions. Code that wants a
/// swappable approximation goes through a
/// [`MathStrategy`](crate::MathStrategy) instead.
pub trait Scalar:
    Float
    + FloatConst
    + ConstZero
    + ConstOne
    + AsPrimitive<f64>
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + 'static
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + AbsDiffEq<Epsilon = Self>
    + RelativeEq
    + UlpsEq
{
    /// Storage size in bits.
    const BITS: u32 = (size_of::<Self>() * 8) as u32;

    /// Converts from `f64`, rounding to the nearest representable value.
    fn from_f64(v: f64) -> Self;

    /// Widens to `f64` without loss.
    #[inline]
    fn as_f64(self) -> f64 {
        self.as_()
    }

    /// Two.
    #[inline]
    fn two() -> Self {
        Self::ONE + Self::ONE
    }

    /// One half.
    #[inline]
    fn half() -> Self {
        Self::ONE / Self::two()
    }
}

impl<T> Scalar for T
where
    T: Float
        + FloatConst
        + ConstZero
        + ConstOne
        + AsPrimitive<f64>
        + Default
        + Debug
        + Display
        + Send
        + Sync
        + 'static
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + AbsDiffEq<Epsilon = T>
        + RelativeEq
        + UlpsEq,
    f64: AsPrimitive<T>,
{
    #[inline]
    fn from_f64(v: f64) -> Self {
        v.as_()
    }
}
