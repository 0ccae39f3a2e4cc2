//! 2D vector type.
//!
//! [`Vector2`] carries screen-space positions (triangle vertices for the
//! barycentric routines) and 2D affine transform inputs.

use xform_core::{Scalar, math};

use crate::macros::{
    impl_approx_eq, impl_component_index, impl_componentwise_ops, impl_tuple_display,
};

/// A 2D vector.
///
/// # Example
///
/// ```rust
/// use xform_math::Vector2f;
///
/// let v = Vector2f::new(3.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
}

/// Single-precision [`Vector2`].
pub type Vector2f = Vector2<f32>;
/// Double-precision [`Vector2`].
pub type Vector2d = Vector2<f64>;

impl<T: Scalar> Vector2<T> {
    /// Zero vector (0, 0).
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO);

    /// One vector (1, 1).
    pub const ONE: Self = Self::new(T::ONE, T::ONE);

    /// Unit X vector (1, 0).
    pub const X: Self = Self::new(T::ONE, T::ZERO);

    /// Unit Y vector (0, 1).
    pub const Y: Self = Self::new(T::ZERO, T::ONE);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to the same value.
    #[inline]
    pub const fn splat(v: T) -> Self {
        Self::new(v, v)
    }

    /// Creates from an array.
    #[inline]
    pub fn from_array(a: [T; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an array.
    #[inline]
    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        math::fma(self.x, other.x, self.y * other.y)
    }

    /// Z component of the 3D cross product (the 2x2 determinant).
    #[inline]
    pub fn perp_dot(self, other: Self) -> T {
        math::fma(self.x, other.y, -self.y * other.x)
    }

    /// Vector rotated 90 degrees clockwise: `(y, -x)`.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Length (magnitude).
    #[inline]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Squared length.
    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> T {
        (self - other).length()
    }

    /// Scales to unit length. NaN for the zero vector.
    #[inline]
    pub fn normalize(self) -> Self {
        self * math::inv_sqrt(self.length_squared())
    }

    /// Linear interpolation.
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self {
        Self::new(math::lerp(self.x, other.x, t), math::lerp(self.y, other.y, t))
    }

    /// Component-wise `self + a * b`.
    #[inline]
    pub fn fma(self, a: Self, b: Self) -> Self {
        Self::new(math::fma(a.x, b.x, self.x), math::fma(a.y, b.y, self.y))
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Signed angle from `self` to `other` in radians, in `(-pi, pi]`.
    ///
    /// Positive when `other` is counter-clockwise from `self`.
    #[inline]
    pub fn angle(self, other: Self) -> T {
        math::atan2(self.perp_dot(other), self.dot(other))
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl_componentwise_ops!(Vector2 { x, y });
impl_approx_eq!(Vector2 { x, y });
impl_component_index!(Vector2, 2, { 0 => x, 1 => y });
impl_tuple_display!(Vector2 { x, y });

impl<T: Scalar> From<[T; 2]> for Vector2<T> {
    #[inline]
    fn from(a: [T; 2]) -> Self {
        Self::from_array(a)
    }
}

impl<T: Scalar> From<Vector2<T>> for [T; 2] {
    #[inline]
    fn from(v: Vector2<T>) -> [T; 2] {
        v.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;
    use xform_core::math::tolerance;

    #[test]
    fn test_vec2_basics() {
        let a = Vector2d::new(1.0, 2.0);
        let b = Vector2d::new(3.0, -1.0);
        assert_eq!(a + b, Vector2d::new(4.0, 1.0));
        assert_eq!(a.dot(b), 1.0);
        assert_eq!(a.perp_dot(b), -7.0);
        assert_eq!(a.perpendicular(), Vector2d::new(2.0, -1.0));
    }

    #[test]
    fn test_vec2_angle_is_signed() {
        assert_abs_diff_eq!(Vector2d::X.angle(Vector2d::Y), FRAC_PI_2, epsilon = tolerance(1e-15));
        assert_abs_diff_eq!(Vector2d::Y.angle(Vector2d::X), -FRAC_PI_2, epsilon = tolerance(1e-15));
    }

    #[test]
    fn test_vec2_normalize() {
        let v = Vector2f::new(3.0, 4.0).normalize();
        assert_abs_diff_eq!(v, Vector2f::new(0.6, 0.8), epsilon = tolerance(1e-6));
    }

    #[test]
    fn test_vec2_index() {
        let v = Vector2f::new(7.0, 8.0);
        assert_eq!(v[1], 8.0);
        assert!(v.get(2).is_err());
    }
}
