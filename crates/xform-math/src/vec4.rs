//! 4D vector type.
//!
//! [`Vector4`] is the homogeneous form used with [`Matrix4`](crate::Matrix4):
//! `w = 1` for points, `w = 0` for directions.

use xform_core::{Scalar, math};

use crate::macros::{
    impl_approx_eq, impl_component_index, impl_componentwise_ops, impl_tuple_display,
};
use crate::{Quaternion, Vector3};

/// A 4D vector.
///
/// # Example
///
/// ```rust
/// use xform_math::{Vector3f, Vector4f};
///
/// let p = Vector4f::from_vec3(Vector3f::new(1.0, 2.0, 3.0), 1.0);
/// assert_eq!(p.w, 1.0);
/// assert_eq!(p.xyz(), Vector3f::new(1.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector4<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
    /// Z component
    pub z: T,
    /// W component
    pub w: T,
}

/// Single-precision [`Vector4`].
pub type Vector4f = Vector4<f32>;
/// Double-precision [`Vector4`].
pub type Vector4d = Vector4<f64>;

impl<T: Scalar> Vector4<T> {
    /// Zero vector.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);

    /// One vector.
    pub const ONE: Self = Self::new(T::ONE, T::ONE, T::ONE, T::ONE);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: T) -> Self {
        Self::new(v, v, v, v)
    }

    /// Extends a 3D vector with `w`.
    #[inline]
    pub fn from_vec3(v: Vector3<T>, w: T) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Creates from an array.
    #[inline]
    pub fn from_array(a: [T; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub fn to_array(self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Drops `w`.
    #[inline]
    pub fn xyz(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        math::fma(
            self.x,
            other.x,
            math::fma(self.y, other.y, math::fma(self.z, other.z, self.w * other.w)),
        )
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

    /// Scales to unit length. NaN for the zero vector.
    #[inline]
    pub fn normalize(self) -> Self {
        self * math::inv_sqrt(self.length_squared())
    }

    /// Scales so the `(x, y, z)` part has unit length; `w` is scaled along.
    #[inline]
    pub fn normalize3(self) -> Self {
        self * math::inv_sqrt(self.xyz().length_squared())
    }

    /// Linear interpolation.
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self {
        Self::new(
            math::lerp(self.x, other.x, t),
            math::lerp(self.y, other.y, t),
            math::lerp(self.z, other.z, t),
            math::lerp(self.w, other.w, t),
        )
    }

    /// Component-wise `self + a * b`.
    #[inline]
    pub fn fma(self, a: Self, b: Self) -> Self {
        Self::new(
            math::fma(a.x, b.x, self.x),
            math::fma(a.y, b.y, self.y),
            math::fma(a.z, b.z, self.z),
            math::fma(a.w, b.w, self.w),
        )
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
            self.w.min(other.w),
        )
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
            self.w.max(other.w),
        )
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs(), self.w.abs())
    }

    /// Rotates the `(x, y, z)` part by a quaternion; `w` is unchanged.
    #[inline]
    pub fn rotate(self, q: &Quaternion<T>) -> Self {
        q.transform_vec4(self)
    }

    /// Writes the rotated vector into `dest`.
    #[inline]
    pub fn rotate_into(self, q: &Quaternion<T>, dest: &mut Self) {
        *dest = self.rotate(q);
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

impl_componentwise_ops!(Vector4 { x, y, z, w });
impl_approx_eq!(Vector4 { x, y, z, w });
impl_component_index!(Vector4, 4, { 0 => x, 1 => y, 2 => z, 3 => w });
impl_tuple_display!(Vector4 { x, y, z, w });

impl<T: Scalar> From<[T; 4]> for Vector4<T> {
    #[inline]
    fn from(a: [T; 4]) -> Self {
        Self::from_array(a)
    }
}

impl<T: Scalar> From<Vector4<T>> for [T; 4] {
    #[inline]
    fn from(v: Vector4<T>) -> [T; 4] {
        v.to_array()
    }
}
