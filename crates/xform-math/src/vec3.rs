//! 3D vector type.
//!
//! [`Vector3`] holds positions, directions and rotation axes. It is
//! generic over [`Scalar`], with [`Vector3f`] and [`Vector3d`] aliases.
//!
//! # Usage
//!
//! ```rust
//! use xform_math::Vector3f;
//!
//! let a = Vector3f::new(1.0, 0.0, 0.0);
//! let b = Vector3f::new(0.0, 1.0, 0.0);
//! assert_eq!(a.cross(b), Vector3f::Z);
//! assert_eq!((a + b) * 2.0, Vector3f::new(2.0, 2.0, 0.0));
//! ```

use xform_core::{Scalar, math};

use crate::macros::{
    impl_approx_eq, impl_component_index, impl_componentwise_ops, impl_tuple_display,
};
use crate::{AxisAngle4, Quaternion};

/// A 3D vector.
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`.
///
/// # Example
///
/// ```rust
/// use xform_math::Vector3d;
///
/// let v = Vector3d::new(3.0, 4.0, 12.0);
/// assert_eq!(v.length(), 13.0);
/// assert_eq!(v[2], 12.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
    /// Z component
    pub z: T,
}

/// Single-precision [`Vector3`].
pub type Vector3f = Vector3<f32>;
/// Double-precision [`Vector3`].
pub type Vector3d = Vector3<f64>;

impl<T: Scalar> Vector3<T> {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(T::ONE, T::ONE, T::ONE);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: T) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub fn from_array(a: [T; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        math::fma(self.x, other.x, math::fma(self.y, other.y, self.z * other.z))
    }

    /// Cross product `self × other` (right-handed).
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            math::fma(self.y, other.z, -self.z * other.y),
            math::fma(self.z, other.x, -self.x * other.z),
            math::fma(self.x, other.y, -self.y * other.x),
        )
    }

    /// Length (magnitude).
    #[inline]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> T {
        (self - other).length()
    }

    /// Squared distance to `other`.
    #[inline]
    pub fn distance_squared(self, other: Self) -> T {
        (self - other).length_squared()
    }

    /// Scales to unit length.
    ///
    /// The zero vector yields NaN components; callers that may pass a zero
    /// vector must check the length first.
    #[inline]
    pub fn normalize(self) -> Self {
        self * math::inv_sqrt(self.length_squared())
    }

    /// Scales to the given length.
    #[inline]
    pub fn normalize_to(self, length: T) -> Self {
        self * (length * math::inv_sqrt(self.length_squared()))
    }

    /// Linear interpolation: `t = 0` returns self, `t = 1` returns other.
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self {
        Self::new(
            math::lerp(self.x, other.x, t),
            math::lerp(self.y, other.y, t),
            math::lerp(self.z, other.z, t),
        )
    }

    /// Component-wise `self + a * b`.
    #[inline]
    pub fn fma(self, a: Self, b: Self) -> Self {
        Self::new(
            math::fma(a.x, b.x, self.x),
            math::fma(a.y, b.y, self.y),
            math::fma(a.z, b.z, self.z),
        )
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Cosine of the angle between two vectors.
    #[inline]
    pub fn angle_cos(self, other: Self) -> T {
        let len2 = self.length_squared() * other.length_squared();
        self.dot(other) * math::inv_sqrt(len2)
    }

    /// Unsigned angle between two vectors in radians, in `[0, pi]`.
    #[inline]
    pub fn angle(self, other: Self) -> T {
        math::safe_acos(self.angle_cos(other))
    }

    /// Rotates by a quaternion (which need not be unit length).
    ///
    /// Equivalent to `q.transform(self)`.
    #[inline]
    pub fn rotate(self, q: &Quaternion<T>) -> Self {
        q.transform(self)
    }

    /// Writes the rotated vector into `dest`.
    #[inline]
    pub fn rotate_into(self, q: &Quaternion<T>, dest: &mut Self) {
        *dest = self.rotate(q);
    }

    /// Rotates by a unit quaternion, skipping the normalization factor.
    #[inline]
    pub fn rotate_unit(self, q: &Quaternion<T>) -> Self {
        q.transform_unit(self)
    }

    /// Rotates by `angle` radians about `axis` (right-hand rule).
    ///
    /// `axis` must be unit length.
    #[inline]
    pub fn rotate_axis(self, angle: T, axis: Self) -> Self {
        AxisAngle4::new(axis, angle).transform(self)
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl_componentwise_ops!(Vector3 { x, y, z });
impl_approx_eq!(Vector3 { x, y, z });
impl_component_index!(Vector3, 3, { 0 => x, 1 => y, 2 => z });
impl_tuple_display!(Vector3 { x, y, z });

impl<T: Scalar> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from(a: [T; 3]) -> Self {
        Self::from_array(a)
    }
}

impl<T: Scalar> From<Vector3<T>> for [T; 3] {
    #[inline]
    fn from(v: Vector3<T>) -> [T; 3] {
        v.to_array()
    }
}
