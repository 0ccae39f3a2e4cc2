//! Axis-angle rotations.

use xform_core::{Scalar, math};

use crate::macros::{impl_approx_eq, impl_tuple_display};
use crate::rotation::RotationPart;
use crate::{Quaternion, Vector3};

/// Rotation by `angle` radians about the axis `(x, y, z)`.
///
/// The angle is stored as given, without wrapping into `[0, 2pi)`.
/// Operations that need a unit axis say so; [`normalize`](Self::normalize)
/// fixes up the axis in place.
///
/// # Example
///
/// ```rust
/// use xform_math::{AxisAngle4d, Quaterniond, Vector3d};
///
/// let q = Quaterniond::rotation_y(0.5);
/// let aa = AxisAngle4d::from_quaternion(&q);
/// assert!((aa.angle - 0.5).abs() < 1e-6);
/// assert!((aa.axis() - Vector3d::Y).length() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct AxisAngle4<T> {
    /// Axis X
    pub x: T,
    /// Axis Y
    pub y: T,
    /// Axis Z
    pub z: T,
    /// Angle in radians
    pub angle: T,
}

/// Single-precision [`AxisAngle4`].
pub type AxisAngle4f = AxisAngle4<f32>;
/// Double-precision [`AxisAngle4`].
pub type AxisAngle4d = AxisAngle4<f64>;

impl<T: Scalar> AxisAngle4<T> {
    /// Creates from an axis and an angle in radians.
    #[inline]
    pub fn new(axis: Vector3<T>, angle: T) -> Self {
        Self { x: axis.x, y: axis.y, z: axis.z, angle }
    }

    /// The rotation axis.
    #[inline]
    pub fn axis(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Axis-angle form of a unit quaternion.
    ///
    /// `angle = 2 acos(w)` lies in `[0, 2pi]`. When the axis is undefined
    /// (identity rotation, `|w| >= 1`) it is set to `(0, 0, 1)`.
    pub fn from_quaternion(q: &Quaternion<T>) -> Self {
        let half = math::safe_acos(q.w);
        let sin_sqr = T::ONE - q.w * q.w;
        let angle = half + half;
        if sin_sqr <= T::ZERO {
            return Self::new(Vector3::Z, angle);
        }
        let inv = T::ONE / sin_sqr.sqrt();
        if inv.is_infinite() {
            return Self::new(Vector3::Z, angle);
        }
        Self::new(Vector3::new(q.x * inv, q.y * inv, q.z * inv), angle)
    }

    /// Rotation of a matrix whose upper 3×3 is orthonormal.
    #[inline]
    pub fn from_matrix<M: RotationPart<T>>(m: &M) -> Self {
        Self::from_quaternion(&Quaternion::from_normalized_matrix(m))
    }

    /// Equivalent quaternion. The axis is normalized on the way.
    #[inline]
    pub fn to_quaternion(&self) -> Quaternion<T> {
        Quaternion::from_axis_angle(self.axis(), self.angle)
    }

    /// Scales the axis to unit length; the angle is unchanged.
    #[inline]
    pub fn normalize(&self) -> Self {
        Self::new(self.axis().normalize(), self.angle)
    }

    /// Adds `angle` radians to the rotation. No wrapping is applied.
    #[inline]
    pub fn rotate(&self, angle: T) -> Self {
        Self { angle: self.angle + angle, ..*self }
    }

    /// Rotates `v` with Rodrigues' formula. The axis must be unit length.
    pub fn transform(&self, v: Vector3<T>) -> Vector3<T> {
        let sin = math::sin(self.angle);
        let cos = math::cos(self.angle);
        let axis = self.axis();
        let dot = axis.dot(v);
        let k = (T::ONE - cos) * dot;
        let c = axis.cross(v);
        Vector3::new(
            math::fma(v.x, cos, math::fma(sin, c.x, k * axis.x)),
            math::fma(v.y, cos, math::fma(sin, c.y, k * axis.y)),
            math::fma(v.z, cos, math::fma(sin, c.z, k * axis.z)),
        )
    }

    /// Returns true if the axis and angle are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.axis().is_finite() && self.angle.is_finite()
    }
}

impl<T: Scalar> Default for AxisAngle4<T> {
    /// Zero rotation about +Z.
    #[inline]
    fn default() -> Self {
        Self::new(Vector3::Z, T::ZERO)
    }
}

impl_approx_eq!(AxisAngle4 { x, y, z, angle });
impl_tuple_display!(AxisAngle4 { x, y, z, angle });

impl<T: Scalar> From<Quaternion<T>> for AxisAngle4<T> {
    #[inline]
    fn from(q: Quaternion<T>) -> Self {
        Self::from_quaternion(&q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};
    use xform_core::math::tolerance;

    use crate::{Matrix3d, Quaterniond, Vector3d};

    #[test]
    fn test_round_trip() {
        let aa = AxisAngle4d::new(Vector3d::new(1.0, -2.0, 0.5).normalize(), 1.3);
        let back = AxisAngle4d::from_quaternion(&aa.to_quaternion());
        assert_abs_diff_eq!(back, aa, epsilon = tolerance(1e-14));
    }

    #[test]
    fn test_identity_axis() {
        let aa = AxisAngle4d::from_quaternion(&Quaterniond::IDENTITY);
        assert_eq!(aa.axis(), Vector3d::Z);
        assert_eq!(aa.angle, 0.0);
        assert!(aa.is_finite());
    }

    #[test]
    fn test_angle_not_wrapped() {
        let aa = AxisAngle4d::new(Vector3d::X, 1.5 * PI).rotate(PI);
        assert_abs_diff_eq!(aa.angle, 2.5 * PI, epsilon = tolerance(1e-15));
        assert_eq!(aa.axis(), Vector3d::X);
    }

    #[test]
    fn test_transform_matches_quaternion() {
        let aa = AxisAngle4d::new(Vector3d::new(0.0, 3.0, 4.0), 0.9).normalize();
        let v = Vector3d::new(1.0, 2.0, -1.0);
        assert_abs_diff_eq!(
            aa.transform(v),
            aa.to_quaternion().transform(v),
            epsilon = tolerance(1e-14)
        );
        assert_abs_diff_eq!(
            AxisAngle4d::new(Vector3d::Y, FRAC_PI_2).transform(Vector3d::X),
            Vector3d::new(0.0, 0.0, -1.0),
            epsilon = tolerance(1e-15)
        );
    }

    #[test]
    fn test_from_matrix() {
        let m = Matrix3d::rotation_z(0.75);
        let aa = AxisAngle4d::from_matrix(&m);
        assert_abs_diff_eq!(aa, AxisAngle4d::new(Vector3d::Z, 0.75), epsilon = tolerance(1e-14));
    }

    #[test]
    fn test_conversions() {
        let q = Quaterniond::rotation_x(0.4);
        let aa: AxisAngle4d = q.into();
        let back: Quaterniond = aa.into();
        assert_abs_diff_eq!(back, q, epsilon = tolerance(1e-15));
        assert_abs_diff_eq!(
            AxisAngle4d::default().to_quaternion(),
            Quaterniond::IDENTITY,
            epsilon = tolerance(1e-15)
        );
    }
}
