//! Quaternion rotations.
//!
//! [`Quaternion`] stores `(x, y, z, w)` for `w + xi + yj + zk`. Rotations are
//! right-handed: a positive angle about an axis turns counter-clockwise when
//! looking down the axis towards the origin.
//!
//! Only unit quaternions describe pure rotations. Most operations accept any
//! quaternion and scale accordingly; methods suffixed `_unit` skip the
//! normalization factor and are only correct for unit input.
//!
//! The implementation is split by concern:
//!
//! - `compose` - Hamilton products, inversion and incremental rotations
//! - `transform` - rotating vectors
//! - `interp` - slerp, nlerp and iterative nlerp, pairwise and weighted
//! - `direction` - look-along and shortest-arc constructions
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{Quaterniond, Vector3d};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let q = Quaterniond::rotation_z(FRAC_PI_2);
//! let v = q.transform(Vector3d::X);
//! assert!((v - Vector3d::Y).length() < 1e-6);
//! ```

mod compose;
mod direction;
mod interp;
mod transform;

use xform_core::{MathStrategy, Scalar, math};

use crate::macros::{impl_approx_eq, impl_component_index, impl_tuple_display};
use crate::rotation::{self, RotationPart};
use crate::{AxisAngle4, Matrix3, Matrix4, Vector3, Vector4};

/// A quaternion `w + xi + yj + zk`.
///
/// `q * p` is the Hamilton product (apply `p`, then `q`) and `q * v`
/// rotates a [`Vector3`].
///
/// # Example
///
/// ```rust
/// use xform_math::{Quaternionf, Vector3f};
///
/// let q = Quaternionf::from_axis_angle(Vector3f::Y, std::f32::consts::FRAC_PI_2);
/// let v = q * Vector3f::X;
/// assert!((v - Vector3f::new(0.0, 0.0, -1.0)).length() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quaternion<T> {
    /// First imaginary component
    pub x: T,
    /// Second imaginary component
    pub y: T,
    /// Third imaginary component
    pub z: T,
    /// Real component
    pub w: T,
}

/// Single-precision [`Quaternion`].
pub type Quaternionf = Quaternion<f32>;
/// Double-precision [`Quaternion`].
pub type Quaterniond = Quaternion<f64>;

/// Half-angle sine and cosine.
#[inline]
fn half_sin_cos<T: Scalar, M: MathStrategy>(angle: T, m: &M) -> (T, T) {
    let half = angle * T::half();
    (m.sin(half), m.cos(half))
}

impl<T: Scalar> Quaternion<T> {
    /// The identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);

    /// Creates a quaternion from raw components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Creates from `[x, y, z, w]`.
    #[inline]
    pub fn from_array(a: [T; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to `[x, y, z, w]`.
    #[inline]
    pub fn to_array(self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// The imaginary part `(x, y, z)`.
    #[inline]
    pub fn xyz(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(&self, q: &Self) -> T {
        math::fma(self.x, q.x, math::fma(self.y, q.y, math::fma(self.z, q.z, self.w * q.w)))
    }

    /// Squared norm.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Norm.
    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Scales to unit norm. The zero quaternion yields NaN.
    #[inline]
    pub fn normalize(&self) -> Self {
        self.normalize_with(&xform_core::DefaultStrategy::default())
    }

    /// [`normalize`](Self::normalize) with an explicit strategy.
    #[inline]
    pub fn normalize_with<M: MathStrategy>(&self, m: &M) -> Self {
        let len_sq = m.fma(
            self.x,
            self.x,
            m.fma(self.y, self.y, m.fma(self.z, self.z, self.w * self.w)),
        );
        *self * m.inv_sqrt(len_sq)
    }

    /// Writes the normalized quaternion into `dest`.
    #[inline]
    pub fn normalize_into(&self, dest: &mut Self) {
        *dest = self.normalize();
    }

    /// Negates the imaginary part.
    ///
    /// This is the inverse only for unit quaternions; see [`invert`](Self::invert).
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Writes the conjugate into `dest`.
    #[inline]
    pub fn conjugate_into(&self, dest: &mut Self) {
        *dest = self.conjugate();
    }

    /// Multiplicative inverse: the conjugate divided by the squared norm.
    ///
    /// The zero quaternion yields non-finite components.
    #[inline]
    pub fn invert(&self) -> Self {
        let inv = T::ONE / self.length_squared();
        Self::new(-self.x * inv, -self.y * inv, -self.z * inv, self.w * inv)
    }

    /// Writes the inverse into `dest`.
    #[inline]
    pub fn invert_into(&self, dest: &mut Self) {
        *dest = self.invert();
    }

    /// Rotation by `angle` radians about `axis`.
    ///
    /// The axis is normalized first, so it need not be unit length. A zero
    /// axis yields NaN.
    #[inline]
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        Self::from_axis_angle_with(axis, angle, &xform_core::DefaultStrategy::default())
    }

    /// [`from_axis_angle`](Self::from_axis_angle) with an explicit strategy.
    pub fn from_axis_angle_with<M: MathStrategy>(axis: Vector3<T>, angle: T, m: &M) -> Self {
        let (s, c) = half_sin_cos(angle, m);
        let inv_len = m.inv_sqrt(m.fma(axis.x, axis.x, m.fma(axis.y, axis.y, axis.z * axis.z)));
        let s = s * inv_len;
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    /// Rotation by `angle` radians about `axis`; argument order of the
    /// other `rotation_*` builders.
    #[inline]
    pub fn rotation_axis(angle: T, axis: Vector3<T>) -> Self {
        Self::from_axis_angle(axis, angle)
    }

    /// Rotation about the X axis.
    #[inline]
    pub fn rotation_x(angle: T) -> Self {
        let (s, c) = half_sin_cos(angle, &xform_core::DefaultStrategy::default());
        Self::new(s, T::ZERO, T::ZERO, c)
    }

    /// Rotation about the Y axis.
    #[inline]
    pub fn rotation_y(angle: T) -> Self {
        let (s, c) = half_sin_cos(angle, &xform_core::DefaultStrategy::default());
        Self::new(T::ZERO, s, T::ZERO, c)
    }

    /// Rotation about the Z axis.
    #[inline]
    pub fn rotation_z(angle: T) -> Self {
        let (s, c) = half_sin_cos(angle, &xform_core::DefaultStrategy::default());
        Self::new(T::ZERO, T::ZERO, s, c)
    }

    /// Euler rotation `Rx(angle_x) · Ry(angle_y) · Rz(angle_z)`.
    ///
    /// Applied to a vector, the Z rotation happens first.
    pub fn rotation_xyz(angle_x: T, angle_y: T, angle_z: T) -> Self {
        let m = xform_core::DefaultStrategy::default();
        let (sx, cx) = half_sin_cos(angle_x, &m);
        let (sy, cy) = half_sin_cos(angle_y, &m);
        let (sz, cz) = half_sin_cos(angle_z, &m);

        let cycz = cy * cz;
        let sysz = sy * sz;
        let sycz = sy * cz;
        let cysz = cy * sz;
        Self::new(
            sx * cycz + cx * sysz,
            cx * sycz - sx * cysz,
            cx * cysz + sx * sycz,
            cx * cycz - sx * sysz,
        )
    }

    /// Euler rotation `Rz(angle_z) · Ry(angle_y) · Rx(angle_x)`.
    pub fn rotation_zyx(angle_z: T, angle_y: T, angle_x: T) -> Self {
        let m = xform_core::DefaultStrategy::default();
        let (sx, cx) = half_sin_cos(angle_x, &m);
        let (sy, cy) = half_sin_cos(angle_y, &m);
        let (sz, cz) = half_sin_cos(angle_z, &m);

        let cycz = cy * cz;
        let sysz = sy * sz;
        let sycz = sy * cz;
        let cysz = cy * sz;
        Self::new(
            sx * cycz - cx * sysz,
            cx * sycz + sx * cysz,
            cx * cysz - sx * sycz,
            cx * cycz + sx * sysz,
        )
    }

    /// Euler rotation `Ry(angle_y) · Rx(angle_x) · Rz(angle_z)`.
    pub fn rotation_yxz(angle_y: T, angle_x: T, angle_z: T) -> Self {
        let m = xform_core::DefaultStrategy::default();
        let (sx, cx) = half_sin_cos(angle_x, &m);
        let (sy, cy) = half_sin_cos(angle_y, &m);
        let (sz, cz) = half_sin_cos(angle_z, &m);

        let a = cy * sx;
        let b = sy * cx;
        let c = sy * sx;
        let d = cy * cx;
        Self::new(a * cz + b * sz, b * cz - a * sz, d * sz - c * cz, d * cz + c * sz)
    }

    /// Rotation angle in radians, in `[0, 2pi]`. Assumes a unit quaternion.
    #[inline]
    pub fn angle(&self) -> T {
        let half = math::safe_acos(self.w);
        half + half
    }

    /// Angles `(x, y, z)` such that
    /// `rotation_xyz(x, y, z)` reproduces this rotation.
    ///
    /// Assumes a unit quaternion. Near `y = ±pi/2` (gimbal lock) the split
    /// between `x` and `z` is not unique.
    pub fn euler_angles_xyz(&self) -> Vector3<T> {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let two = T::two();
        Vector3::new(
            math::atan2(x * w - y * z, T::half() - x * x - y * y),
            math::safe_asin(two * (x * z + y * w)),
            math::atan2(z * w - x * y, T::half() - y * y - z * z),
        )
    }

    /// Angles `(x, y, z)` such that
    /// `rotation_zyx(z, y, x)` reproduces this rotation.
    pub fn euler_angles_zyx(&self) -> Vector3<T> {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let two = T::two();
        Vector3::new(
            math::atan2(y * z + w * x, T::half() - x * x - y * y),
            math::safe_asin(two * (y * w - x * z)),
            math::atan2(x * y + w * z, T::half() - y * y - z * z),
        )
    }

    /// Axis-angle form of this rotation.
    #[inline]
    pub fn to_axis_angle(&self) -> AxisAngle4<T> {
        AxisAngle4::from_quaternion(self)
    }

    /// Rotation of a matrix whose upper 3×3 is orthonormal.
    #[inline]
    pub fn from_normalized_matrix<M: RotationPart<T>>(m: &M) -> Self {
        rotation::quaternion_from_basis(&m.rotation_part())
    }

    /// Rotation of a matrix whose upper 3×3 may carry per-axis scale.
    #[inline]
    pub fn from_unnormalized_matrix<M: RotationPart<T>>(m: &M) -> Self {
        Self::from_unnormalized_matrix_with(m, &xform_core::DefaultStrategy::default())
    }

    /// [`from_unnormalized_matrix`](Self::from_unnormalized_matrix) with an
    /// explicit strategy for the column normalization.
    #[inline]
    pub fn from_unnormalized_matrix_with<R, M>(m: &R, strategy: &M) -> Self
    where
        R: RotationPart<T>,
        M: MathStrategy,
    {
        rotation::quaternion_from_unnormalized_basis(&m.rotation_part(), strategy)
    }

    /// 3×3 rotation matrix.
    #[inline]
    pub fn to_matrix3(&self) -> Matrix3<T> {
        Matrix3::from_quaternion(self)
    }

    /// 4×4 rotation matrix.
    #[inline]
    pub fn to_matrix4(&self) -> Matrix4<T> {
        Matrix4::from_quaternion(self)
    }

    /// Advances this orientation by angular velocity `omega` (radians per
    /// unit time, world frame) over `dt`.
    ///
    /// The increment is pre-multiplied. Small steps use a series expansion
    /// of the exponential map.
    pub fn integrate(&self, dt: T, omega: Vector3<T>) -> Self {
        let theta = omega * (dt * T::half());
        let mag_sq = theta.length_squared();
        let (s, dw) = if mag_sq * mag_sq / T::from_f64(24.0) < T::from_f64(1e-8) {
            (
                T::ONE - mag_sq / T::from_f64(6.0),
                T::ONE - mag_sq * T::half(),
            )
        } else {
            let mag = mag_sq.sqrt();
            (math::sin(mag) / mag, math::cos(mag))
        };
        let dq = Self::new(theta.x * s, theta.y * s, theta.z * s, dw);
        self.premultiply(&dq)
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

impl<T: Scalar> Default for Quaternion<T> {
    /// The identity rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl_approx_eq!(Quaternion { x, y, z, w });
impl_component_index!(Quaternion, 4, { 0 => x, 1 => y, 2 => z, 3 => w });
impl_tuple_display!(Quaternion { x, y, z, w });

impl<T: Scalar> std::ops::Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl<T: Scalar> std::ops::Sub for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl<T: Scalar> std::ops::Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: Scalar> std::ops::Mul<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

/// Hamilton product: `a * b` applies `b`, then `a`.
impl<T: Scalar> std::ops::Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Scalar> std::ops::MulAssign for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<T: Scalar> std::ops::Mul<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        self.transform(v)
    }
}

impl<T: Scalar> std::ops::Mul<Vector4<T>> for Quaternion<T> {
    type Output = Vector4<T>;

    #[inline]
    fn mul(self, v: Vector4<T>) -> Vector4<T> {
        self.transform_vec4(v)
    }
}

impl<T: Scalar> From<[T; 4]> for Quaternion<T> {
    #[inline]
    fn from(a: [T; 4]) -> Self {
        Self::from_array(a)
    }
}

impl<T: Scalar> From<Quaternion<T>> for [T; 4] {
    #[inline]
    fn from(q: Quaternion<T>) -> [T; 4] {
        q.to_array()
    }
}

impl<T: Scalar> From<AxisAngle4<T>> for Quaternion<T> {
    #[inline]
    fn from(a: AxisAngle4<T>) -> Self {
        a.to_quaternion()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};
    use xform_core::math::tolerance;

    use crate::Vector3d;

    #[test]
    fn test_identity_default() {
        assert_eq!(Quaterniond::default(), Quaterniond::IDENTITY);
        assert_eq!(Quaterniond::IDENTITY.length(), 1.0);
    }

    #[test]
    fn test_from_axis_angle_normalizes_axis() {
        let a = Quaterniond::from_axis_angle(Vector3d::new(0.0, 0.0, 5.0), FRAC_PI_2);
        let b = Quaterniond::rotation_z(FRAC_PI_2);
        assert_abs_diff_eq!(a, b, epsilon = tolerance(1e-15));
        assert_abs_diff_eq!(a.length(), 1.0, epsilon = tolerance(1e-15));
    }

    #[test]
    fn test_right_handed() {
        let q = Quaterniond::rotation_y(FRAC_PI_2);
        assert_abs_diff_eq!(
            q.transform(Vector3d::X),
            Vector3d::new(0.0, 0.0, -1.0),
            epsilon = tolerance(1e-15)
        );
        let q = Quaterniond::rotation_x(FRAC_PI_2);
        assert_abs_diff_eq!(q.transform(Vector3d::Y), Vector3d::Z, epsilon = tolerance(1e-15));
    }

    #[test]
    fn test_euler_builders_match_products() {
        let (a, b, c) = (0.3, -1.1, 2.0);
        let rx = Quaterniond::rotation_x(a);
        let ry = Quaterniond::rotation_y(b);
        let rz = Quaterniond::rotation_z(c);
        assert_abs_diff_eq!(
            Quaterniond::rotation_xyz(a, b, c),
            rx * ry * rz,
            epsilon = tolerance(1e-14)
        );
        assert_abs_diff_eq!(
            Quaterniond::rotation_zyx(c, b, a),
            rz * ry * rx,
            epsilon = tolerance(1e-14)
        );
        assert_abs_diff_eq!(
            Quaterniond::rotation_yxz(b, a, c),
            ry * rx * rz,
            epsilon = tolerance(1e-14)
        );
    }

    #[test]
    fn test_euler_round_trip() {
        let (a, b, c) = (0.4, 0.7, -2.5);
        let xyz = Quaterniond::rotation_xyz(a, b, c).euler_angles_xyz();
        assert_abs_diff_eq!(xyz, Vector3d::new(a, b, c), epsilon = tolerance(1e-12));
        let zyx = Quaterniond::rotation_zyx(c, b, a).euler_angles_zyx();
        assert_abs_diff_eq!(zyx, Vector3d::new(a, b, c), epsilon = tolerance(1e-12));
    }

    #[test]
    fn test_angle() {
        assert_abs_diff_eq!(
            Quaterniond::rotation_x(1.25).angle(),
            1.25,
            epsilon = tolerance(1e-12)
        );
        assert_abs_diff_eq!(Quaterniond::rotation_x(PI).angle(), PI, epsilon = tolerance(1e-12));
        assert_eq!(Quaterniond::IDENTITY.angle(), 0.0);
    }

    #[test]
    fn test_invert_conjugate() {
        let q = Quaterniond::new(1.0, 2.0, 3.0, 4.0);
        let inv = q.invert();
        assert_abs_diff_eq!(q * inv, Quaterniond::IDENTITY, epsilon = tolerance(1e-15));
        assert_eq!(q.conjugate(), Quaterniond::new(-1.0, -2.0, -3.0, 4.0));

        let u = q.normalize();
        assert_abs_diff_eq!(u.invert(), u.conjugate(), epsilon = tolerance(1e-15));
    }

    #[test]
    fn test_zero_quaternion_is_not_finite() {
        let z = Quaterniond::new(0.0, 0.0, 0.0, 0.0);
        assert!(!z.invert().is_finite());
        assert!(!z.normalize().is_finite());
    }

    #[test]
    fn test_integrate() {
        let omega = Vector3d::new(0.0, 0.0, 1.0);
        let mut q = Quaterniond::IDENTITY;
        for _ in 0..100 {
            q = q.integrate(0.01, omega);
        }
        assert_abs_diff_eq!(q, Quaterniond::rotation_z(1.0), epsilon = tolerance(1e-8));

        let big = Quaterniond::IDENTITY.integrate(2.0, Vector3d::new(0.5, 0.0, 0.0));
        assert_abs_diff_eq!(big, Quaterniond::rotation_x(1.0), epsilon = tolerance(1e-15));
    }

    #[test]
    fn test_index_and_display() {
        let mut q = Quaternionf::IDENTITY;
        q[0] = 0.5;
        assert_eq!(q.x, 0.5);
        assert_eq!(q[3], 1.0);
        assert!(q.get(4).is_err());
        assert_eq!(q.to_string(), "(0.5, 0, 0, 1)");
    }

    #[test]
    fn test_normalize_with_strategies_agree() {
        let q = Quaterniond::new(1.0, -2.0, 3.0, 0.5);
        let exact = q.normalize_with(&xform_core::Exact);
        assert_abs_diff_eq!(q.normalize_with(&xform_core::Fast), exact, epsilon = 1e-9);
        assert_abs_diff_eq!(exact.length(), 1.0, epsilon = tolerance(1e-12));
        assert_eq!(q.normalize(), q.normalize_with(&xform_core::DefaultStrategy::default()));
    }

    #[test]
    fn test_unnormalized_matrix_with_fast() {
        let q = Quaterniond::rotation_xyz(0.3, -0.8, 1.9);
        let basis = Matrix3::from(q).multiply(&Matrix3::scaling(Vector3d::new(2.0, 0.5, 3.0)));
        let r = Quaternion::from_unnormalized_matrix_with(&basis, &xform_core::Fast);
        assert!(r.dot(&q).abs() > 1.0 - tolerance(1e-9));
    }

    #[test]
    fn test_fast_axis_angle_within_fast_math_floor() {
        let axis = Vector3d::new(0.3, -1.0, 2.0);
        for i in 0..16 {
            let angle = -PI + f64::from(i) * 0.4;
            let fast = Quaterniond::from_axis_angle_with(axis, angle, &xform_core::Fast);
            let exact = Quaterniond::from_axis_angle_with(axis, angle, &xform_core::Exact);
            assert_abs_diff_eq!(fast, exact, epsilon = 1e-5);
        }
    }
}
