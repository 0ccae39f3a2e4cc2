//! 4x4 matrix type for homogeneous 3D transforms.
//!
//! Same storage convention as [`Matrix3`]: column-major, column vectors,
//! field `mCR` is column `C`, row `R`. The translation lives in column 3.
//!
//! ```rust
//! use xform_math::{Matrix4d, Quaterniond, Vector3d};
//!
//! let m = Matrix4d::translation_rotate_scale(
//!     Vector3d::new(1.0, 2.0, 3.0),
//!     &Quaterniond::rotation_z(0.3),
//!     Vector3d::splat(2.0),
//! );
//! let p = m.transform_position(Vector3d::ZERO);
//! assert_eq!(p, Vector3d::new(1.0, 2.0, 3.0));
//! let back = m.invert().transform_position(p);
//! assert!(back.length() < 1e-9);
//! ```

use std::ops::{Mul, MulAssign};

use xform_core::{DefaultStrategy, MathStrategy, Scalar, math};

use crate::linalg;
use crate::macros::impl_matrix_common;
use crate::rotation;
use crate::{Matrix3, Quaternion, Vector3, Vector4};

/// A 4x4 matrix, column-major.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
#[allow(missing_docs)]
pub struct Matrix4<T> {
    pub m00: T,
    pub m01: T,
    pub m02: T,
    pub m03: T,
    pub m10: T,
    pub m11: T,
    pub m12: T,
    pub m13: T,
    pub m20: T,
    pub m21: T,
    pub m22: T,
    pub m23: T,
    pub m30: T,
    pub m31: T,
    pub m32: T,
    pub m33: T,
}

/// Single-precision [`Matrix4`].
pub type Matrix4f = Matrix4<f32>;
/// Double-precision [`Matrix4`].
pub type Matrix4d = Matrix4<f64>;

impl<T: Scalar> Matrix4<T> {
    /// Zero matrix.
    #[rustfmt::skip]
    pub const ZERO: Self = Self::new(
        T::ZERO, T::ZERO, T::ZERO, T::ZERO,
        T::ZERO, T::ZERO, T::ZERO, T::ZERO,
        T::ZERO, T::ZERO, T::ZERO, T::ZERO,
        T::ZERO, T::ZERO, T::ZERO, T::ZERO,
    );

    /// Identity matrix.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self::new(
        T::ONE, T::ZERO, T::ZERO, T::ZERO,
        T::ZERO, T::ONE, T::ZERO, T::ZERO,
        T::ZERO, T::ZERO, T::ONE, T::ZERO,
        T::ZERO, T::ZERO, T::ZERO, T::ONE,
    );

    /// Creates from elements in column-major order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    #[rustfmt::skip]
    pub const fn new(
        m00: T, m01: T, m02: T, m03: T,
        m10: T, m11: T, m12: T, m13: T,
        m20: T, m21: T, m22: T, m23: T,
        m30: T, m31: T, m32: T, m33: T,
    ) -> Self {
        Self {
            m00, m01, m02, m03,
            m10, m11, m12, m13,
            m20, m21, m22, m23,
            m30, m31, m32, m33,
        }
    }

    /// Creates from column vectors.
    #[inline]
    #[rustfmt::skip]
    pub fn from_cols(c0: Vector4<T>, c1: Vector4<T>, c2: Vector4<T>, c3: Vector4<T>) -> Self {
        Self::new(
            c0.x, c0.y, c0.z, c0.w,
            c1.x, c1.y, c1.z, c1.w,
            c2.x, c2.y, c2.z, c2.w,
            c3.x, c3.y, c3.z, c3.w,
        )
    }

    /// Column `index`.
    ///
    /// # Panics
    ///
    /// If `index >= 4`.
    #[inline]
    pub fn col(&self, index: usize) -> Vector4<T> {
        Vector4::new(self[(index, 0)], self[(index, 1)], self[(index, 2)], self[(index, 3)])
    }

    /// Row `index`.
    ///
    /// # Panics
    ///
    /// If `index >= 4`.
    #[inline]
    pub fn row(&self, index: usize) -> Vector4<T> {
        Vector4::new(self[(0, index)], self[(1, index)], self[(2, index)], self[(3, index)])
    }

    /// Embeds a 3x3 linear transform; no translation.
    #[inline]
    #[rustfmt::skip]
    pub fn from_matrix3(m: &Matrix3<T>) -> Self {
        let (z, o) = (T::ZERO, T::ONE);
        Self::new(
            m.m00, m.m01, m.m02, z,
            m.m10, m.m11, m.m12, z,
            m.m20, m.m21, m.m22, z,
            z, z, z, o,
        )
    }

    /// Upper-left 3x3 block.
    #[inline]
    #[rustfmt::skip]
    pub fn to_matrix3(&self) -> Matrix3<T> {
        Matrix3::new(
            self.m00, self.m01, self.m02,
            self.m10, self.m11, self.m12,
            self.m20, self.m21, self.m22,
        )
    }

    /// Translation by `t`.
    #[inline]
    pub fn translation(t: Vector3<T>) -> Self {
        Self { m30: t.x, m31: t.y, m32: t.z, ..Self::IDENTITY }
    }

    /// Non-uniform scale.
    #[inline]
    pub fn scaling(s: Vector3<T>) -> Self {
        Self { m00: s.x, m11: s.y, m22: s.z, ..Self::IDENTITY }
    }

    /// Rotation about the X axis.
    #[inline]
    pub fn rotation_x(angle: T) -> Self {
        Self::from_matrix3(&Matrix3::rotation_x(angle))
    }

    /// Rotation about the Y axis.
    #[inline]
    pub fn rotation_y(angle: T) -> Self {
        Self::from_matrix3(&Matrix3::rotation_y(angle))
    }

    /// Rotation about the Z axis.
    #[inline]
    pub fn rotation_z(angle: T) -> Self {
        Self::from_matrix3(&Matrix3::rotation_z(angle))
    }

    /// Rotation by `angle` radians about `axis` (normalized here).
    #[inline]
    pub fn rotation_axis(angle: T, axis: Vector3<T>) -> Self {
        Self::from_quaternion(&Quaternion::from_axis_angle(axis, angle))
    }

    /// Rotation matrix of a unit quaternion, no translation.
    #[inline]
    pub fn from_quaternion(q: &Quaternion<T>) -> Self {
        Self::translation_rotate_scale(Vector3::ZERO, q, Vector3::ONE)
    }

    /// Same as [`from_quaternion`](Self::from_quaternion).
    #[inline]
    pub fn rotation(q: &Quaternion<T>) -> Self {
        Self::from_quaternion(q)
    }

    /// `T · R · S`: scale by `s`, rotate by `q`, then translate by `t`.
    #[rustfmt::skip]
    pub fn translation_rotate_scale(t: Vector3<T>, q: &Quaternion<T>, s: Vector3<T>) -> Self {
        let [c0, c1, c2] = rotation::basis_from_quaternion(q);
        let z = T::ZERO;
        Self::new(
            c0[0] * s.x, c0[1] * s.x, c0[2] * s.x, z,
            c1[0] * s.y, c1[1] * s.y, c1[2] * s.y, z,
            c2[0] * s.z, c2[1] * s.z, c2[2] * s.z, z,
            t.x, t.y, t.z, T::ONE,
        )
    }

    /// The translation column.
    #[inline]
    pub fn translation_part(&self) -> Vector3<T> {
        Vector3::new(self.m30, self.m31, self.m32)
    }

    /// Rotation of the upper 3x3, assuming orthonormal columns.
    #[inline]
    pub fn normalized_rotation(&self) -> Quaternion<T> {
        Quaternion::from_normalized_matrix(self)
    }

    /// Rotation of the upper 3x3 after removing per-column scale.
    #[inline]
    pub fn unnormalized_rotation(&self) -> Quaternion<T> {
        Quaternion::from_unnormalized_matrix(self)
    }

    /// [`unnormalized_rotation`](Self::unnormalized_rotation) with an explicit strategy.
    #[inline]
    pub fn unnormalized_rotation_with<M: MathStrategy>(&self, m: &M) -> Quaternion<T> {
        Quaternion::from_unnormalized_matrix_with(self, m)
    }

    /// `self · r`.
    #[inline]
    pub fn multiply(&self, r: &Self) -> Self {
        self.multiply_with(r, &DefaultStrategy::default())
    }

    /// [`multiply`](Self::multiply) with an explicit strategy.
    pub fn multiply_with<M: MathStrategy>(&self, r: &Self, m: &M) -> Self {
        let mut out = [T::ZERO; 16];
        linalg::product(&self.to_cols_array(), &r.to_cols_array(), 4, 4, &mut out, m);
        Self::from_cols_array(out)
    }

    /// Writes `self · r` into `dest`.
    #[inline]
    pub fn multiply_into(&self, r: &Self, dest: &mut Self) {
        *dest = self.multiply(r);
    }

    /// Transpose.
    #[inline]
    #[rustfmt::skip]
    pub fn transpose(&self) -> Self {
        Self::new(
            self.m00, self.m10, self.m20, self.m30,
            self.m01, self.m11, self.m21, self.m31,
            self.m02, self.m12, self.m22, self.m32,
            self.m03, self.m13, self.m23, self.m33,
        )
    }

    // 2x2 minors of rows 0-1 (a..f) and rows 2-3 (g..l), shared by
    // determinant and invert.
    #[inline]
    fn minors(&self) -> [T; 12] {
        [
            math::fma(self.m00, self.m11, -self.m01 * self.m10),
            math::fma(self.m00, self.m12, -self.m02 * self.m10),
            math::fma(self.m00, self.m13, -self.m03 * self.m10),
            math::fma(self.m01, self.m12, -self.m02 * self.m11),
            math::fma(self.m01, self.m13, -self.m03 * self.m11),
            math::fma(self.m02, self.m13, -self.m03 * self.m12),
            math::fma(self.m20, self.m31, -self.m21 * self.m30),
            math::fma(self.m20, self.m32, -self.m22 * self.m30),
            math::fma(self.m20, self.m33, -self.m23 * self.m30),
            math::fma(self.m21, self.m32, -self.m22 * self.m31),
            math::fma(self.m21, self.m33, -self.m23 * self.m31),
            math::fma(self.m22, self.m33, -self.m23 * self.m32),
        ]
    }

    /// Determinant.
    pub fn determinant(&self) -> T {
        let [a, b, c, d, e, f, g, h, i, j, k, l] = self.minors();
        math::fma(a, l, math::fma(-b, k, math::fma(c, j, math::fma(d, i, math::fma(-e, h, f * g)))))
    }

    /// Inverse by 2x2 minors. A singular matrix yields non-finite elements.
    pub fn invert(&self) -> Self {
        let [a, b, c, d, e, f, g, h, i, j, k, l] = self.minors();
        let det = math::fma(
            a,
            l,
            math::fma(-b, k, math::fma(c, j, math::fma(d, i, math::fma(-e, h, f * g)))),
        );
        let s = T::ONE / det;
        let m = self;
        Self::new(
            math::fma(m.m11, l, math::fma(-m.m12, k, m.m13 * j)) * s,
            math::fma(-m.m01, l, math::fma(m.m02, k, -m.m03 * j)) * s,
            math::fma(m.m31, f, math::fma(-m.m32, e, m.m33 * d)) * s,
            math::fma(-m.m21, f, math::fma(m.m22, e, -m.m23 * d)) * s,
            math::fma(-m.m10, l, math::fma(m.m12, i, -m.m13 * h)) * s,
            math::fma(m.m00, l, math::fma(-m.m02, i, m.m03 * h)) * s,
            math::fma(-m.m30, f, math::fma(m.m32, c, -m.m33 * b)) * s,
            math::fma(m.m20, f, math::fma(-m.m22, c, m.m23 * b)) * s,
            math::fma(m.m10, k, math::fma(-m.m11, i, m.m13 * g)) * s,
            math::fma(-m.m00, k, math::fma(m.m01, i, -m.m03 * g)) * s,
            math::fma(m.m30, e, math::fma(-m.m31, c, m.m33 * a)) * s,
            math::fma(-m.m20, e, math::fma(m.m21, c, -m.m23 * a)) * s,
            math::fma(-m.m10, j, math::fma(m.m11, h, -m.m12 * g)) * s,
            math::fma(m.m00, j, math::fma(-m.m01, h, m.m02 * g)) * s,
            math::fma(-m.m30, d, math::fma(m.m31, b, -m.m32 * a)) * s,
            math::fma(m.m20, d, math::fma(-m.m21, b, m.m22 * a)) * s,
        )
    }

    /// Writes the inverse into `dest`.
    #[inline]
    pub fn invert_into(&self, dest: &mut Self) {
        *dest = self.invert();
    }

    /// `self · v`.
    #[inline]
    pub fn transform(&self, v: Vector4<T>) -> Vector4<T> {
        let m = self;
        Vector4::new(
            math::fma(m.m00, v.x, math::fma(m.m10, v.y, math::fma(m.m20, v.z, m.m30 * v.w))),
            math::fma(m.m01, v.x, math::fma(m.m11, v.y, math::fma(m.m21, v.z, m.m31 * v.w))),
            math::fma(m.m02, v.x, math::fma(m.m12, v.y, math::fma(m.m22, v.z, m.m32 * v.w))),
            math::fma(m.m03, v.x, math::fma(m.m13, v.y, math::fma(m.m23, v.z, m.m33 * v.w))),
        )
    }

    /// Transforms a point (`w = 1`) and drops the resulting `w`.
    ///
    /// Exact for affine matrices; use
    /// [`transform_project`](Self::transform_project) for projections.
    #[inline]
    pub fn transform_position(&self, p: Vector3<T>) -> Vector3<T> {
        let m = self;
        Vector3::new(
            math::fma(m.m00, p.x, math::fma(m.m10, p.y, math::fma(m.m20, p.z, m.m30))),
            math::fma(m.m01, p.x, math::fma(m.m11, p.y, math::fma(m.m21, p.z, m.m31))),
            math::fma(m.m02, p.x, math::fma(m.m12, p.y, math::fma(m.m22, p.z, m.m32))),
        )
    }

    /// Transforms a direction (`w = 0`); translation is ignored.
    #[inline]
    pub fn transform_direction(&self, v: Vector3<T>) -> Vector3<T> {
        self.to_matrix3().transform(v)
    }

    /// Transforms a point and divides by the resulting `w`.
    #[inline]
    pub fn transform_project(&self, p: Vector3<T>) -> Vector3<T> {
        let h = self.transform(Vector4::from_vec3(p, T::ONE));
        h.xyz() * (T::ONE / h.w)
    }
}

impl_matrix_common!(Matrix4, 4 x 4, {
    (0, 0) => m00, (0, 1) => m01, (0, 2) => m02, (0, 3) => m03,
    (1, 0) => m10, (1, 1) => m11, (1, 2) => m12, (1, 3) => m13,
    (2, 0) => m20, (2, 1) => m21, (2, 2) => m22, (2, 3) => m23,
    (3, 0) => m30, (3, 1) => m31, (3, 2) => m32, (3, 3) => m33,
});

impl<T: Scalar> Default for Matrix4<T> {
    /// The identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Scalar> Mul for Matrix4<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Scalar> MulAssign for Matrix4<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<T: Scalar> Mul<Vector4<T>> for Matrix4<T> {
    type Output = Vector4<T>;

    #[inline]
    fn mul(self, v: Vector4<T>) -> Vector4<T> {
        self.transform(v)
    }
}

impl<T: Scalar> From<Quaternion<T>> for Matrix4<T> {
    #[inline]
    fn from(q: Quaternion<T>) -> Self {
        Self::from_quaternion(&q)
    }
}

impl<T: Scalar> From<Matrix3<T>> for Matrix4<T> {
    #[inline]
    fn from(m: Matrix3<T>) -> Self {
        Self::from_matrix3(&m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;
    use xform_core::math::tolerance;

    use crate::{Matrix3d, Quaterniond, Vector3d, Vector4d};

    fn sample() -> Matrix4d {
        Matrix4d::translation_rotate_scale(
            Vector3d::new(4.0, -1.0, 2.5),
            &Quaterniond::rotation_xyz(0.3, -0.8, 1.9),
            Vector3d::new(2.0, 0.5, 3.0),
        )
    }

    #[test]
    fn test_mat4_layout() {
        let m = Matrix4d::from_cols_array(std::array::from_fn(|i| i as f64));
        assert_eq!(m.m12, 6.0);
        assert_eq!(m[(3, 1)], 13.0);
        assert_eq!(m.col(2), Vector4d::new(8.0, 9.0, 10.0, 11.0));
        assert_eq!(m.row(0), Vector4d::new(0.0, 4.0, 8.0, 12.0));
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().col(1), m.row(1));
    }

    #[test]
    fn test_mat4_translation() {
        let t = Vector3d::new(1.0, 2.0, 3.0);
        let m = Matrix4d::translation(t);
        assert_eq!(m.transform_position(Vector3d::ONE), Vector3d::new(2.0, 3.0, 4.0));
        assert_eq!(m.transform_direction(Vector3d::ONE), Vector3d::ONE);
        assert_eq!(m.translation_part(), t);
        assert_eq!(m * Vector4d::new(0.0, 0.0, 0.0, 1.0), Vector4d::new(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn test_mat4_trs_matches_product() {
        let t = Vector3d::new(4.0, -1.0, 2.5);
        let q = Quaterniond::rotation_xyz(0.3, -0.8, 1.9);
        let s = Vector3d::new(2.0, 0.5, 3.0);
        let composed =
            Matrix4d::translation(t) * Matrix4d::from_quaternion(&q) * Matrix4d::scaling(s);
        assert_abs_diff_eq!(sample(), composed, epsilon = tolerance(1e-14));
    }

    #[test]
    #[rustfmt::skip]
    fn test_mat4_invert() {
        let m = sample();
        assert_abs_diff_eq!(m * m.invert(), Matrix4d::IDENTITY, epsilon = tolerance(1e-13));
        assert_abs_diff_eq!(m.invert() * m, Matrix4d::IDENTITY, epsilon = tolerance(1e-13));
        assert_abs_diff_eq!(m.determinant(), 3.0, epsilon = tolerance(1e-13));

        // general, non-affine
        let p = Matrix4d::new(
            2.0, 0.0, 1.0, 1.0,
            1.0, 3.0, 0.0, 2.0,
            0.0, 1.0, 4.0, 0.0,
            1.0, 0.0, 2.0, 5.0,
        );
        let mut inv = Matrix4d::ZERO;
        p.invert_into(&mut inv);
        assert_abs_diff_eq!(p * inv, Matrix4d::IDENTITY, epsilon = tolerance(1e-13));
        assert_abs_diff_eq!(p.determinant() * inv.determinant(), 1.0, epsilon = tolerance(1e-13));
    }

    #[test]
    fn test_mat4_singular() {
        let m = Matrix4d::scaling(Vector3d::new(1.0, 0.0, 1.0));
        assert_eq!(m.determinant(), 0.0);
        assert!(!m.invert().is_finite());
    }

    #[test]
    fn test_mat4_rotations() {
        let v = Vector3d::new(0.5, 1.0, -2.0);
        assert_abs_diff_eq!(
            Matrix4d::rotation_x(0.9).transform_direction(v),
            Quaterniond::rotation_x(0.9) * v,
            epsilon = tolerance(1e-14)
        );
        assert_abs_diff_eq!(
            Matrix4d::rotation_z(-0.4).transform_position(v),
            Quaterniond::rotation_z(-0.4) * v,
            epsilon = tolerance(1e-14)
        );
        assert_abs_diff_eq!(
            Matrix4d::rotation_y(FRAC_PI_2).transform_direction(Vector3d::X),
            Vector3d::new(0.0, 0.0, -1.0),
            epsilon = tolerance(1e-14)
        );
        let axis = Vector3d::new(1.0, 2.0, 2.0);
        assert_abs_diff_eq!(
            Matrix4d::rotation_axis(1.3, axis),
            Matrix3d::rotation_axis(1.3, axis).to_matrix4(),
            epsilon = tolerance(1e-15)
        );
    }

    #[test]
    fn test_mat4_rotation_extraction() {
        let q = Quaterniond::rotation_xyz(0.3, -0.8, 1.9);
        let m = sample();
        assert!(m.unnormalized_rotation().dot(&q).abs() > 1.0 - tolerance(1e-14));
        let r = Matrix4d::from(q);
        assert!(r.normalized_rotation().dot(&q).abs() > 1.0 - tolerance(1e-14));
    }

    #[test]
    fn test_mat4_matrix3_round_trip() {
        let m3 = Matrix3d::rotation_axis(0.6, Vector3d::new(0.0, 1.0, 1.0));
        let m4 = Matrix4d::from(m3);
        assert_eq!(m4.to_matrix3(), m3);
        assert_eq!(m4.col(3), Vector4d::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_mat4_project() {
        let mut m = Matrix4d::IDENTITY;
        // w = z
        m.m23 = 1.0;
        m.m33 = 0.0;
        let p = m.transform_project(Vector3d::new(2.0, 4.0, 2.0));
        assert_eq!(p, Vector3d::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn test_mat4_self_multiply() {
        let mut m = Matrix4d::translation(Vector3d::new(1.0, 0.0, -1.0));
        m *= m;
        assert_eq!(m.translation_part(), Vector3d::new(2.0, 0.0, -2.0));
        let mut dest = Matrix4d::ZERO;
        m.multiply_into(&Matrix4d::IDENTITY, &mut dest);
        assert_eq!(dest, m);
    }

    #[test]
    fn test_mat4_checked_access() {
        let mut m = Matrix4f::IDENTITY;
        assert_eq!(m.get(3, 3), Ok(1.0));
        assert!(m.get(4, 0).is_err());
        m.set(3, 0, 7.0).unwrap();
        assert_eq!(m.m30, 7.0);
        assert_eq!(m.to_string().lines().next(), Some("[1 0 0 7]"));
    }

    #[test]
    fn test_mat4_strategy_variants() {
        let a = sample();
        let b = Matrix4d::from(Quaterniond::rotation_zyx(0.4, 1.0, -0.6));
        let exact = a.multiply_with(&b, &xform_core::Exact);
        assert_abs_diff_eq!(
            a.multiply_with(&b, &xform_core::Fast),
            exact,
            epsilon = tolerance(1e-12)
        );
        assert_eq!(a.multiply(&b), a.multiply_with(&b, &DefaultStrategy::default()));

        let q = Quaterniond::rotation_xyz(0.3, -0.8, 1.9);
        let r = a.unnormalized_rotation_with(&xform_core::Fast);
        assert!(r.dot(&q).abs() > 1.0 - 1e-9);
    }
}
