//! 3D affine transform: four columns of three rows.
//!
//! The implicit fourth row is `0 0 0 1`. This is the compact form of a
//! rigid or scaled transform; it composes and inverts without touching
//! the homogeneous row and widens to [`Matrix4`] when a full matrix is
//! needed.

use std::ops::{Mul, MulAssign};

use xform_core::{DefaultStrategy, MathStrategy, Scalar, math};

use crate::linalg;
use crate::macros::impl_matrix_common;
use crate::rotation;
use crate::{Matrix3, Matrix4, Quaternion, Vector3};

/// A 3D affine matrix, column-major.
///
/// ```text
/// | m00 m10 m20 m30 |
/// | m01 m11 m21 m31 |
/// | m02 m12 m22 m32 |
/// |  0   0   0   1  |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
#[allow(missing_docs)]
pub struct Matrix4x3<T> {
    pub m00: T,
    pub m01: T,
    pub m02: T,
    pub m10: T,
    pub m11: T,
    pub m12: T,
    pub m20: T,
    pub m21: T,
    pub m22: T,
    pub m30: T,
    pub m31: T,
    pub m32: T,
}

/// Single-precision [`Matrix4x3`].
pub type Matrix4x3f = Matrix4x3<f32>;
/// Double-precision [`Matrix4x3`].
pub type Matrix4x3d = Matrix4x3<f64>;

impl<T: Scalar> Matrix4x3<T> {
    /// Zero matrix.
    #[rustfmt::skip]
    pub const ZERO: Self = Self::new(
        T::ZERO, T::ZERO, T::ZERO,
        T::ZERO, T::ZERO, T::ZERO,
        T::ZERO, T::ZERO, T::ZERO,
        T::ZERO, T::ZERO, T::ZERO,
    );

    /// Identity transform.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self::new(
        T::ONE, T::ZERO, T::ZERO,
        T::ZERO, T::ONE, T::ZERO,
        T::ZERO, T::ZERO, T::ONE,
        T::ZERO, T::ZERO, T::ZERO,
    );

    /// Creates from elements in column-major order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    #[rustfmt::skip]
    pub const fn new(
        m00: T, m01: T, m02: T,
        m10: T, m11: T, m12: T,
        m20: T, m21: T, m22: T,
        m30: T, m31: T, m32: T,
    ) -> Self {
        Self { m00, m01, m02, m10, m11, m12, m20, m21, m22, m30, m31, m32 }
    }

    /// Linear 3x3 part with a translation.
    #[inline]
    #[rustfmt::skip]
    pub fn from_linear(m: &Matrix3<T>, t: Vector3<T>) -> Self {
        Self::new(
            m.m00, m.m01, m.m02,
            m.m10, m.m11, m.m12,
            m.m20, m.m21, m.m22,
            t.x, t.y, t.z,
        )
    }

    /// Creates from the three linear columns and the translation column.
    #[inline]
    pub fn from_cols(c0: Vector3<T>, c1: Vector3<T>, c2: Vector3<T>, t: Vector3<T>) -> Self {
        Self::from_linear(&Matrix3::from_cols(c0, c1, c2), t)
    }

    /// Column `index`.
    ///
    /// # Panics
    ///
    /// If `index >= 4`.
    #[inline]
    pub fn col(&self, index: usize) -> Vector3<T> {
        Vector3::new(self[(index, 0)], self[(index, 1)], self[(index, 2)])
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
        Self::from_linear(&Matrix3::rotation_x(angle), Vector3::ZERO)
    }

    /// Rotation about the Y axis.
    #[inline]
    pub fn rotation_y(angle: T) -> Self {
        Self::from_linear(&Matrix3::rotation_y(angle), Vector3::ZERO)
    }

    /// Rotation about the Z axis.
    #[inline]
    pub fn rotation_z(angle: T) -> Self {
        Self::from_linear(&Matrix3::rotation_z(angle), Vector3::ZERO)
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
        Self::new(
            c0[0] * s.x, c0[1] * s.x, c0[2] * s.x,
            c1[0] * s.y, c1[1] * s.y, c1[2] * s.y,
            c2[0] * s.z, c2[1] * s.z, c2[2] * s.z,
            t.x, t.y, t.z,
        )
    }

    /// The linear 3x3 part.
    #[inline]
    #[rustfmt::skip]
    pub fn linear_part(&self) -> Matrix3<T> {
        Matrix3::new(
            self.m00, self.m01, self.m02,
            self.m10, self.m11, self.m12,
            self.m20, self.m21, self.m22,
        )
    }

    /// The translation column.
    #[inline]
    pub fn translation_part(&self) -> Vector3<T> {
        Vector3::new(self.m30, self.m31, self.m32)
    }

    /// Rotation of the linear part, assuming orthonormal columns.
    #[inline]
    pub fn normalized_rotation(&self) -> Quaternion<T> {
        Quaternion::from_normalized_matrix(self)
    }

    /// Rotation of the linear part after removing per-column scale.
    #[inline]
    pub fn unnormalized_rotation(&self) -> Quaternion<T> {
        Quaternion::from_unnormalized_matrix(self)
    }

    /// [`unnormalized_rotation`](Self::unnormalized_rotation) with an explicit strategy.
    #[inline]
    pub fn unnormalized_rotation_with<M: MathStrategy>(&self, m: &M) -> Quaternion<T> {
        Quaternion::from_unnormalized_matrix_with(self, m)
    }

    /// `self · r`, both extended with the implicit row.
    #[inline]
    pub fn multiply(&self, r: &Self) -> Self {
        self.multiply_with(r, &DefaultStrategy::default())
    }

    /// [`multiply`](Self::multiply) with an explicit strategy.
    pub fn multiply_with<M: MathStrategy>(&self, r: &Self, m: &M) -> Self {
        let mut out = [T::ZERO; 12];
        linalg::affine_product(&self.to_cols_array(), &r.to_cols_array(), 3, &mut out, m);
        Self::from_cols_array(out)
    }

    /// Writes `self · r` into `dest`.
    #[inline]
    pub fn multiply_into(&self, r: &Self, dest: &mut Self) {
        *dest = self.multiply(r);
    }

    /// Determinant of the linear part, which equals that of the full 4x4.
    #[inline]
    pub fn determinant(&self) -> T {
        self.linear_part().determinant()
    }

    /// Affine inverse: `L⁻¹` and `-L⁻¹·t`. A singular linear part yields
    /// non-finite elements.
    pub fn invert(&self) -> Self {
        let inv = self.linear_part().invert();
        let t = -inv.transform(self.translation_part());
        Self::from_linear(&inv, t)
    }

    /// Writes the inverse into `dest`.
    #[inline]
    pub fn invert_into(&self, dest: &mut Self) {
        *dest = self.invert();
    }

    /// Transforms a point; translation applies.
    #[inline]
    pub fn transform_position(&self, p: Vector3<T>) -> Vector3<T> {
        let m = self;
        Vector3::new(
            math::fma(m.m00, p.x, math::fma(m.m10, p.y, math::fma(m.m20, p.z, m.m30))),
            math::fma(m.m01, p.x, math::fma(m.m11, p.y, math::fma(m.m21, p.z, m.m31))),
            math::fma(m.m02, p.x, math::fma(m.m12, p.y, math::fma(m.m22, p.z, m.m32))),
        )
    }

    /// Transforms a direction; translation is ignored.
    #[inline]
    pub fn transform_direction(&self, v: Vector3<T>) -> Vector3<T> {
        self.linear_part().transform(v)
    }

    /// Widens to 4x4 with the implicit `0 0 0 1` row.
    #[inline]
    #[rustfmt::skip]
    pub fn to_matrix4(&self) -> Matrix4<T> {
        let (z, o) = (T::ZERO, T::ONE);
        Matrix4::new(
            self.m00, self.m01, self.m02, z,
            self.m10, self.m11, self.m12, z,
            self.m20, self.m21, self.m22, z,
            self.m30, self.m31, self.m32, o,
        )
    }
}

impl_matrix_common!(Matrix4x3, 4 x 3, {
    (0, 0) => m00, (0, 1) => m01, (0, 2) => m02,
    (1, 0) => m10, (1, 1) => m11, (1, 2) => m12,
    (2, 0) => m20, (2, 1) => m21, (2, 2) => m22,
    (3, 0) => m30, (3, 1) => m31, (3, 2) => m32,
});

impl<T: Scalar> Default for Matrix4x3<T> {
    /// The identity transform.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Scalar> Mul for Matrix4x3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Scalar> MulAssign for Matrix4x3<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<T: Scalar> From<Quaternion<T>> for Matrix4x3<T> {
    #[inline]
    fn from(q: Quaternion<T>) -> Self {
        Self::from_quaternion(&q)
    }
}
