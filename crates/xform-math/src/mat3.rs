//! 3x3 matrix type for rotations and linear 3D transforms.
//!
//! [`Matrix3`] holds rotation, scale and shear. It converts to and from
//! [`Quaternion`] and widens to [`Matrix4`].
//!
//! # Convention
//!
//! Matrices are stored **column-major** and multiply **column vectors**.
//! Field `mCR` is column `C`, row `R`:
//!
//! ```text
//! | m00 m10 m20 |   | x |   | m00*x + m10*y + m20*z |
//! | m01 m11 m21 | * | y | = | m01*x + m11*y + m21*z |
//! | m02 m12 m22 |   | z |   | m02*x + m12*y + m22*z |
//! ```
//!
//! `a * b` applied to a vector applies `b` first.
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{Matrix3d, Quaterniond, Vector3d};
//!
//! let q = Quaterniond::rotation_z(0.5);
//! let m = Matrix3d::from_quaternion(&q);
//! let v = Vector3d::new(1.0, 2.0, 3.0);
//! assert!((m * v - q * v).length() < 1e-6);
//! assert!((m.normalized_rotation().dot(&q) - 1.0).abs() < 1e-6);
//! ```

use std::ops::{Mul, MulAssign};

use xform_core::{DefaultStrategy, MathStrategy, Scalar, math};

use crate::linalg;
use crate::macros::impl_matrix_common;
use crate::rotation;
use crate::{Matrix4, Quaternion, Vector3};

/// A 3x3 matrix, column-major.
///
/// # Example
///
/// ```rust
/// use xform_math::{Matrix3f, Vector3f};
///
/// let m = Matrix3f::scaling(Vector3f::new(2.0, 3.0, 4.0));
/// assert_eq!(m * Vector3f::ONE, Vector3f::new(2.0, 3.0, 4.0));
/// assert_eq!(m[(1, 1)], 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
#[allow(missing_docs)]
pub struct Matrix3<T> {
    pub m00: T,
    pub m01: T,
    pub m02: T,
    pub m10: T,
    pub m11: T,
    pub m12: T,
    pub m20: T,
    pub m21: T,
    pub m22: T,
}

/// Single-precision [`Matrix3`].
pub type Matrix3f = Matrix3<f32>;
/// Double-precision [`Matrix3`].
pub type Matrix3d = Matrix3<f64>;

impl<T: Scalar> Matrix3<T> {
    /// Zero matrix.
    #[rustfmt::skip]
    pub const ZERO: Self = Self::new(
        T::ZERO, T::ZERO, T::ZERO,
        T::ZERO, T::ZERO, T::ZERO,
        T::ZERO, T::ZERO, T::ZERO,
    );

    /// Identity matrix.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self::new(
        T::ONE, T::ZERO, T::ZERO,
        T::ZERO, T::ONE, T::ZERO,
        T::ZERO, T::ZERO, T::ONE,
    );

    /// Creates from elements in column-major order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    #[rustfmt::skip]
    pub const fn new(
        m00: T, m01: T, m02: T,
        m10: T, m11: T, m12: T,
        m20: T, m21: T, m22: T,
    ) -> Self {
        Self { m00, m01, m02, m10, m11, m12, m20, m21, m22 }
    }

    /// Creates from column vectors.
    #[inline]
    pub fn from_cols(c0: Vector3<T>, c1: Vector3<T>, c2: Vector3<T>) -> Self {
        Self::new(c0.x, c0.y, c0.z, c1.x, c1.y, c1.z, c2.x, c2.y, c2.z)
    }

    /// Column `index`.
    ///
    /// # Panics
    ///
    /// If `index >= 3`.
    #[inline]
    pub fn col(&self, index: usize) -> Vector3<T> {
        Vector3::new(self[(index, 0)], self[(index, 1)], self[(index, 2)])
    }

    /// Row `index`.
    ///
    /// # Panics
    ///
    /// If `index >= 3`.
    #[inline]
    pub fn row(&self, index: usize) -> Vector3<T> {
        Vector3::new(self[(0, index)], self[(1, index)], self[(2, index)])
    }

    /// Creates a diagonal matrix.
    #[inline]
    #[rustfmt::skip]
    pub fn diagonal(d: Vector3<T>) -> Self {
        Self::new(
            d.x, T::ZERO, T::ZERO,
            T::ZERO, d.y, T::ZERO,
            T::ZERO, T::ZERO, d.z,
        )
    }

    /// Non-uniform scale.
    #[inline]
    pub fn scaling(s: Vector3<T>) -> Self {
        Self::diagonal(s)
    }

    /// Rotation about the X axis.
    #[rustfmt::skip]
    pub fn rotation_x(angle: T) -> Self {
        let s = math::sin(angle);
        let c = math::cos(angle);
        Self::new(
            T::ONE, T::ZERO, T::ZERO,
            T::ZERO, c, s,
            T::ZERO, -s, c,
        )
    }

    /// Rotation about the Y axis.
    #[rustfmt::skip]
    pub fn rotation_y(angle: T) -> Self {
        let s = math::sin(angle);
        let c = math::cos(angle);
        Self::new(
            c, T::ZERO, -s,
            T::ZERO, T::ONE, T::ZERO,
            s, T::ZERO, c,
        )
    }

    /// Rotation about the Z axis.
    #[rustfmt::skip]
    pub fn rotation_z(angle: T) -> Self {
        let s = math::sin(angle);
        let c = math::cos(angle);
        Self::new(
            c, s, T::ZERO,
            -s, c, T::ZERO,
            T::ZERO, T::ZERO, T::ONE,
        )
    }

    /// Rotation by `angle` radians about `axis` (normalized here).
    #[inline]
    pub fn rotation_axis(angle: T, axis: Vector3<T>) -> Self {
        Self::from_quaternion(&Quaternion::from_axis_angle(axis, angle))
    }

    /// Rotation matrix of a unit quaternion.
    ///
    /// A non-unit quaternion yields the rotation scaled by its squared norm.
    #[inline]
    pub fn from_quaternion(q: &Quaternion<T>) -> Self {
        let [c0, c1, c2] = rotation::basis_from_quaternion(q);
        Self::new(c0[0], c0[1], c0[2], c1[0], c1[1], c1[2], c2[0], c2[1], c2[2])
    }

    /// Same as [`from_quaternion`](Self::from_quaternion).
    #[inline]
    pub fn rotation(q: &Quaternion<T>) -> Self {
        Self::from_quaternion(q)
    }

    /// Rotation of this matrix, assuming orthonormal columns.
    #[inline]
    pub fn normalized_rotation(&self) -> Quaternion<T> {
        Quaternion::from_normalized_matrix(self)
    }

    /// Rotation of this matrix after removing per-column scale.
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
        let mut out = [T::ZERO; 9];
        linalg::product(&self.to_cols_array(), &r.to_cols_array(), 3, 3, &mut out, m);
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
            self.m00, self.m10, self.m20,
            self.m01, self.m11, self.m21,
            self.m02, self.m12, self.m22,
        )
    }

    /// Determinant.
    #[inline]
    pub fn determinant(&self) -> T {
        let a = math::fma(self.m00, self.m11, -self.m01 * self.m10);
        let b = math::fma(self.m02, self.m10, -self.m00 * self.m12);
        let c = math::fma(self.m01, self.m12, -self.m02 * self.m11);
        math::fma(a, self.m22, math::fma(b, self.m21, c * self.m20))
    }

    /// Inverse by cofactors. A singular matrix yields non-finite elements.
    pub fn invert(&self) -> Self {
        let a = math::fma(self.m00, self.m11, -self.m01 * self.m10);
        let b = math::fma(self.m02, self.m10, -self.m00 * self.m12);
        let c = math::fma(self.m01, self.m12, -self.m02 * self.m11);
        let d = math::fma(a, self.m22, math::fma(b, self.m21, c * self.m20));
        let s = T::ONE / d;
        Self::new(
            math::fma(self.m11, self.m22, -self.m21 * self.m12) * s,
            math::fma(self.m21, self.m02, -self.m01 * self.m22) * s,
            c * s,
            math::fma(self.m20, self.m12, -self.m10 * self.m22) * s,
            math::fma(self.m00, self.m22, -self.m20 * self.m02) * s,
            b * s,
            math::fma(self.m10, self.m21, -self.m20 * self.m11) * s,
            math::fma(self.m20, self.m01, -self.m00 * self.m21) * s,
            a * s,
        )
    }

    /// Writes the inverse into `dest`.
    #[inline]
    pub fn invert_into(&self, dest: &mut Self) {
        *dest = self.invert();
    }

    /// `self · v`.
    #[inline]
    pub fn transform(&self, v: Vector3<T>) -> Vector3<T> {
        Vector3::new(
            math::fma(self.m00, v.x, math::fma(self.m10, v.y, self.m20 * v.z)),
            math::fma(self.m01, v.x, math::fma(self.m11, v.y, self.m21 * v.z)),
            math::fma(self.m02, v.x, math::fma(self.m12, v.y, self.m22 * v.z)),
        )
    }

    /// `selfᵀ · v`; the inverse transform for a pure rotation.
    #[inline]
    pub fn transform_transpose(&self, v: Vector3<T>) -> Vector3<T> {
        Vector3::new(
            math::fma(self.m00, v.x, math::fma(self.m01, v.y, self.m02 * v.z)),
            math::fma(self.m10, v.x, math::fma(self.m11, v.y, self.m12 * v.z)),
            math::fma(self.m20, v.x, math::fma(self.m21, v.y, self.m22 * v.z)),
        )
    }

    /// Lengths of the three columns: the scale of a rotation-scale matrix.
    #[inline]
    pub fn column_lengths(&self) -> Vector3<T> {
        Vector3::new(self.col(0).length(), self.col(1).length(), self.col(2).length())
    }

    /// Widens to a 4x4 matrix with no translation.
    #[inline]
    pub fn to_matrix4(&self) -> Matrix4<T> {
        Matrix4::from_matrix3(self)
    }
}

impl_matrix_common!(Matrix3, 3 x 3, {
    (0, 0) => m00, (0, 1) => m01, (0, 2) => m02,
    (1, 0) => m10, (1, 1) => m11, (1, 2) => m12,
    (2, 0) => m20, (2, 1) => m21, (2, 2) => m22,
});

impl<T: Scalar> Default for Matrix3<T> {
    /// The identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Scalar> Mul for Matrix3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Scalar> MulAssign for Matrix3<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<T: Scalar> Mul<Vector3<T>> for Matrix3<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        self.transform(v)
    }
}

impl<T: Scalar> From<Quaternion<T>> for Matrix3<T> {
    #[inline]
    fn from(q: Quaternion<T>) -> Self {
        Self::from_quaternion(&q)
    }
}
