//! 2D affine transform: three columns of two rows.
//!
//! The implicit third row is `0 0 1`; column 2 holds the translation.

use std::ops::{Mul, MulAssign};

use xform_core::{DefaultStrategy, MathStrategy, Scalar, math};

use crate::linalg;
use crate::macros::impl_matrix_common;
use crate::{Matrix2, Matrix3, Vector2};

/// A 2D affine matrix, column-major.
///
/// ```text
/// | m00 m10 m20 |
/// | m01 m11 m21 |
/// |  0   0   1  |
/// ```
///
/// # Example
///
/// ```rust
/// use xform_math::{Matrix3x2d, Vector2d};
///
/// let m = Matrix3x2d::translation(Vector2d::new(1.0, 2.0))
///     * Matrix3x2d::scaling(Vector2d::new(2.0, 2.0));
/// assert_eq!(m.transform_position(Vector2d::new(1.0, 1.0)), Vector2d::new(3.0, 4.0));
/// assert_eq!(m.transform_direction(Vector2d::new(1.0, 1.0)), Vector2d::new(2.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
#[allow(missing_docs)]
pub struct Matrix3x2<T> {
    pub m00: T,
    pub m01: T,
    pub m10: T,
    pub m11: T,
    pub m20: T,
    pub m21: T,
}

/// Single-precision [`Matrix3x2`].
pub type Matrix3x2f = Matrix3x2<f32>;
/// Double-precision [`Matrix3x2`].
pub type Matrix3x2d = Matrix3x2<f64>;

impl<T: Scalar> Matrix3x2<T> {
    /// Zero matrix.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO, T::ZERO, T::ZERO);

    /// Identity transform.
    pub const IDENTITY: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ONE, T::ZERO, T::ZERO);

    /// Creates from elements in column-major order.
    #[inline]
    pub const fn new(m00: T, m01: T, m10: T, m11: T, m20: T, m21: T) -> Self {
        Self { m00, m01, m10, m11, m20, m21 }
    }

    /// Creates from the two linear columns and the translation column.
    #[inline]
    pub fn from_cols(c0: Vector2<T>, c1: Vector2<T>, t: Vector2<T>) -> Self {
        Self::new(c0.x, c0.y, c1.x, c1.y, t.x, t.y)
    }

    /// Linear 2x2 part with a translation.
    #[inline]
    pub fn from_linear(m: &Matrix2<T>, t: Vector2<T>) -> Self {
        Self::new(m.m00, m.m01, m.m10, m.m11, t.x, t.y)
    }

    /// Translation by `t`.
    #[inline]
    pub fn translation(t: Vector2<T>) -> Self {
        Self { m20: t.x, m21: t.y, ..Self::IDENTITY }
    }

    /// Non-uniform scale.
    #[inline]
    pub fn scaling(s: Vector2<T>) -> Self {
        Self { m00: s.x, m11: s.y, ..Self::IDENTITY }
    }

    /// Counter-clockwise rotation by `angle` radians.
    #[inline]
    pub fn rotation(angle: T) -> Self {
        let m = Matrix2::rotation(angle);
        Self::from_linear(&m, Vector2::ZERO)
    }

    /// The linear 2x2 part.
    #[inline]
    pub fn linear_part(&self) -> Matrix2<T> {
        Matrix2::new(self.m00, self.m01, self.m10, self.m11)
    }

    /// The translation column.
    #[inline]
    pub fn translation_part(&self) -> Vector2<T> {
        Vector2::new(self.m20, self.m21)
    }

    /// `self · r`, both extended with the implicit row.
    #[inline]
    pub fn multiply(&self, r: &Self) -> Self {
        self.multiply_with(r, &DefaultStrategy::default())
    }

    /// [`multiply`](Self::multiply) with an explicit strategy.
    pub fn multiply_with<M: MathStrategy>(&self, r: &Self, m: &M) -> Self {
        let mut out = [T::ZERO; 6];
        linalg::affine_product(&self.to_cols_array(), &r.to_cols_array(), 2, &mut out, m);
        Self::from_cols_array(out)
    }

    /// Writes `self · r` into `dest`.
    #[inline]
    pub fn multiply_into(&self, r: &Self, dest: &mut Self) {
        *dest = self.multiply(r);
    }

    /// Determinant of the linear part, which equals that of the full 3x3.
    #[inline]
    pub fn determinant(&self) -> T {
        math::fma(self.m00, self.m11, -self.m01 * self.m10)
    }

    /// Affine inverse. A singular linear part yields non-finite elements.
    pub fn invert(&self) -> Self {
        let s = T::ONE / self.determinant();
        Self::new(
            self.m11 * s,
            -self.m01 * s,
            -self.m10 * s,
            self.m00 * s,
            math::fma(self.m10, self.m21, -self.m20 * self.m11) * s,
            math::fma(self.m20, self.m01, -self.m00 * self.m21) * s,
        )
    }

    /// Writes the inverse into `dest`.
    #[inline]
    pub fn invert_into(&self, dest: &mut Self) {
        *dest = self.invert();
    }

    /// Transforms a point; translation applies.
    #[inline]
    pub fn transform_position(&self, p: Vector2<T>) -> Vector2<T> {
        Vector2::new(
            math::fma(self.m00, p.x, math::fma(self.m10, p.y, self.m20)),
            math::fma(self.m01, p.x, math::fma(self.m11, p.y, self.m21)),
        )
    }

    /// Transforms a direction; translation is ignored.
    #[inline]
    pub fn transform_direction(&self, v: Vector2<T>) -> Vector2<T> {
        self.linear_part().transform(v)
    }

    /// Widens to 3x3 with the implicit `0 0 1` row.
    #[inline]
    pub fn to_matrix3(&self) -> Matrix3<T> {
        let (z, o) = (T::ZERO, T::ONE);
        Matrix3::new(self.m00, self.m01, z, self.m10, self.m11, z, self.m20, self.m21, o)
    }
}

impl_matrix_common!(Matrix3x2, 3 x 2, {
    (0, 0) => m00, (0, 1) => m01,
    (1, 0) => m10, (1, 1) => m11,
    (2, 0) => m20, (2, 1) => m21,
});

impl<T: Scalar> Default for Matrix3x2<T> {
    /// The identity transform.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Scalar> Mul for Matrix3x2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Scalar> MulAssign for Matrix3x2<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}
