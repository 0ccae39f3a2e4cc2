//! 2x2 matrix type.

use std::ops::{Mul, MulAssign};

use xform_core::{DefaultStrategy, MathStrategy, Scalar, math};

use crate::Vector2;
use crate::linalg;
use crate::macros::impl_matrix_common;

/// A 2x2 matrix, column-major.
///
/// Field `mCR` is column `C`, row `R`:
///
/// ```text
/// | m00 m10 |
/// | m01 m11 |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
#[allow(missing_docs)]
pub struct Matrix2<T> {
    pub m00: T,
    pub m01: T,
    pub m10: T,
    pub m11: T,
}

/// Single-precision [`Matrix2`].
pub type Matrix2f = Matrix2<f32>;
/// Double-precision [`Matrix2`].
pub type Matrix2d = Matrix2<f64>;

impl<T: Scalar> Matrix2<T> {
    /// Zero matrix.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);

    /// Identity matrix.
    pub const IDENTITY: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ONE);

    /// Creates from elements in column-major order.
    #[inline]
    pub const fn new(m00: T, m01: T, m10: T, m11: T) -> Self {
        Self { m00, m01, m10, m11 }
    }

    /// Creates from column vectors.
    #[inline]
    pub fn from_cols(c0: Vector2<T>, c1: Vector2<T>) -> Self {
        Self::new(c0.x, c0.y, c1.x, c1.y)
    }

    /// Column `index`.
    ///
    /// # Panics
    ///
    /// If `index >= 2`.
    #[inline]
    pub fn col(&self, index: usize) -> Vector2<T> {
        Vector2::new(self[(index, 0)], self[(index, 1)])
    }

    /// Counter-clockwise rotation by `angle` radians.
    #[inline]
    pub fn rotation(angle: T) -> Self {
        let s = math::sin(angle);
        let c = math::cos(angle);
        Self::new(c, s, -s, c)
    }

    /// Non-uniform scale.
    #[inline]
    pub fn scaling(s: Vector2<T>) -> Self {
        Self::new(s.x, T::ZERO, T::ZERO, s.y)
    }

    /// `self · r`.
    #[inline]
    pub fn multiply(&self, r: &Self) -> Self {
        self.multiply_with(r, &DefaultStrategy::default())
    }

    /// [`multiply`](Self::multiply) with an explicit strategy.
    pub fn multiply_with<M: MathStrategy>(&self, r: &Self, m: &M) -> Self {
        let mut out = [T::ZERO; 4];
        linalg::product(&self.to_cols_array(), &r.to_cols_array(), 2, 2, &mut out, m);
        Self::from_cols_array(out)
    }

    /// Writes `self · r` into `dest`.
    #[inline]
    pub fn multiply_into(&self, r: &Self, dest: &mut Self) {
        *dest = self.multiply(r);
    }

    /// Transpose.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::new(self.m00, self.m10, self.m01, self.m11)
    }

    /// Determinant.
    #[inline]
    pub fn determinant(&self) -> T {
        math::fma(self.m00, self.m11, -self.m10 * self.m01)
    }

    /// Inverse. A singular matrix yields non-finite elements.
    pub fn invert(&self) -> Self {
        let s = T::ONE / self.determinant();
        Self::new(self.m11 * s, -self.m01 * s, -self.m10 * s, self.m00 * s)
    }

    /// Writes the inverse into `dest`.
    #[inline]
    pub fn invert_into(&self, dest: &mut Self) {
        *dest = self.invert();
    }

    /// `self · v`.
    #[inline]
    pub fn transform(&self, v: Vector2<T>) -> Vector2<T> {
        Vector2::new(
            math::fma(self.m00, v.x, self.m10 * v.y),
            math::fma(self.m01, v.x, self.m11 * v.y),
        )
    }
}

impl_matrix_common!(Matrix2, 2 x 2, {
    (0, 0) => m00, (0, 1) => m01,
    (1, 0) => m10, (1, 1) => m11,
});

impl<T: Scalar> Default for Matrix2<T> {
    /// The identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Scalar> Mul for Matrix2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Scalar> MulAssign for Matrix2<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<T: Scalar> Mul<Vector2<T>> for Matrix2<T> {
    type Output = Vector2<T>;

    #[inline]
    fn mul(self, v: Vector2<T>) -> Vector2<T> {
        self.transform(v)
    }
}
