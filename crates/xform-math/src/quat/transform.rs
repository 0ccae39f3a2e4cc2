//! Rotating vectors by quaternions.
//!
//! The general forms evaluate the rotation matrix of `q v q⁻¹` scaled by
//! `1 / |q|²`, so any non-zero quaternion rotates without changing vector
//! length. The `_unit` forms drop that factor and expand the diagonal as
//! `1 - 2(..)`; passing a non-unit quaternion to them yields a distorted
//! vector rather than a rotated one.

use xform_core::{DefaultStrategy, MathStrategy, Scalar};

use super::Quaternion;
use crate::{Vector3, Vector4};

impl<T: Scalar> Quaternion<T> {
    /// Rotates `v` by this quaternion (any non-zero norm).
    #[inline]
    pub fn transform(&self, v: Vector3<T>) -> Vector3<T> {
        self.transform_with(v, &DefaultStrategy::default())
    }

    /// [`transform`](Self::transform) with an explicit strategy.
    pub fn transform_with<M: MathStrategy>(&self, v: Vector3<T>, m: &M) -> Vector3<T> {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let ww = w * w;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let xw = x * w;
        let zw = z * w;
        let yw = y * w;
        let k = T::ONE / (xx + yy + zz + ww);
        let two = T::two();
        Vector3::new(
            m.fma(
                (xx - yy - zz + ww) * k,
                v.x,
                m.fma(two * (xy - zw) * k, v.y, (two * (xz + yw) * k) * v.z),
            ),
            m.fma(
                two * (xy + zw) * k,
                v.x,
                m.fma((yy - xx - zz + ww) * k, v.y, (two * (yz - xw) * k) * v.z),
            ),
            m.fma(
                two * (xz - yw) * k,
                v.x,
                m.fma(two * (yz + xw) * k, v.y, ((zz - xx - yy + ww) * k) * v.z),
            ),
        )
    }

    /// Rotates `v` by a unit quaternion.
    #[inline]
    pub fn transform_unit(&self, v: Vector3<T>) -> Vector3<T> {
        self.transform_unit_with(v, &DefaultStrategy::default())
    }

    /// [`transform_unit`](Self::transform_unit) with an explicit strategy.
    pub fn transform_unit_with<M: MathStrategy>(&self, v: Vector3<T>, m: &M) -> Vector3<T> {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let xw = x * w;
        let zw = z * w;
        let yw = y * w;
        let two = T::two();
        let m2 = -T::two();
        Vector3::new(
            m.fma(
                m.fma(m2, yy + zz, T::ONE),
                v.x,
                m.fma(two * (xy - zw), v.y, (two * (xz + yw)) * v.z),
            ),
            m.fma(
                two * (xy + zw),
                v.x,
                m.fma(m.fma(m2, xx + zz, T::ONE), v.y, (two * (yz - xw)) * v.z),
            ),
            m.fma(
                two * (xz - yw),
                v.x,
                m.fma(two * (yz + xw), v.y, m.fma(m2, xx + yy, T::ONE) * v.z),
            ),
        )
    }

    /// Rotates `v` by the inverse of this quaternion (any non-zero norm).
    #[inline]
    pub fn transform_inverse(&self, v: Vector3<T>) -> Vector3<T> {
        self.transform_inverse_with(v, &DefaultStrategy::default())
    }

    /// [`transform_inverse`](Self::transform_inverse) with an explicit strategy.
    pub fn transform_inverse_with<M: MathStrategy>(&self, v: Vector3<T>, m: &M) -> Vector3<T> {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let ww = w * w;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let xw = x * w;
        let zw = z * w;
        let yw = y * w;
        let k = T::ONE / (xx + yy + zz + ww);
        let two = T::two();
        Vector3::new(
            m.fma(
                (xx - yy - zz + ww) * k,
                v.x,
                m.fma(two * (xy + zw) * k, v.y, (two * (xz - yw) * k) * v.z),
            ),
            m.fma(
                two * (xy - zw) * k,
                v.x,
                m.fma((yy - xx - zz + ww) * k, v.y, (two * (yz + xw) * k) * v.z),
            ),
            m.fma(
                two * (xz + yw) * k,
                v.x,
                m.fma(two * (yz - xw) * k, v.y, ((zz - xx - yy + ww) * k) * v.z),
            ),
        )
    }

    /// Rotates `v` by the inverse of a unit quaternion.
    #[inline]
    pub fn transform_inverse_unit(&self, v: Vector3<T>) -> Vector3<T> {
        self.transform_inverse_unit_with(v, &DefaultStrategy::default())
    }

    /// [`transform_inverse_unit`](Self::transform_inverse_unit) with an explicit strategy.
    pub fn transform_inverse_unit_with<M: MathStrategy>(&self, v: Vector3<T>, m: &M) -> Vector3<T> {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let xw = x * w;
        let zw = z * w;
        let yw = y * w;
        let two = T::two();
        let m2 = -T::two();
        Vector3::new(
            m.fma(
                m.fma(m2, yy + zz, T::ONE),
                v.x,
                m.fma(two * (xy + zw), v.y, (two * (xz - yw)) * v.z),
            ),
            m.fma(
                two * (xy - zw),
                v.x,
                m.fma(m.fma(m2, xx + zz, T::ONE), v.y, (two * (yz + xw)) * v.z),
            ),
            m.fma(
                two * (xz + yw),
                v.x,
                m.fma(two * (yz - xw), v.y, m.fma(m2, xx + yy, T::ONE) * v.z),
            ),
        )
    }

    /// Writes the rotated `v` into `dest`.
    #[inline]
    pub fn transform_into(&self, v: Vector3<T>, dest: &mut Vector3<T>) {
        *dest = self.transform(v);
    }

    /// Rotates the `(x, y, z)` part of `v`; `w` passes through.
    #[inline]
    pub fn transform_vec4(&self, v: Vector4<T>) -> Vector4<T> {
        Vector4::from_vec3(self.transform(v.xyz()), v.w)
    }

    /// [`transform_vec4`](Self::transform_vec4) for a unit quaternion.
    #[inline]
    pub fn transform_vec4_unit(&self, v: Vector4<T>) -> Vector4<T> {
        Vector4::from_vec3(self.transform_unit(v.xyz()), v.w)
    }

    /// Rotates the `(x, y, z)` part of `v` by the inverse; `w` passes through.
    #[inline]
    pub fn transform_inverse_vec4(&self, v: Vector4<T>) -> Vector4<T> {
        Vector4::from_vec3(self.transform_inverse(v.xyz()), v.w)
    }

    /// Rotates the unit X axis.
    #[inline]
    pub fn positive_x(&self) -> Vector3<T> {
        self.transform(Vector3::X)
    }

    /// Rotates the unit Y axis.
    #[inline]
    pub fn positive_y(&self) -> Vector3<T> {
        self.transform(Vector3::Y)
    }

    /// Rotates the unit Z axis.
    #[inline]
    pub fn positive_z(&self) -> Vector3<T> {
        self.transform(Vector3::Z)
    }
}
