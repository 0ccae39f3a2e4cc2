//! Hamilton products and incremental rotations.

use xform_core::{DefaultStrategy, MathStrategy, Scalar};

use super::Quaternion;
use crate::Vector3;

impl<T: Scalar> Quaternion<T> {
    /// Hamilton product `self · q`.
    ///
    /// Applied to a vector the result rotates by `q` first, then by `self`.
    #[inline]
    pub fn multiply(&self, q: &Self) -> Self {
        self.multiply_with(q, &DefaultStrategy::default())
    }

    /// [`multiply`](Self::multiply) with an explicit strategy.
    pub fn multiply_with<M: MathStrategy>(&self, q: &Self, m: &M) -> Self {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        Self::new(
            m.fma(w, q.x, m.fma(x, q.w, m.fma(y, q.z, -z * q.y))),
            m.fma(w, q.y, m.fma(-x, q.z, m.fma(y, q.w, z * q.x))),
            m.fma(w, q.z, m.fma(x, q.y, m.fma(-y, q.x, z * q.w))),
            m.fma(w, q.w, m.fma(-x, q.x, m.fma(-y, q.y, -z * q.z))),
        )
    }

    /// Writes `self · q` into `dest`.
    #[inline]
    pub fn multiply_into(&self, q: &Self, dest: &mut Self) {
        *dest = self.multiply(q);
    }

    /// Hamilton product `q · self`: rotates by `self` first, then by `q`.
    #[inline]
    pub fn premultiply(&self, q: &Self) -> Self {
        q.multiply(self)
    }

    /// [`premultiply`](Self::premultiply) with an explicit strategy.
    #[inline]
    pub fn premultiply_with<M: MathStrategy>(&self, q: &Self, m: &M) -> Self {
        q.multiply_with(self, m)
    }

    /// Writes `q · self` into `dest`.
    #[inline]
    pub fn premultiply_into(&self, q: &Self, dest: &mut Self) {
        *dest = self.premultiply(q);
    }

    /// `self · b⁻¹`.
    #[inline]
    pub fn divide(&self, b: &Self) -> Self {
        self.multiply(&b.invert())
    }

    /// Writes [`divide`](Self::divide) into `dest`.
    #[inline]
    pub fn divide_into(&self, b: &Self, dest: &mut Self) {
        *dest = self.divide(b);
    }

    /// `self⁻¹ · other`: the rotation taking `self` to `other`.
    ///
    /// `self.multiply(&self.difference(&other))` reproduces `other`.
    #[inline]
    pub fn difference(&self, other: &Self) -> Self {
        self.invert().multiply(other)
    }

    /// Writes [`difference`](Self::difference) into `dest`.
    #[inline]
    pub fn difference_into(&self, other: &Self, dest: &mut Self) {
        *dest = self.difference(other);
    }

    /// Post-multiplies a rotation about the local X axis.
    #[inline]
    pub fn rotate_x(&self, angle: T) -> Self {
        self.multiply(&Self::rotation_x(angle))
    }

    /// Writes [`rotate_x`](Self::rotate_x) into `dest`.
    #[inline]
    pub fn rotate_x_into(&self, angle: T, dest: &mut Self) {
        *dest = self.rotate_x(angle);
    }

    /// Post-multiplies a rotation about the local Y axis.
    #[inline]
    pub fn rotate_y(&self, angle: T) -> Self {
        self.multiply(&Self::rotation_y(angle))
    }

    /// Writes [`rotate_y`](Self::rotate_y) into `dest`.
    #[inline]
    pub fn rotate_y_into(&self, angle: T, dest: &mut Self) {
        *dest = self.rotate_y(angle);
    }

    /// Post-multiplies a rotation about the local Z axis.
    #[inline]
    pub fn rotate_z(&self, angle: T) -> Self {
        self.multiply(&Self::rotation_z(angle))
    }

    /// Writes [`rotate_z`](Self::rotate_z) into `dest`.
    #[inline]
    pub fn rotate_z_into(&self, angle: T, dest: &mut Self) {
        *dest = self.rotate_z(angle);
    }

    /// Pre-multiplies a rotation about the world X axis.
    #[inline]
    pub fn rotate_local_x(&self, angle: T) -> Self {
        self.premultiply(&Self::rotation_x(angle))
    }

    /// Writes [`rotate_local_x`](Self::rotate_local_x) into `dest`.
    #[inline]
    pub fn rotate_local_x_into(&self, angle: T, dest: &mut Self) {
        *dest = self.rotate_local_x(angle);
    }

    /// Pre-multiplies a rotation about the world Y axis.
    #[inline]
    pub fn rotate_local_y(&self, angle: T) -> Self {
        self.premultiply(&Self::rotation_y(angle))
    }

    /// Writes [`rotate_local_y`](Self::rotate_local_y) into `dest`.
    #[inline]
    pub fn rotate_local_y_into(&self, angle: T, dest: &mut Self) {
        *dest = self.rotate_local_y(angle);
    }

    /// Pre-multiplies a rotation about the world Z axis.
    #[inline]
    pub fn rotate_local_z(&self, angle: T) -> Self {
        self.premultiply(&Self::rotation_z(angle))
    }

    /// Writes [`rotate_local_z`](Self::rotate_local_z) into `dest`.
    #[inline]
    pub fn rotate_local_z_into(&self, angle: T, dest: &mut Self) {
        *dest = self.rotate_local_z(angle);
    }

    /// Post-multiplies a rotation by `angle` about `axis` (normalized here).
    #[inline]
    pub fn rotate_axis(&self, angle: T, axis: Vector3<T>) -> Self {
        self.multiply(&Self::from_axis_angle(axis, angle))
    }

    /// Writes [`rotate_axis`](Self::rotate_axis) into `dest`.
    #[inline]
    pub fn rotate_axis_into(&self, angle: T, axis: Vector3<T>, dest: &mut Self) {
        *dest = self.rotate_axis(angle, axis);
    }

    /// Post-multiplies [`rotation_xyz`](Self::rotation_xyz).
    #[inline]
    pub fn rotate_xyz(&self, angle_x: T, angle_y: T, angle_z: T) -> Self {
        self.multiply(&Self::rotation_xyz(angle_x, angle_y, angle_z))
    }

    /// Writes [`rotate_xyz`](Self::rotate_xyz) into `dest`.
    #[inline]
    pub fn rotate_xyz_into(&self, angle_x: T, angle_y: T, angle_z: T, dest: &mut Self) {
        *dest = self.rotate_xyz(angle_x, angle_y, angle_z);
    }

    /// Post-multiplies [`rotation_zyx`](Self::rotation_zyx).
    #[inline]
    pub fn rotate_zyx(&self, angle_z: T, angle_y: T, angle_x: T) -> Self {
        self.multiply(&Self::rotation_zyx(angle_z, angle_y, angle_x))
    }

    /// Writes [`rotate_zyx`](Self::rotate_zyx) into `dest`.
    #[inline]
    pub fn rotate_zyx_into(&self, angle_z: T, angle_y: T, angle_x: T, dest: &mut Self) {
        *dest = self.rotate_zyx(angle_z, angle_y, angle_x);
    }

    /// Post-multiplies [`rotation_yxz`](Self::rotation_yxz).
    #[inline]
    pub fn rotate_yxz(&self, angle_y: T, angle_x: T, angle_z: T) -> Self {
        self.multiply(&Self::rotation_yxz(angle_y, angle_x, angle_z))
    }

    /// Writes [`rotate_yxz`](Self::rotate_yxz) into `dest`.
    #[inline]
    pub fn rotate_yxz_into(&self, angle_y: T, angle_x: T, angle_z: T, dest: &mut Self) {
        *dest = self.rotate_yxz(angle_y, angle_x, angle_z);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    use xform_core::{DefaultStrategy, Exact, Fast, Precision, math::tolerance};

    use crate::{Quaterniond, Vector3d};

    #[test]
    fn test_multiply_basis() {
        let i = Quaterniond::new(1.0, 0.0, 0.0, 0.0);
        let j = Quaterniond::new(0.0, 1.0, 0.0, 0.0);
        let k = Quaterniond::new(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i.multiply(&j), k);
        assert_eq!(j.multiply(&i), -k);
        assert_eq!(i * i, Quaterniond::new(0.0, 0.0, 0.0, -1.0));
        assert_eq!(i * j * k, Quaterniond::new(0.0, 0.0, 0.0, -1.0));
    }

    #[test]
    fn test_multiply_order() {
        let a = Quaterniond::rotation_z(FRAC_PI_2);
        let b = Quaterniond::rotation_x(FRAC_PI_2);
        let v = Vector3d::Y;
        // a·b applies b first
        let ab = a.multiply(&b).transform(v);
        assert_abs_diff_eq!(ab, a.transform(b.transform(v)), epsilon = tolerance(1e-14));
        // premultiply applies self first
        let pre = a.premultiply(&b).transform(v);
        assert_abs_diff_eq!(pre, b.transform(a.transform(v)), epsilon = tolerance(1e-14));
    }

    #[test]
    fn test_self_composition() {
        let q = Quaterniond::rotation_y(0.3);
        let mut acc = q;
        acc *= acc;
        assert_abs_diff_eq!(acc, Quaterniond::rotation_y(0.6), epsilon = tolerance(1e-14));

        let mut dest = Quaterniond::IDENTITY;
        q.multiply_into(&q, &mut dest);
        assert_eq!(dest, acc);
        q.premultiply_into(&Quaterniond::IDENTITY, &mut dest);
        assert_eq!(dest, q);
    }

    #[test]
    fn test_divide_difference() {
        let a = Quaterniond::rotation_xyz(0.1, 0.2, 0.3);
        let b = Quaterniond::rotation_zyx(-0.5, 1.0, 0.25);
        assert_abs_diff_eq!(a.divide(&b).multiply(&b), a, epsilon = tolerance(1e-14));
        assert_abs_diff_eq!(a.multiply(&a.difference(&b)), b, epsilon = tolerance(1e-14));
        assert_abs_diff_eq!(a.divide(&a), Quaterniond::IDENTITY, epsilon = tolerance(1e-14));
    }

    #[test]
    fn test_rotate_local_vs_global() {
        let q = Quaterniond::rotation_x(FRAC_PI_2);
        let local = q.rotate_z(FRAC_PI_2);
        let global = q.rotate_local_z(FRAC_PI_2);
        assert_abs_diff_eq!(
            local,
            q * Quaterniond::rotation_z(FRAC_PI_2),
            epsilon = tolerance(1e-14)
        );
        assert_abs_diff_eq!(
            global,
            Quaterniond::rotation_z(FRAC_PI_2) * q,
            epsilon = tolerance(1e-14)
        );
        assert!((local.dot(&global)).abs() < 1.0 - 1e-3);
    }

    #[test]
    fn test_rotate_euler_and_axis() {
        let base = Quaterniond::rotation_y(0.2);
        assert_abs_diff_eq!(
            base.rotate_xyz(0.1, 0.2, 0.3),
            base * Quaterniond::rotation_xyz(0.1, 0.2, 0.3),
            epsilon = tolerance(1e-14)
        );
        assert_abs_diff_eq!(
            base.rotate_axis(0.4, Vector3d::new(0.0, 2.0, 0.0)),
            Quaterniond::rotation_y(0.6),
            epsilon = tolerance(1e-14)
        );
        assert_abs_diff_eq!(
            base.rotate_yxz(0.3, 0.0, 0.0),
            Quaterniond::rotation_y(0.5),
            epsilon = tolerance(1e-14)
        );
        assert_abs_diff_eq!(
            base.rotate_zyx(0.0, -0.2, 0.0),
            Quaterniond::IDENTITY,
            epsilon = tolerance(1e-14)
        );
    }

    #[test]
    fn test_multiply_with_strategies_agree() {
        let a = Quaterniond::rotation_xyz(0.3, -0.7, 1.1);
        let b = Quaterniond::from_axis_angle(Vector3d::new(1.0, 2.0, -0.5), 0.9);
        let exact = a.multiply_with(&b, &Exact);
        assert_abs_diff_eq!(a.multiply_with(&b, &Fast), exact, epsilon = tolerance(1e-14));
        assert_abs_diff_eq!(
            a.multiply_with(&b, &Precision::Fast),
            exact,
            epsilon = tolerance(1e-14)
        );
        assert_eq!(a.multiply_with(&b, &Precision::Exact), exact);
        assert_eq!(b.premultiply_with(&a, &Exact), exact);
        assert_eq!(a.multiply(&b), a.multiply_with(&b, &DefaultStrategy::default()));
    }

    #[test]
    fn test_into_forms_write_dest() {
        let q = Quaterniond::rotation_y(0.4);
        let r = Quaterniond::rotation_x(-1.2);
        let axis = Vector3d::new(0.0, 1.0, 1.0);
        let mut dest = Quaterniond::IDENTITY;

        q.divide_into(&r, &mut dest);
        assert_eq!(dest, q.divide(&r));
        q.difference_into(&r, &mut dest);
        assert_eq!(dest, q.difference(&r));
        q.rotate_x_into(0.5, &mut dest);
        assert_eq!(dest, q.rotate_x(0.5));
        q.rotate_y_into(0.5, &mut dest);
        assert_eq!(dest, q.rotate_y(0.5));
        q.rotate_z_into(0.5, &mut dest);
        assert_eq!(dest, q.rotate_z(0.5));
        q.rotate_local_x_into(-0.3, &mut dest);
        assert_eq!(dest, q.rotate_local_x(-0.3));
        q.rotate_local_y_into(-0.3, &mut dest);
        assert_eq!(dest, q.rotate_local_y(-0.3));
        q.rotate_local_z_into(-0.3, &mut dest);
        assert_eq!(dest, q.rotate_local_z(-0.3));
        q.rotate_axis_into(0.8, axis, &mut dest);
        assert_eq!(dest, q.rotate_axis(0.8, axis));
        q.rotate_xyz_into(0.1, 0.2, 0.3, &mut dest);
        assert_eq!(dest, q.rotate_xyz(0.1, 0.2, 0.3));
        q.rotate_zyx_into(0.1, 0.2, 0.3, &mut dest);
        assert_eq!(dest, q.rotate_zyx(0.1, 0.2, 0.3));
        q.rotate_yxz_into(0.1, 0.2, 0.3, &mut dest);
        assert_eq!(dest, q.rotate_yxz(0.1, 0.2, 0.3));
    }
}
