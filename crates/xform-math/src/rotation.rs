//! Matrix ↔ quaternion conversion shared by every matrix shape.
//!
//! The extraction works on the upper-left 3×3 block, given column-major as
//! `m[col][row]`. [`RotationPart`] exposes that block for [`Matrix3`],
//! [`Matrix4`] and [`Matrix4x3`], so one generic routine serves all of them
//! in both precisions.
//!
//! # Branch selection
//!
//! Dividing by `sqrt(trace + 1)` breaks down near 180° rotations where the
//! trace approaches -1. The extraction therefore roots the formula at the
//! largest of `trace`, `m00`, `m11`, `m22`:
//!
//! ```text
//! trace >= 0          -> w = sqrt(trace + 1) / 2
//! m00 largest         -> x = sqrt(m00 - m11 - m22 + 1) / 2
//! m11 largest         -> y = sqrt(m11 - m22 - m00 + 1) / 2
//! otherwise           -> z = sqrt(m22 - m00 - m11 + 1) / 2
//! ```
//!
//! and derives the other three components from off-diagonal sums and
//! differences scaled by `0.5 / t`.

use xform_core::{MathStrategy, Scalar};

use crate::{Matrix3, Matrix4, Matrix4x3, Quaternion};

/// Matrices with a 3×3 linear (rotation/scale) block.
pub trait RotationPart<T: Scalar> {
    /// Upper-left 3×3 block, column-major: `[col][row]`.
    fn rotation_part(&self) -> [[T; 3]; 3];
}

impl<T: Scalar> RotationPart<T> for Matrix3<T> {
    #[inline]
    fn rotation_part(&self) -> [[T; 3]; 3] {
        [
            [self.m00, self.m01, self.m02],
            [self.m10, self.m11, self.m12],
            [self.m20, self.m21, self.m22],
        ]
    }
}

impl<T: Scalar> RotationPart<T> for Matrix4<T> {
    #[inline]
    fn rotation_part(&self) -> [[T; 3]; 3] {
        [
            [self.m00, self.m01, self.m02],
            [self.m10, self.m11, self.m12],
            [self.m20, self.m21, self.m22],
        ]
    }
}

impl<T: Scalar> RotationPart<T> for Matrix4x3<T> {
    #[inline]
    fn rotation_part(&self) -> [[T; 3]; 3] {
        [
            [self.m00, self.m01, self.m02],
            [self.m10, self.m11, self.m12],
            [self.m20, self.m21, self.m22],
        ]
    }
}

/// Which component the extraction was rooted at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Branch {
    /// Non-negative trace, rooted at `w`.
    Trace,
    /// `m00` dominant, rooted at `x`.
    X,
    /// `m11` dominant, rooted at `y`.
    Y,
    /// `m22` dominant, rooted at `z`.
    Z,
}

#[inline]
pub(crate) fn select_branch<T: Scalar>(m: &[[T; 3]; 3]) -> Branch {
    let (m00, m11, m22) = (m[0][0], m[1][1], m[2][2]);
    if m00 + m11 + m22 >= T::ZERO {
        Branch::Trace
    } else if m00 >= m11 && m00 >= m22 {
        Branch::X
    } else if m11 > m22 {
        Branch::Y
    } else {
        Branch::Z
    }
}

/// Quaternion of an orthonormal basis.
///
/// The columns must be unit length and mutually orthogonal; otherwise the
/// result is not a unit quaternion.
pub(crate) fn quaternion_from_basis<T: Scalar>(m: &[[T; 3]; 3]) -> Quaternion<T> {
    let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = *m;
    let half = T::half();
    match select_branch(m) {
        Branch::Trace => {
            let t = (m00 + m11 + m22 + T::ONE).sqrt();
            let w = t * half;
            let t = half / t;
            Quaternion::new((m12 - m21) * t, (m20 - m02) * t, (m01 - m10) * t, w)
        }
        Branch::X => {
            let t = (m00 - (m11 + m22) + T::ONE).sqrt();
            let x = t * half;
            let t = half / t;
            Quaternion::new(x, (m10 + m01) * t, (m02 + m20) * t, (m12 - m21) * t)
        }
        Branch::Y => {
            let t = (m11 - (m22 + m00) + T::ONE).sqrt();
            let y = t * half;
            let t = half / t;
            Quaternion::new((m10 + m01) * t, y, (m21 + m12) * t, (m20 - m02) * t)
        }
        Branch::Z => {
            let t = (m22 - (m00 + m11) + T::ONE).sqrt();
            let z = t * half;
            let t = half / t;
            Quaternion::new((m02 + m20) * t, (m21 + m12) * t, z, (m01 - m10) * t)
        }
    }
}

/// Quaternion of a basis whose columns may carry scale.
///
/// Each column is divided by its own length before extraction. Shear is not
/// removed.
pub(crate) fn quaternion_from_unnormalized_basis<T: Scalar, M: MathStrategy>(
    m: &[[T; 3]; 3],
    strategy: &M,
) -> Quaternion<T> {
    let mut n = *m;
    for col in n.iter_mut() {
        let len_sq = strategy.fma(col[0], col[0], strategy.fma(col[1], col[1], col[2] * col[2]));
        let inv = strategy.inv_sqrt(len_sq);
        col[0] *= inv;
        col[1] *= inv;
        col[2] *= inv;
    }
    quaternion_from_basis(&n)
}

/// Rotation block of a quaternion, column-major `[col][row]`.
///
/// Exact inverse of [`quaternion_from_basis`] for unit quaternions. A
/// non-unit quaternion yields the rotation scaled by its squared norm.
pub(crate) fn basis_from_quaternion<T: Scalar>(q: &Quaternion<T>) -> [[T; 3]; 3] {
    let w2 = q.w * q.w;
    let x2 = q.x * q.x;
    let y2 = q.y * q.y;
    let z2 = q.z * q.z;
    let zw = q.z * q.w;
    let dzw = zw + zw;
    let xy = q.x * q.y;
    let dxy = xy + xy;
    let xz = q.x * q.z;
    let dxz = xz + xz;
    let yw = q.y * q.w;
    let dyw = yw + yw;
    let yz = q.y * q.z;
    let dyz = yz + yz;
    let xw = q.x * q.w;
    let dxw = xw + xw;
    [
        [w2 + x2 - z2 - y2, dxy + dzw, dxz - dyw],
        [dxy - dzw, y2 - z2 + w2 - x2, dyz + dxw],
        [dyw + dxz, dyz - dxw, z2 - y2 - x2 + w2],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;
    use xform_core::math::tolerance;

    use crate::{Quaterniond, Vector3d};

    fn same_rotation(a: Quaterniond, b: Quaterniond) -> bool {
        a.dot(&b).abs() > 1.0 - tolerance(1e-12)
    }

    #[test]
    fn test_branch_regions() {
        let cases = [
            (Quaterniond::from_axis_angle(Vector3d::new(1.0, 2.0, 3.0), 0.5), Branch::Trace),
            (Quaterniond::from_axis_angle(Vector3d::X, PI - 0.01), Branch::X),
            (Quaterniond::from_axis_angle(Vector3d::Y, PI - 0.01), Branch::Y),
            (Quaterniond::from_axis_angle(Vector3d::Z, PI - 0.01), Branch::Z),
        ];
        for (q, branch) in cases {
            let basis = basis_from_quaternion(&q);
            assert_eq!(select_branch(&basis), branch);
            assert!(same_rotation(quaternion_from_basis(&basis), q), "{branch:?}");
        }
    }

    #[test]
    fn test_exact_half_turns() {
        for axis in [Vector3d::X, Vector3d::Y, Vector3d::Z, Vector3d::new(1.0, 1.0, 0.0)] {
            let q = Quaterniond::from_axis_angle(axis, PI);
            let back = quaternion_from_basis(&basis_from_quaternion(&q));
            assert!(same_rotation(back, q), "axis {axis}");
            assert!(back.is_finite());
        }
    }

    #[test]
    fn test_unnormalized_basis() {
        let q = Quaterniond::from_axis_angle(Vector3d::new(0.3, -1.0, 0.2), 2.0);
        let mut basis = basis_from_quaternion(&q);
        for (col, s) in basis.iter_mut().zip([2.0, 0.5, 7.0]) {
            col.iter_mut().for_each(|v| *v *= s);
        }
        let back = quaternion_from_unnormalized_basis(&basis, &xform_core::Exact);
        assert!(same_rotation(back, q));
        assert_abs_diff_eq!(back.length(), 1.0, epsilon = tolerance(1e-12));
    }

    #[test]
    fn test_identity_basis() {
        let basis = basis_from_quaternion(&Quaterniond::IDENTITY);
        assert_eq!(basis, [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert_eq!(quaternion_from_basis(&basis), Quaterniond::IDENTITY);
    }
}
