//! Barycentric interpolation over a 2D triangle.
//!
//! Given vertex positions `v0, v1, v2` and a point `p`, the weights
//! `(l1, l2, l3)` satisfy `p = l1·v0 + l2·v1 + l3·v2`. They come from the
//! 2x2 determinant form
//!
//! ```text
//! den = (v1y - v2y)(v0x - v2x) + (v2x - v1x)(v0y - v2y)
//! l1  = ((v1y - v2y)(px - v2x) + (v2x - v1x)(py - v2y)) / den
//! l2  = ((v0x - v2x)(py - v2y) - (v0y - v2y)(px - v2x)) / den
//! l3  = 1 - l1 - l2
//! ```
//!
//! `l3` is derived from the other two, so the weights always sum to one.
//! [`dfdx_linear`] and [`dfdy_linear`] are the exact partial derivatives of
//! the interpolated value, not finite differences.
//!
//! A degenerate (zero-area) triangle makes `den` zero and the results
//! non-finite.
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{interpolate_triangle, interpolation_factors_triangle, Vector2d, Vector3d};
//!
//! let (v0, v1, v2) = (Vector2d::new(0.0, 0.0), Vector2d::new(1.0, 0.0), Vector2d::new(0.0, 1.0));
//! let w = interpolation_factors_triangle(v0, v1, v2, Vector2d::new(0.25, 0.25));
//! assert_eq!(w, Vector3d::new(0.5, 0.25, 0.25));
//!
//! let c = interpolate_triangle(v0, 10.0, v1, 20.0, v2, 30.0, Vector2d::new(0.25, 0.25));
//! assert_eq!(c, 17.5);
//! ```

use std::ops::{Add, Mul};

use xform_core::{Scalar, math};

use crate::{Vector2, Vector3};

/// Barycentric weights `(l1, l2, l3)` of `p` with respect to `v0, v1, v2`.
pub fn interpolation_factors_triangle<T: Scalar>(
    v0: Vector2<T>,
    v1: Vector2<T>,
    v2: Vector2<T>,
    p: Vector2<T>,
) -> Vector3<T> {
    let v12y = v1.y - v2.y;
    let v21x = v2.x - v1.x;
    let v02x = v0.x - v2.x;
    let v02y = v0.y - v2.y;
    let xv2 = p.x - v2.x;
    let yv2 = p.y - v2.y;
    let inv_den = T::ONE / math::fma(v12y, v02x, v21x * v02y);
    let l1 = math::fma(v12y, xv2, v21x * yv2) * inv_den;
    let l2 = math::fma(v02x, yv2, -v02y * xv2) * inv_den;
    Vector3::new(l1, l2, T::ONE - l1 - l2)
}

/// Blends per-vertex attributes `f0, f1, f2` at `p`.
///
/// Works for any attribute that scales by `T` and adds: scalars and every
/// vector type.
pub fn interpolate_triangle<T, A>(
    v0: Vector2<T>,
    f0: A,
    v1: Vector2<T>,
    f1: A,
    v2: Vector2<T>,
    f2: A,
    p: Vector2<T>,
) -> A
where
    T: Scalar,
    A: Copy + Mul<T, Output = A> + Add<Output = A>,
{
    let w = interpolation_factors_triangle(v0, v1, v2, p);
    f0 * w.x + f1 * w.y + f2 * w.z
}

/// Constant `d/dx` of the value interpolated from `f0, f1, f2`.
pub fn dfdx_linear<T: Scalar>(
    v0: Vector2<T>,
    f0: T,
    v1: Vector2<T>,
    f1: T,
    v2: Vector2<T>,
    f2: T,
) -> T {
    let v12y = v1.y - v2.y;
    let v02y = v0.y - v2.y;
    let den = math::fma(v12y, v0.x - v2.x, (v2.x - v1.x) * v02y);
    math::fma(v12y, f0 - f2, -v02y * (f1 - f2)) / den
}

/// Constant `d/dy` of the value interpolated from `f0, f1, f2`.
pub fn dfdy_linear<T: Scalar>(
    v0: Vector2<T>,
    f0: T,
    v1: Vector2<T>,
    f1: T,
    v2: Vector2<T>,
    f2: T,
) -> T {
    let v21x = v2.x - v1.x;
    let v02x = v0.x - v2.x;
    let den = math::fma(v1.y - v2.y, v02x, v21x * (v0.y - v2.y));
    math::fma(v21x, f0 - f2, v02x * (f1 - f2)) / den
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use xform_core::math::tolerance;

    use crate::{Vector2d, Vector3d, Vector4d};

    fn tri() -> (Vector2d, Vector2d, Vector2d) {
        (Vector2d::new(-1.0, 0.5), Vector2d::new(3.0, -0.25), Vector2d::new(0.75, 2.0))
    }

    #[test]
    fn test_factors_reconstruct_point() {
        let (v0, v1, v2) = tri();
        for p in [Vector2d::new(0.5, 0.5), Vector2d::new(-3.0, 4.0), Vector2d::new(10.0, -2.0)] {
            let w = interpolation_factors_triangle(v0, v1, v2, p);
            assert_abs_diff_eq!(w.x + w.y + w.z, 1.0, epsilon = tolerance(1e-14));
            assert_abs_diff_eq!(v0 * w.x + v1 * w.y + v2 * w.z, p, epsilon = tolerance(1e-13));
        }
    }

    #[test]
    fn test_factors_at_vertices() {
        let (v0, v1, v2) = tri();
        assert_abs_diff_eq!(
            interpolation_factors_triangle(v0, v1, v2, v0),
            Vector3d::X,
            epsilon = tolerance(1e-14)
        );
        assert_abs_diff_eq!(
            interpolation_factors_triangle(v0, v1, v2, v1),
            Vector3d::Y,
            epsilon = tolerance(1e-14)
        );
        assert_abs_diff_eq!(
            interpolation_factors_triangle(v0, v1, v2, v2),
            Vector3d::Z,
            epsilon = tolerance(1e-14)
        );
    }

    #[test]
    fn test_interpolate_at_vertices() {
        let (v0, v1, v2) = tri();
        let (f0, f1, f2) = (
            Vector4d::splat(1.0),
            Vector4d::new(0.0, 2.0, 4.0, 8.0),
            Vector4d::splat(-3.0),
        );
        assert_abs_diff_eq!(
            interpolate_triangle(v0, f0, v1, f1, v2, f2, v0),
            f0,
            epsilon = tolerance(1e-14)
        );
        assert_abs_diff_eq!(
            interpolate_triangle(v0, f0, v1, f1, v2, f2, v1),
            f1,
            epsilon = tolerance(1e-14)
        );
        assert_abs_diff_eq!(
            interpolate_triangle(v0, f0, v1, f1, v2, f2, v2),
            f2,
            epsilon = tolerance(1e-14)
        );
    }

    #[test]
    fn test_derivatives_of_linear_field() {
        // f(x, y) = 3x - 2y + 1 is reproduced exactly by linear interpolation
        let f = |v: Vector2d| 3.0 * v.x - 2.0 * v.y + 1.0;
        let (v0, v1, v2) = tri();
        let (f0, f1, f2) = (f(v0), f(v1), f(v2));
        assert_abs_diff_eq!(dfdx_linear(v0, f0, v1, f1, v2, f2), 3.0, epsilon = tolerance(1e-13));
        assert_abs_diff_eq!(dfdy_linear(v0, f0, v1, f1, v2, f2), -2.0, epsilon = tolerance(1e-13));

        let p = Vector2d::new(0.2, 0.9);
        assert_abs_diff_eq!(
            interpolate_triangle(v0, f0, v1, f1, v2, f2, p),
            f(p),
            epsilon = tolerance(1e-13)
        );
    }

    #[test]
    fn test_derivatives_match_interpolation() {
        let (v0, v1, v2) = tri();
        let (f0, f1, f2) = (0.3, -1.7, 5.0);
        let p = Vector2d::new(0.4, 0.6);
        let h = 0.5;
        let at = |q: Vector2d| interpolate_triangle(v0, f0, v1, f1, v2, f2, q);
        // the field is linear, so a finite step gives the exact slope
        let dx = (at(p + Vector2d::new(h, 0.0)) - at(p)) / h;
        let dy = (at(p + Vector2d::new(0.0, h)) - at(p)) / h;
        assert_abs_diff_eq!(dfdx_linear(v0, f0, v1, f1, v2, f2), dx, epsilon = tolerance(1e-12));
        assert_abs_diff_eq!(dfdy_linear(v0, f0, v1, f1, v2, f2), dy, epsilon = tolerance(1e-12));
    }

    #[test]
    fn test_degenerate_triangle() {
        let v = Vector2d::new(1.0, 1.0);
        let w = interpolation_factors_triangle(Vector2d::ZERO, v, v * 2.0, Vector2d::X);
        assert!(!w.is_finite());
    }
}
