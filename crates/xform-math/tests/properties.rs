//! Algebraic properties of the rotation types, checked over a grid of
//! axes and angles.

use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_abs_diff_eq;
use xform_core::math::tolerance;
use xform_math::{
    AxisAngle4d, Matrix3d, Matrix4d, Matrix4x3d, Quaterniond, Vector2d, Vector3d,
    interpolate_triangle, interpolation_factors_triangle,
};

fn axes() -> Vec<Vector3d> {
    vec![
        Vector3d::X,
        Vector3d::Y,
        Vector3d::Z,
        Vector3d::new(1.0, 1.0, 1.0),
        Vector3d::new(-0.3, 0.8, 0.1),
        Vector3d::new(0.0, -2.0, 5.0),
    ]
}

fn angles() -> Vec<f64> {
    vec![0.0, 0.1, 1.0, FRAC_PI_2, 2.5, PI - 1e-3, PI, 4.0, -1.3]
}

fn rotations() -> Vec<Quaterniond> {
    let mut out = Vec::new();
    for axis in axes() {
        for angle in angles() {
            out.push(Quaterniond::from_axis_angle(axis, angle));
        }
    }
    out
}

fn same_rotation(a: &Quaterniond, b: &Quaterniond, eps: f64) -> bool {
    a.dot(b).abs() > 1.0 - eps
}

#[test]
fn test_rotation_preserves_length() {
    let v = Vector3d::new(0.3, -4.0, 2.2);
    for q in rotations() {
        assert_abs_diff_eq!(q.transform(v).length(), v.length(), epsilon = tolerance(1e-13));
        assert_abs_diff_eq!(q.transform_unit(v).length(), v.length(), epsilon = tolerance(1e-13));
    }
}

#[test]
fn test_inverse_and_conjugate() {
    for q in rotations() {
        assert_abs_diff_eq!(q * q.conjugate(), Quaterniond::IDENTITY, epsilon = tolerance(1e-14));
        let scaled = q * 3.5;
        assert_abs_diff_eq!(
            scaled * scaled.invert(),
            Quaterniond::IDENTITY,
            epsilon = tolerance(1e-14)
        );
        assert_abs_diff_eq!(
            scaled.invert() * scaled,
            Quaterniond::IDENTITY,
            epsilon = tolerance(1e-14)
        );
    }
}

#[test]
fn test_matrix_round_trip_every_shape() {
    for q in rotations() {
        let m3 = Matrix3d::from_quaternion(&q);
        let m4 = Matrix4d::from_quaternion(&q);
        let m43 = Matrix4x3d::from_quaternion(&q);
        assert!(
            same_rotation(&Quaterniond::from_normalized_matrix(&m3), &q, tolerance(1e-13)),
            "{q}"
        );
        assert!(same_rotation(&m4.normalized_rotation(), &q, tolerance(1e-13)), "{q}");
        assert!(same_rotation(&m43.normalized_rotation(), &q, tolerance(1e-13)), "{q}");
    }
}

#[test]
fn test_near_half_turn_round_trip() {
    // trace close to -1 exercises the x/y/z-rooted branches
    for axis in axes() {
        for angle in [PI, PI - 1e-7, PI + 1e-7, -PI] {
            let q = Quaterniond::from_axis_angle(axis, angle);
            let back = Matrix3d::from_quaternion(&q).normalized_rotation();
            assert!(back.is_finite());
            assert!(same_rotation(&back, &q, tolerance(1e-13)), "axis {axis} angle {angle}");
        }
    }
}

#[test]
fn test_slerp_endpoints_and_midpoint() {
    let qs = rotations();
    for pair in qs.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert_abs_diff_eq!(a.slerp(&b, 0.0), a, epsilon = tolerance(1e-14));
        assert!(same_rotation(&a.slerp(&b, 1.0), &b, tolerance(1e-13)));
        let mid = a.slerp(&b, 0.5);
        assert_abs_diff_eq!(mid.dot(&a).abs(), mid.dot(&b).abs(), epsilon = tolerance(1e-12));
        // nearly parallel pairs blend linearly, which shortens slightly
        assert_abs_diff_eq!(mid.length(), 1.0, epsilon = tolerance(1e-6));
    }
}

#[test]
fn test_nlerp_iterative_converges_to_slerp() {
    let a = Quaterniond::rotation_xyz(0.2, -0.5, 1.0);
    let b = Quaterniond::rotation_xyz(-1.0, 2.0, 0.4);
    for alpha in [0.1, 0.35, 0.5, 0.8] {
        let exact = a.slerp(&b, alpha);
        let coarse = a.nlerp_iterative(&b, alpha, 0.9);
        let fine = a.nlerp_iterative(&b, alpha, 0.999_999);
        let coarse_err = 1.0 - coarse.dot(&exact).abs();
        let fine_err = 1.0 - fine.dot(&exact).abs();
        assert!(coarse_err < 1e-3, "alpha {alpha}: {coarse_err}");
        assert!(fine_err < tolerance(1e-10), "alpha {alpha}: {fine_err}");
    }
}

#[test]
fn test_nlerp_iterative_threshold_of_one_terminates() {
    let a = Quaterniond::rotation_x(0.1);
    let b = Quaterniond::rotation_x(2.9);
    let q = a.nlerp_iterative(&b, 0.3, 1.0);
    assert!(q.is_finite());
    assert!(same_rotation(&q, &a.slerp(&b, 0.3), tolerance(1e-10)));
}

#[test]
fn test_axis_angle_scenario() {
    let q = AxisAngle4d::new(Vector3d::Y, FRAC_PI_2).to_quaternion();
    assert_abs_diff_eq!(
        q.transform(Vector3d::X),
        Vector3d::new(0.0, 0.0, -1.0),
        epsilon = tolerance(1e-14)
    );
}

#[test]
fn test_rotation_to_antiparallel_scenario() {
    let q = Quaterniond::rotation_to(Vector3d::X, -Vector3d::X);
    assert!(q.is_finite());
    assert_abs_diff_eq!(q.length(), 1.0, epsilon = tolerance(1e-14));
    assert_abs_diff_eq!(q.angle(), PI, epsilon = tolerance(1e-12));
    assert_abs_diff_eq!(q.transform(Vector3d::X), -Vector3d::X, epsilon = tolerance(1e-14));
}

#[test]
fn test_euler_builders_match_products() {
    let (x, y, z) = (0.4, -1.1, 2.3);
    let rx = Quaterniond::rotation_x(x);
    let ry = Quaterniond::rotation_y(y);
    let rz = Quaterniond::rotation_z(z);
    assert_abs_diff_eq!(
        Quaterniond::rotation_xyz(x, y, z),
        rx * ry * rz,
        epsilon = tolerance(1e-14)
    );
    assert_abs_diff_eq!(
        Quaterniond::rotation_zyx(z, y, x),
        rz * ry * rx,
        epsilon = tolerance(1e-14)
    );
    assert_abs_diff_eq!(
        Quaterniond::rotation_yxz(y, x, z),
        ry * rx * rz,
        epsilon = tolerance(1e-14)
    );

    let m = Matrix3d::rotation_x(x) * Matrix3d::rotation_y(y) * Matrix3d::rotation_z(z);
    assert_abs_diff_eq!(
        Matrix3d::from_quaternion(&Quaterniond::rotation_xyz(x, y, z)),
        m,
        epsilon = tolerance(1e-14)
    );
}

#[test]
fn test_multiplication_order() {
    let a = Quaterniond::rotation_z(FRAC_PI_2);
    let b = Quaterniond::rotation_x(FRAC_PI_2);
    let v = Vector3d::Y;
    // b first, then a
    assert_abs_diff_eq!(
        a.multiply(&b).transform(v),
        a.transform(b.transform(v)),
        epsilon = tolerance(1e-14)
    );
    assert_abs_diff_eq!(
        a.premultiply(&b).transform(v),
        b.transform(a.transform(v)),
        epsilon = tolerance(1e-14)
    );
}

#[test]
fn test_barycentric_partition_of_unity() {
    let (v0, v1, v2) = (Vector2d::new(0.1, 0.2), Vector2d::new(5.0, 0.7), Vector2d::new(-2.0, 3.3));
    for i in 0..10 {
        for j in 0..10 {
            let p = Vector2d::new(i as f64 * 0.7 - 3.0, j as f64 * 0.45 - 1.0);
            let w = interpolation_factors_triangle(v0, v1, v2, p);
            assert_eq!(w.z, 1.0 - w.x - w.y);
        }
    }
    let f = [Vector3d::X, Vector3d::Y, Vector3d::Z];
    for (v, expected) in [(v0, f[0]), (v1, f[1]), (v2, f[2])] {
        let got = interpolate_triangle(v0, f[0], v1, f[1], v2, f[2], v);
        assert_abs_diff_eq!(got, expected, epsilon = tolerance(1e-14));
    }
}
