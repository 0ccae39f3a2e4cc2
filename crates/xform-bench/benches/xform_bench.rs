//! Benchmarks for the xform hot paths.
//!
//! Run with: `cargo bench`
//! Compare strategies with: `cargo bench --features fast-math`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use xform_buffer::put_f32;
use xform_math::{Matrix3d, Matrix4d, Matrix4f, Quaterniond, Quaternionf, Vector3d, Vector3f};

fn rotations(n: usize) -> Vec<Quaternionf> {
    (0..n)
        .map(|i| {
            let t = i as f32 / n as f32;
            Quaternionf::rotation_xyz(t * 3.0, 1.0 - t * 2.0, t * 0.5)
        })
        .collect()
}

/// Quaternion and matrix composition.
fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    let a = Quaterniond::rotation_xyz(0.1, 0.2, 0.3);
    let b = Quaterniond::rotation_zyx(1.0, -0.5, 0.25);
    group.bench_function("quaternion", |bch| bch.iter(|| black_box(a).multiply(&black_box(b))));

    let ma = Matrix4d::from_quaternion(&a);
    let mb = Matrix4d::translation(Vector3d::new(1.0, 2.0, 3.0));
    group.bench_function("matrix4", |bch| bch.iter(|| black_box(ma).multiply(&black_box(mb))));
    group.bench_function("matrix4_invert", |bch| bch.iter(|| black_box(ma).invert()));

    group.finish();
}

/// Rotating a batch of vectors.
fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    let q = Quaternionf::rotation_axis(0.7, Vector3f::new(1.0, 2.0, 3.0));
    let m = q.to_matrix3();

    for size in [1000, 100000].iter() {
        let points: Vec<Vector3f> = (0..*size).map(|i| Vector3f::splat(i as f32 * 1e-3)).collect();
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("quaternion", size), &points, |b, v| {
            b.iter(|| v.iter().map(|&p| q.transform(black_box(p))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("quaternion_unit", size), &points, |b, v| {
            b.iter(|| v.iter().map(|&p| q.transform_unit(black_box(p))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("matrix3", size), &points, |b, v| {
            b.iter(|| v.iter().map(|&p| m.transform(black_box(p))).collect::<Vec<_>>())
        });
    }

    group.finish();
}

/// slerp against the normalized-lerp approximations.
fn bench_interpolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolation");
    let qs = rotations(1024);
    group.throughput(Throughput::Elements(qs.len() as u64 - 1));

    group.bench_function("slerp", |b| {
        b.iter(|| qs.windows(2).map(|w| w[0].slerp(&w[1], black_box(0.3))).collect::<Vec<_>>())
    });

    group.bench_function("nlerp", |b| {
        b.iter(|| qs.windows(2).map(|w| w[0].nlerp(&w[1], black_box(0.3))).collect::<Vec<_>>())
    });

    for threshold in [0.99f32, 0.9999] {
        group.bench_with_input(BenchmarkId::new("nlerp_iterative", threshold), &threshold, |b, &t| {
            b.iter(|| {
                qs.windows(2)
                    .map(|w| w[0].nlerp_iterative(&w[1], black_box(0.3), t))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Matrix to quaternion extraction across the branch regions.
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");
    let matrices: Vec<Matrix3d> = [0.1, 1.5, 2.9, 3.1]
        .iter()
        .flat_map(|&a| {
            [Vector3d::X, Vector3d::Y, Vector3d::Z].map(|axis| Matrix3d::rotation_axis(a, axis))
        })
        .collect();
    group.throughput(Throughput::Elements(matrices.len() as u64));

    group.bench_function("normalized", |b| {
        b.iter(|| matrices.iter().map(|m| black_box(m).normalized_rotation()).collect::<Vec<_>>())
    });

    group.bench_function("unnormalized", |b| {
        b.iter(|| matrices.iter().map(|m| black_box(m).unnormalized_rotation()).collect::<Vec<_>>())
    });

    group.finish();
}

/// Uploading matrices to a float buffer.
fn bench_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer");
    let m = Matrix4f::translation(Vector3f::new(1.0, 2.0, 3.0));
    let mut buf = vec![0.0f32; 16 * 1024];
    group.throughput(Throughput::Elements(1024));

    group.bench_function("put_f32_matrix4", |b| {
        b.iter(|| {
            for i in 0..1024 {
                black_box(put_f32(black_box(&m), &mut buf, i * 16)).ok();
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_multiply,
    bench_transform,
    bench_interpolation,
    bench_extraction,
    bench_buffer,
);
criterion_main!(benches);
