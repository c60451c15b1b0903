//! Criterion benchmarks for vertex generation and transform composition.
//! Focus resolutions: n in {3, 16, 64, 256, 1024}.
//! Results land under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use planar::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_vertices(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertices");
    for &n in &[3usize, 16, 64, 256, 1024] {
        let circle = Circle::new(5.0).with_position((1.0, -2.0)).with_rotation(30.0);
        group.bench_with_input(BenchmarkId::new("circle", n), &n, |b, &n| {
            b.iter(|| circle.vertices_with(black_box(n)))
        });

        let ngon = match NGon::new(n, 5.0) {
            Ok(g) => g.with_rotation(30.0),
            Err(e) => panic!("bench setup: {e}"),
        };
        group.bench_with_input(BenchmarkId::new("ngon", n), &ngon, |b, g| {
            b.iter(|| black_box(g).vertices())
        });
    }
    let rect = Rectangle::new(4.0, 8.0).with_rotation(45.0);
    group.bench_function("rectangle", |b| b.iter(|| black_box(&rect).vertices()));
    group.finish();
}

fn bench_transforms(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(43);
    let origins: Vec<Vector2<f64>> = (0..256)
        .map(|_| Vector2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
        .collect();

    let mut group = c.benchmark_group("transforms");
    group.bench_function("rotate_from", |b| {
        let mut shape: Shape<f64> = Rectangle::new(4.0, 8.0).into();
        b.iter(|| {
            for o in &origins {
                shape.rotate_from(black_box(1.5), *o);
            }
        })
    });
    group.bench_function("scale_from", |b| {
        let mut shape: Shape<f64> = Circle::new(1.0).into();
        b.iter(|| {
            for o in &origins {
                shape.scale_from(black_box(1.0), *o);
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_vertices, bench_transforms);
criterion_main!(benches);
