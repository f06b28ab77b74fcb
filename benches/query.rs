use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geo_point_index::GeoPointIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_points(n: usize) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|_| (rng.gen_range(-90.0..90.0), rng.gen_range(-180.0..180.0)))
        .collect()
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [1_000, 10_000, 100_000] {
        let points = generate_points(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &points, |b, points| {
            b.iter(|| GeoPointIndex::build_from(points.clone(), |p| p.0, |p| p.1).unwrap())
        });
    }

    group.finish();
}

fn benchmark_query(c: &mut Criterion) {
    let points = generate_points(100_000);
    let index = GeoPointIndex::build_from(points, |p| p.0, |p| p.1).unwrap();

    let mut group = c.benchmark_group("query_within_distance");

    for radius_meters in [1_000.0, 10_000.0, 100_000.0] {
        group.bench_with_input(
            BenchmarkId::from_parameter(radius_meters),
            &radius_meters,
            |b, &radius_meters| {
                let mut rng = StdRng::seed_from_u64(7);
                b.iter(|| {
                    let latitude = rng.gen_range(-90.0..90.0);
                    let longitude = rng.gen_range(-180.0..180.0);
                    let mut hits = 0_usize;
                    index
                        .query_within_distance(latitude, longitude, radius_meters, |_, _| {
                            hits += 1
                        })
                        .unwrap();
                    hits
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_query);
criterion_main!(benches);
