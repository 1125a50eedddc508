//! Solver benchmarks: combinatorial triplet sweep + outlier rejection
//! over growing numbers of matched networks.
//!
//! Run with: `cargo bench`
//! View HTML reports in: `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use antar_nav::{GeoPoint, IterateAll, MatchedNetwork, SolveStrategy, SolverConfig};

/// Matched networks ringed around a source point, with multiplicative
/// noise on the distance estimates the way the path-loss model produces
/// it.
fn noisy_networks(n: usize, seed: u64) -> Vec<MatchedNetwork> {
    let mut rng = StdRng::seed_from_u64(seed);
    let source = GeoPoint::new(5.0, 5.0);

    (0..n)
        .map(|i| {
            let angle = (i as f64 / n as f64) * std::f64::consts::TAU;
            let radius = 8.0 + rng.gen_range(-2.0..2.0);
            let position = GeoPoint::new(
                source.lon + radius * angle.cos(),
                source.lat + radius * angle.sin(),
            );
            let noise = rng.gen_range(0.8..1.25);
            MatchedNetwork {
                key: format!("ap-{i}"),
                position,
                level: 2,
                rssi: -60,
                distance: source.distance(&position) * noise,
            }
        })
        .collect()
}

fn bench_iterate_all(c: &mut Criterion) {
    let config = SolverConfig::default();
    let mut group = c.benchmark_group("iterate_all");

    for &n in &[4usize, 8, 12, 16] {
        let networks = noisy_networks(n, 7);
        group.bench_with_input(BenchmarkId::from_parameter(n), &networks, |b, networks| {
            b.iter(|| IterateAll.resolve(black_box(networks), black_box(&config)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_iterate_all);
criterion_main!(benches);
