//! Criterion benchmarks for the two area estimators.
//! Focus sizes: n in {10, 50, 100, 1000} vertices; Monte Carlo at M = 1e3 and 1e5.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polyarea::api::{draw_polygon, monte_carlo_area, shoelace_area, PolygonCfg, ReplayToken};
use rand::{rngs::StdRng, SeedableRng};

fn polygon(n: usize) -> polyarea::Polygon {
    let cfg = PolygonCfg {
        vertex_count: n,
        radius: 50.0,
        irregularity: 0.35,
    };
    draw_polygon(
        cfg,
        ReplayToken {
            seed: 42,
            index: n as u64,
        },
    )
    .unwrap()
}

fn bench_area(c: &mut Criterion) {
    let mut group = c.benchmark_group("area");
    for &n in &[10usize, 50, 100, 1000] {
        let p = polygon(n);
        group.bench_with_input(BenchmarkId::new("shoelace", n), &p, |b, p| {
            b.iter(|| shoelace_area(p))
        });
        for &m in &[1_000usize, 100_000] {
            group.bench_with_input(
                BenchmarkId::new(format!("monte_carlo_m{m}"), n),
                &p,
                |b, p| {
                    b.iter_batched(
                        || StdRng::seed_from_u64(7),
                        |mut rng| monte_carlo_area(p, m, &mut rng).unwrap(),
                        BatchSize::SmallInput,
                    )
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_area);
criterion_main!(benches);
