//! Criterion microbenches for the random polygon generator.
//!
//! - draw_polygon at n in {10, 100, 1000} (dominated by the O(n²) simplicity check).
//! - PolygonGenerator streaming.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polyarea::api::{draw_polygon, PolygonCfg, PolygonGenerator, ReplayToken};

fn bench_gen(c: &mut Criterion) {
    let mut group = c.benchmark_group("gen2d");
    for &n in &[10usize, 100, 1000] {
        let cfg = PolygonCfg {
            vertex_count: n,
            radius: 50.0,
            irregularity: 0.35,
        };
        group.bench_with_input(BenchmarkId::new("draw_polygon", n), &cfg, |b, cfg| {
            b.iter_batched(
                || ReplayToken { seed: 42, index: 0 },
                |mut tok| {
                    tok.index = tok.index.wrapping_add(1);
                    let _ = draw_polygon(*cfg, tok);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.bench_function(BenchmarkId::new("generator_next", "n50"), |b| {
        let cfg = PolygonCfg {
            vertex_count: 50,
            ..PolygonCfg::default()
        };
        b.iter_batched(
            || PolygonGenerator::new(cfg, 2025).unwrap(),
            |mut gen| {
                let _ = gen.generate_next().unwrap();
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_gen);
criterion_main!(benches);
