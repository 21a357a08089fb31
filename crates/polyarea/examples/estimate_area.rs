//! Estimate the area of one random polygon both ways and print the errors.
//!
//! Usage:
//!   cargo run -p polyarea --example estimate_area -- [vertices] [samples]
//!
//! The shoelace area serves as the reference here; the CLI uses `geo` instead.

use polyarea::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    let mut args = std::env::args().skip(1);
    let vertices: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(50);
    let samples: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let cfg = PolygonCfg {
        vertex_count: vertices,
        radius: 50.0,
        ..PolygonCfg::default()
    };
    let mut rng = StdRng::seed_from_u64(42);
    let poly = match generate_polygon(cfg, &mut rng) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("estimate_area: {e}");
            return;
        }
    };
    let reference = |p: &Polygon| shoelace_area(p);
    match compare_areas(&poly, &reference, samples, &mut rng) {
        Ok(c) => {
            println!("N={} M={}", poly.vertex_count(), c.samples);
            println!("  shoelace:    {:.4} ({:.6}%)", c.shoelace, c.shoelace_error);
            println!("  monte carlo: {:.4} ({:.4}%)", c.monte_carlo, c.monte_carlo_error);
        }
        Err(e) => eprintln!("estimate_area: {e}"),
    }
}
