use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use polyarea::api::{
    compare_areas, convergence_study, generate_polygon, monte_carlo_area, shoelace_area,
    PolygonCfg, ReferenceArea, ReplayToken,
};
use polyarea::Polygon;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::hint::black_box;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod reference;
mod tables;

use provenance::{write_sidecar, Payload};
use reference::GeoReference;
use tables::BenchRow;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Polygon area experiments: shoelace vs Monte Carlo vs geo")]
struct Cmd {
    /// RNG seed; a fresh one is drawn (and logged) when omitted
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Free-form run label; recorded in logs and provenance sidecars
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Copy, Debug)]
struct PolyArgs {
    /// Number of vertices
    #[arg(long, default_value_t = 50)]
    vertices: usize,
    /// Circumradius
    #[arg(long, default_value_t = 50.0)]
    radius: f64,
    /// Radial spread in [0, 1]
    #[arg(long, default_value_t = 0.35)]
    irregularity: f64,
}

impl PolyArgs {
    fn cfg(&self) -> PolygonCfg {
        PolygonCfg {
            vertex_count: self.vertices,
            radius: self.radius,
            irregularity: self.irregularity,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Generate a random polygon and write its closed ring (csv or parquet)
    Generate {
        #[command(flatten)]
        poly: PolyArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Reference (geo), shoelace and Monte Carlo areas of one polygon
    Compare {
        #[command(flatten)]
        poly: PolyArgs,
        /// Read the polygon from a table with x, y columns instead of generating one
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, default_value_t = 100_000)]
        samples: usize,
        /// Optional JSON output
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Monte Carlo error as a function of the sample count
    Convergence {
        #[command(flatten)]
        poly: PolyArgs,
        #[arg(long, value_delimiter = ',', default_values_t = vec![100usize, 1_000, 10_000, 100_000])]
        samples: Vec<usize>,
        #[arg(long, default_value_t = 1)]
        trials: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Runtime of the three area computations across vertex counts
    Bench {
        #[arg(long, value_delimiter = ',', default_values_t = vec![10usize, 50, 100, 1000])]
        vertices: Vec<usize>,
        #[arg(long, default_value_t = 50.0)]
        radius: f64,
        #[arg(long, default_value_t = 0.35)]
        irregularity: f64,
        /// Repetitions for the exact methods (Monte Carlo runs once)
        #[arg(long, default_value_t = 100)]
        repeats: usize,
        #[arg(long, default_value_t = 100_000)]
        samples: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let seed = cmd.seed.unwrap_or_else(|| ReplayToken::fresh().seed);
    tracing::info!(seed, tag = ?cmd.tag, "start");
    let mut rng = StdRng::seed_from_u64(seed);
    match cmd.action {
        Action::Generate { poly, out } => generate(poly, &out, seed, cmd.tag, &mut rng),
        Action::Compare {
            poly,
            input,
            samples,
            out,
        } => compare(poly, input.as_deref(), samples, out.as_deref(), seed, cmd.tag, &mut rng),
        Action::Convergence {
            poly,
            samples,
            trials,
            out,
        } => convergence(poly, &samples, trials, &out, seed, cmd.tag, &mut rng),
        Action::Bench {
            vertices,
            radius,
            irregularity,
            repeats,
            samples,
            out,
        } => {
            let cfg = PolygonCfg {
                radius,
                irregularity,
                ..PolygonCfg::default()
            };
            bench(cfg, &vertices, repeats, samples, &out, seed, cmd.tag, &mut rng)
        }
        Action::Report => report(seed, cmd.tag),
    }
}

fn generate(
    poly: PolyArgs,
    out: &Path,
    seed: u64,
    tag: Option<String>,
    rng: &mut StdRng,
) -> Result<()> {
    tracing::info!(?poly, out = %out.display(), "generate");
    let polygon = generate_polygon(poly.cfg(), rng).context("generating polygon")?;
    let area = GeoReference.reference_area(&polygon);
    tracing::info!(vertices = polygon.vertex_count(), area, "polygon");
    println!(
        "Polygon with N={} vertices: area (geo) {area:.4}",
        polygon.vertex_count()
    );
    tables::write_frame(&mut tables::polygon_frame(&polygon)?, out)?;
    let payload = Payload::new(serde_json::json!({
        "command": "generate",
        "vertices": poly.vertices,
        "radius": poly.radius,
        "irregularity": poly.irregularity,
    }))
    .with_seed(seed)
    .with_tag(tag);
    write_sidecar(out, payload)?;
    Ok(())
}

#[derive(Serialize)]
struct CompareRecord {
    vertices: usize,
    samples: usize,
    reference_area: f64,
    shoelace_area: f64,
    monte_carlo_area: f64,
    shoelace_error_pct: f64,
    monte_carlo_error_pct: f64,
}

fn load_or_generate(poly: PolyArgs, input: Option<&Path>, rng: &mut StdRng) -> Result<Polygon> {
    let polygon = match input {
        Some(path) => tables::read_polygon(path)?,
        None => generate_polygon(poly.cfg(), rng).context("generating polygon")?,
    };
    if !polygon.is_simple() {
        tracing::warn!(
            vertices = polygon.vertex_count(),
            "polygon is not simple; areas may disagree"
        );
    }
    Ok(polygon)
}

fn compare(
    poly: PolyArgs,
    input: Option<&Path>,
    samples: usize,
    out: Option<&Path>,
    seed: u64,
    tag: Option<String>,
    rng: &mut StdRng,
) -> Result<()> {
    tracing::info!(?poly, samples, "compare");
    let polygon = load_or_generate(poly, input, rng)?;
    let cmp = compare_areas(&polygon, &GeoReference, samples, rng).context("comparing areas")?;
    println!("Polygon with N={} vertices:", polygon.vertex_count());
    println!("  Area (geo):          {:.4}", cmp.reference);
    println!("  Area (shoelace):     {:.4}", cmp.shoelace);
    println!("  Area (Monte Carlo):  {:.4}", cmp.monte_carlo);
    println!("Shoelace error:    {:.6}%", cmp.shoelace_error);
    println!("Monte Carlo error: {:.4}%", cmp.monte_carlo_error);
    tracing::info!(
        shoelace_error = cmp.shoelace_error,
        monte_carlo_error = cmp.monte_carlo_error,
        "compare_done"
    );
    if let Some(out) = out {
        let record = CompareRecord {
            vertices: polygon.vertex_count(),
            samples: cmp.samples,
            reference_area: cmp.reference,
            shoelace_area: cmp.shoelace,
            monte_carlo_area: cmp.monte_carlo,
            shoelace_error_pct: cmp.shoelace_error,
            monte_carlo_error_pct: cmp.monte_carlo_error,
        };
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(out, serde_json::to_vec_pretty(&record)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let payload = Payload::new(serde_json::json!({
            "command": "compare",
            "input": input.map(|p| p.display().to_string()),
            "vertices": poly.vertices,
            "radius": poly.radius,
            "irregularity": poly.irregularity,
            "samples": samples,
        }))
        .with_seed(seed)
        .with_tag(tag);
        write_sidecar(out, payload)?;
    }
    Ok(())
}

fn convergence(
    poly: PolyArgs,
    sample_counts: &[usize],
    trials: usize,
    out: &Path,
    seed: u64,
    tag: Option<String>,
    rng: &mut StdRng,
) -> Result<()> {
    tracing::info!(?poly, ?sample_counts, trials, "convergence");
    let polygon = generate_polygon(poly.cfg(), rng).context("generating polygon")?;
    let reference = GeoReference.reference_area(&polygon);
    println!("Reference area (geo): {reference:.4}\n");
    println!("{:<15} {:<15} {:<15}", "M (points)", "Area (MC)", "Error (%)");
    println!("{}", "-".repeat(45));
    let rows = convergence_study(&polygon, reference, sample_counts, trials, rng)
        .context("convergence study")?;
    for row in &rows {
        println!(
            "{:<15} {:<15.4} {:<15.4}",
            row.samples, row.mean_area, row.mean_error
        );
        tracing::info!(
            samples = row.samples,
            mean_error = row.mean_error,
            "convergence_row"
        );
    }
    tables::write_frame(&mut tables::convergence_frame(&rows)?, out)?;
    let payload = Payload::new(serde_json::json!({
        "command": "convergence",
        "vertices": poly.vertices,
        "radius": poly.radius,
        "irregularity": poly.irregularity,
        "samples": sample_counts,
        "trials": trials,
        "reference_area": reference,
    }))
    .with_seed(seed)
    .with_tag(tag);
    write_sidecar(out, payload)?;
    Ok(())
}

/// Mean wall-clock seconds of `f` over `repeats` calls.
fn time_per_call<T>(repeats: usize, mut f: impl FnMut() -> T) -> f64 {
    let repeats = repeats.max(1);
    let start = Instant::now();
    for _ in 0..repeats {
        let _ = black_box(f());
    }
    start.elapsed().as_secs_f64() / repeats as f64
}

#[allow(clippy::too_many_arguments)]
fn bench(
    base: PolygonCfg,
    vertex_counts: &[usize],
    repeats: usize,
    samples: usize,
    out: &Path,
    seed: u64,
    tag: Option<String>,
    rng: &mut StdRng,
) -> Result<()> {
    tracing::info!(?vertex_counts, repeats, samples, "bench");
    println!(
        "{:<10} {:<15} {:<15} {:<20}",
        "N", "geo (s)", "shoelace (s)", "Monte Carlo (s)"
    );
    println!("{}", "-".repeat(60));
    let mut rows = Vec::with_capacity(vertex_counts.len());
    for &n in vertex_counts {
        let cfg = PolygonCfg {
            vertex_count: n,
            ..base
        };
        let polygon = generate_polygon(cfg, rng).with_context(|| format!("generating N={n}"))?;
        let reference_s = time_per_call(repeats, || GeoReference.reference_area(&polygon));
        let shoelace_s = time_per_call(repeats, || shoelace_area(&polygon));
        let start = Instant::now();
        let _ = black_box(monte_carlo_area(&polygon, samples, rng).context("monte carlo")?);
        let monte_carlo_s = start.elapsed().as_secs_f64();
        println!("{n:<10} {reference_s:<15.6} {shoelace_s:<15.6} {monte_carlo_s:<20.6}");
        tracing::info!(n, reference_s, shoelace_s, monte_carlo_s, "bench_row");
        rows.push(BenchRow {
            vertices: n,
            reference_s,
            shoelace_s,
            monte_carlo_s,
        });
    }
    tables::write_frame(&mut tables::bench_frame(&rows)?, out)?;
    let payload = Payload::new(serde_json::json!({
        "command": "bench",
        "vertices": vertex_counts,
        "radius": base.radius,
        "irregularity": base.irregularity,
        "repeats": repeats,
        "samples": samples,
    }))
    .with_seed(seed)
    .with_tag(tag);
    write_sidecar(out, payload)?;
    Ok(())
}

fn report(seed: u64, tag: Option<String>) -> Result<()> {
    let payload = Payload::new(serde_json::json!({})).with_seed(seed).with_tag(tag);
    let obj = provenance::document(&payload, &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
