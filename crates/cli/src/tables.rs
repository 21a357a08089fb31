//! Polars tables in and out: polygon rings, convergence rows, benchmark rows.
//!
//! Writers pick the format from the extension (`.parquet`, anything else CSV).

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use polyarea::area::ConvergenceRow;
use polyarea::{Point, Polygon};
use std::fs::{self, File};
use std::path::Path;

/// One row of the runtime benchmark (seconds per call).
#[derive(Clone, Copy, Debug)]
pub struct BenchRow {
    pub vertices: usize,
    pub reference_s: f64,
    pub shoelace_s: f64,
    pub monte_carlo_s: f64,
}

/// Closed ring as columns `x, y`.
pub fn polygon_frame(polygon: &Polygon) -> PolarsResult<DataFrame> {
    let xs: Vec<f64> = polygon.ring().iter().map(|p| p.x).collect();
    let ys: Vec<f64> = polygon.ring().iter().map(|p| p.y).collect();
    df!("x" => xs, "y" => ys)
}

pub fn convergence_frame(rows: &[ConvergenceRow]) -> PolarsResult<DataFrame> {
    df!(
        "samples" => rows.iter().map(|r| r.samples as u64).collect::<Vec<_>>(),
        "trials" => rows.iter().map(|r| r.trials as u64).collect::<Vec<_>>(),
        "mean_area" => rows.iter().map(|r| r.mean_area).collect::<Vec<_>>(),
        "mean_error_pct" => rows.iter().map(|r| r.mean_error).collect::<Vec<_>>(),
        "min_error_pct" => rows.iter().map(|r| r.min_error).collect::<Vec<_>>(),
        "max_error_pct" => rows.iter().map(|r| r.max_error).collect::<Vec<_>>()
    )
}

pub fn bench_frame(rows: &[BenchRow]) -> PolarsResult<DataFrame> {
    df!(
        "vertices" => rows.iter().map(|r| r.vertices as u64).collect::<Vec<_>>(),
        "reference_s" => rows.iter().map(|r| r.reference_s).collect::<Vec<_>>(),
        "shoelace_s" => rows.iter().map(|r| r.shoelace_s).collect::<Vec<_>>(),
        "monte_carlo_s" => rows.iter().map(|r| r.monte_carlo_s).collect::<Vec<_>>()
    )
}

pub fn write_frame(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if is_parquet(path) {
        ParquetWriter::new(&mut file)
            .finish(df)
            .with_context(|| format!("writing parquet {}", path.display()))?;
    } else {
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(df)
            .with_context(|| format!("writing csv {}", path.display()))?;
    }
    Ok(())
}

/// Load a polygon written by `generate` (or any table with `x, y` columns).
pub fn read_polygon(path: &Path) -> Result<Polygon> {
    let lf = if is_parquet(path) {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())?
    } else {
        LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?
    };
    let df = lf
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let xs = f64_column(&df, "x")?;
    let ys = f64_column(&df, "y")?;
    let points: Vec<Point> = xs
        .into_iter()
        .zip(ys)
        .map(|(x, y)| Point::new(x, y))
        .collect();
    Polygon::new(points).with_context(|| format!("polygon in {}", path.display()))
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column {name:?}"))?
        .cast(&DataType::Float64)?;
    if col.null_count() > 0 {
        bail!("column {name:?} contains nulls");
    }
    Ok(col.f64()?.into_no_null_iter().collect())
}

fn is_parquet(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyarea::api::{draw_polygon, PolygonCfg, ReplayToken};
    use tempfile::tempdir;

    fn sample() -> Polygon {
        draw_polygon(PolygonCfg::default(), ReplayToken { seed: 3, index: 1 }).unwrap()
    }

    #[test]
    fn polygon_csv_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("polygon.csv");
        let poly = sample();
        let mut df = polygon_frame(&poly).unwrap();
        assert_eq!(df.height(), poly.ring().len());
        write_frame(&mut df, &path).unwrap();
        let back = read_polygon(&path).unwrap();
        assert_eq!(back.vertex_count(), poly.vertex_count());
        for (a, b) in back.ring().iter().zip(poly.ring()) {
            assert!((a - b).norm() < 1e-9);
        }
    }

    #[test]
    fn polygon_parquet_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("polygon.parquet");
        let poly = sample();
        write_frame(&mut polygon_frame(&poly).unwrap(), &path).unwrap();
        let back = read_polygon(&path).unwrap();
        assert_eq!(back, poly);
    }

    #[test]
    fn missing_columns_are_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "a,b\n1,2\n3,4\n5,6\n").unwrap();
        assert!(read_polygon(&path).is_err());
    }

    #[test]
    fn bench_and_convergence_frames_have_one_row_per_entry() {
        let rows = vec![
            BenchRow {
                vertices: 10,
                reference_s: 1e-6,
                shoelace_s: 1e-7,
                monte_carlo_s: 1e-2,
            },
            BenchRow {
                vertices: 50,
                reference_s: 2e-6,
                shoelace_s: 2e-7,
                monte_carlo_s: 2e-2,
            },
        ];
        let df = bench_frame(&rows).unwrap();
        assert_eq!(df.shape(), (2, 4));
        let conv = vec![ConvergenceRow {
            samples: 100,
            trials: 1,
            mean_area: 1.0,
            mean_error: 2.0,
            min_error: 2.0,
            max_error: 2.0,
        }];
        assert_eq!(convergence_frame(&conv).unwrap().shape(), (1, 6));
    }
}
