//! Side-by-side comparison of the estimators against an injected reference.
//!
//! The reference area is a capability (`ReferenceArea`) so this crate never
//! depends on a particular geometry library; callers plug in whatever they
//! trust (the CLI uses `geo`).

use rand::Rng;

use super::metric::relative_error;
use super::monte_carlo::monte_carlo_area;
use super::shoelace::shoelace_area;
use crate::error::AreaError;
use crate::geom2::Polygon;

/// Source of a trusted polygon area.
pub trait ReferenceArea {
    fn reference_area(&self, polygon: &Polygon) -> f64;
}

impl<F> ReferenceArea for F
where
    F: Fn(&Polygon) -> f64,
{
    #[inline]
    fn reference_area(&self, polygon: &Polygon) -> f64 {
        self(polygon)
    }
}

/// One polygon measured three ways.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaComparison {
    pub reference: f64,
    pub shoelace: f64,
    pub monte_carlo: f64,
    pub samples: usize,
    /// Percent.
    pub shoelace_error: f64,
    /// Percent.
    pub monte_carlo_error: f64,
}

/// Measure `polygon` with both estimators and score them against `reference`.
///
/// Errors
/// - `InvalidParameter` if `samples == 0` or the reference is non-finite.
/// - `DivisionByZero` if the reference area is zero.
pub fn compare_areas<A, R>(
    polygon: &Polygon,
    reference: &A,
    samples: usize,
    rng: &mut R,
) -> Result<AreaComparison, AreaError>
where
    A: ReferenceArea + ?Sized,
    R: Rng + ?Sized,
{
    let reference_area = reference.reference_area(polygon);
    check_reference(reference_area)?;
    let shoelace = shoelace_area(polygon);
    let monte_carlo = monte_carlo_area(polygon, samples, rng)?;
    Ok(AreaComparison {
        reference: reference_area,
        shoelace,
        monte_carlo,
        samples,
        shoelace_error: relative_error(shoelace, reference_area)?,
        monte_carlo_error: relative_error(monte_carlo, reference_area)?,
    })
}

/// A reference area must be finite and nonzero before any sampling starts.
fn check_reference(reference_area: f64) -> Result<(), AreaError> {
    if !reference_area.is_finite() {
        return Err(AreaError::invalid(format!(
            "reference area must be finite, got {reference_area}"
        )));
    }
    if reference_area == 0.0 {
        return Err(AreaError::DivisionByZero);
    }
    Ok(())
}

/// Monte Carlo accuracy at one sample count, averaged over repeated trials.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvergenceRow {
    pub samples: usize,
    pub trials: usize,
    pub mean_area: f64,
    /// Percent, mean over trials.
    pub mean_error: f64,
    pub min_error: f64,
    pub max_error: f64,
}

/// Mean Monte Carlo error per sample count. The trials for each count draw
/// from the same `rng` in sequence.
///
/// Errors
/// - `InvalidParameter` for an empty `sample_counts`, a zero count, `trials == 0`
///   or a non-finite `reference_area`.
/// - `DivisionByZero` if `reference_area == 0`.
pub fn convergence_study<R: Rng + ?Sized>(
    polygon: &Polygon,
    reference_area: f64,
    sample_counts: &[usize],
    trials: usize,
    rng: &mut R,
) -> Result<Vec<ConvergenceRow>, AreaError> {
    if sample_counts.is_empty() {
        return Err(AreaError::invalid("need at least one sample count"));
    }
    if trials == 0 {
        return Err(AreaError::invalid("trials must be >= 1"));
    }
    check_reference(reference_area)?;
    let mut rows = Vec::with_capacity(sample_counts.len());
    for &samples in sample_counts {
        let mut area_sum = 0.0;
        let mut err_sum = 0.0;
        let mut min_error = f64::INFINITY;
        let mut max_error: f64 = 0.0;
        for _ in 0..trials {
            let area = monte_carlo_area(polygon, samples, rng)?;
            let err = relative_error(area, reference_area)?;
            area_sum += area;
            err_sum += err;
            min_error = min_error.min(err);
            max_error = max_error.max(err);
        }
        rows.push(ConvergenceRow {
            samples,
            trials,
            mean_area: area_sum / trials as f64,
            mean_error: err_sum / trials as f64,
            min_error,
            max_error,
        });
    }
    Ok(rows)
}
