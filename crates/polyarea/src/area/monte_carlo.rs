//! Monte Carlo area estimate by uniform rejection sampling in the bounding box.
//!
//! Model
//! - Draw `M` points uniformly in `[min_x, max_x) × [min_y, max_y)`, count the
//!   `K` inside the polygon, return `box_area * K / M`.
//! - Unbiased; the standard deviation of the estimate shrinks like `1/√M`.
//!
//! Boundary rule
//! - Even-odd crossing test with half-open edges: an edge `(a, b)` is counted
//!   iff `(a.y > p.y) != (b.y > p.y)` and `p` lies strictly left of the edge at
//!   height `p.y`. Points on left/bottom boundaries are inside, points on
//!   right/top boundaries are outside. The rule is deterministic, so a fixed
//!   seed reproduces the estimate bit for bit.

use rand::Rng;

use crate::error::AreaError;
use crate::geom2::{Point, Polygon};

/// Point-in-polygon with the half-open crossing rule (see module docs).
///
/// Works for concave polygons; for self-intersecting rings it reports even-odd
/// membership.
pub fn contains_point(polygon: &Polygon, p: Point) -> bool {
    let mut inside = false;
    for w in polygon.ring().windows(2) {
        let (a, b) = (w[0], w[1]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// Estimate the polygon area from `samples` uniform draws.
///
/// Errors
/// - `InvalidParameter` if `samples == 0`.
/// - `InvalidPolygon` if the bounding box is not representable (excluded by
///   `Polygon::new`, checked again before sampling).
///
/// A bounding box of zero area returns `0.0` without touching `rng`.
pub fn monte_carlo_area<R: Rng + ?Sized>(
    polygon: &Polygon,
    samples: usize,
    rng: &mut R,
) -> Result<f64, AreaError> {
    if samples == 0 {
        return Err(AreaError::invalid("sample count must be >= 1"));
    }
    let bounds = polygon.bounds();
    let box_area = bounds.area();
    if !(bounds.width().is_finite() && bounds.height().is_finite() && box_area.is_finite()) {
        return Err(AreaError::polygon("bounding box overflows f64"));
    }
    if box_area == 0.0 {
        return Ok(0.0);
    }
    let (min, max) = (bounds.min, bounds.max);
    let inside = (0..samples)
        .filter(|_| {
            let p = Point::new(rng.gen_range(min.x..max.x), rng.gen_range(min.y..max.y));
            contains_point(polygon, p)
        })
        .count();
    Ok(box_area * (inside as f64 / samples as f64))
}

/// Configured Monte Carlo estimator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonteCarloCfg {
    pub samples: usize,
}

impl Default for MonteCarloCfg {
    fn default() -> Self {
        Self { samples: 10_000 }
    }
}

impl MonteCarloCfg {
    #[inline]
    pub fn estimate<R: Rng + ?Sized>(&self, polygon: &Polygon, rng: &mut R) -> Result<f64, AreaError> {
        monte_carlo_area(polygon, self.samples, rng)
    }
}
