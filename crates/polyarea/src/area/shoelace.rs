//! Exact polygon area via the shoelace (Gauss) formula.
//!
//! `A = |Σ_{i=0}^{n-1} (x_i y_{i+1} - x_{i+1} y_i)| / 2` over a closed ring.
//! Exact up to rounding for any simple polygon, convex or not; orientation is
//! normalised away by the absolute value.

use crate::error::AreaError;
use crate::geom2::{Point, Polygon};

/// Signed area of a closed ring (`ring[0] == ring[last]`); positive for CCW.
#[inline]
pub(crate) fn signed_ring_area(ring: &[Point]) -> f64 {
    let s: f64 = ring.windows(2).map(|w| w[0].x * w[1].y - w[1].x * w[0].y).sum();
    0.5 * s
}

/// Unsigned area of a polygon. O(n) time, O(1) extra space.
#[inline]
pub fn shoelace_area(polygon: &Polygon) -> f64 {
    signed_ring_area(polygon.ring()).abs()
}

/// Unsigned area of a raw vertex list, open or closed.
///
/// Fails with `InvalidPolygon` if fewer than 3 distinct vertices are supplied
/// or a coordinate is non-finite.
pub fn ring_area(points: &[Point]) -> Result<f64, AreaError> {
    let polygon = Polygon::new(points.to_vec())?;
    Ok(shoelace_area(&polygon))
}
