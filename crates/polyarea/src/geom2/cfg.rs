//! Tolerance defaults for 2D polygon geometry (internal).
//!
//! Policy
//! - Tolerances are relative to the length scale of the input, the diagonal of
//!   its bounding box, so a polygon and any uniformly rescaled copy get the
//!   same decisions. A zero scale (all points equal) gives zero tolerances.

use super::types::{Bounds2, Point};

/// Two vertices closer than `DEDUP_REL * scale` are the same vertex.
pub(crate) const DEDUP_REL: f64 = 1e-12;
/// Rings with `|signed area| <= AREA_REL * scale²` are degenerate.
pub(crate) const AREA_REL: f64 = 1e-20;

/// Absolute tolerances for one point set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Tol {
    pub dedup: f64,
    pub area: f64,
}

impl Tol {
    pub(crate) fn from_scale(scale: f64) -> Self {
        Self {
            dedup: DEDUP_REL * scale,
            area: AREA_REL * scale * scale,
        }
    }

    pub(crate) fn for_points(points: &[Point]) -> Self {
        Self::from_scale(Bounds2::enclosing(points).map_or(0.0, |b| b.diagonal()))
    }

    #[inline]
    pub(crate) fn same(&self, a: Point, b: Point) -> bool {
        (a - b).norm() <= self.dedup
    }

    #[inline]
    pub(crate) fn degenerate_area(&self, signed_area: f64) -> bool {
        signed_area.abs() <= self.area
    }
}
