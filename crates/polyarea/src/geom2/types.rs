//! Basic 2D types: points, closed vertex rings, bounding boxes.
//!
//! - `Point`: alias for `nalgebra::Vector2<f64>`.
//! - `Polygon`: closed ring with an explicit repeat of the first vertex.
//! - `Bounds2`: axis-aligned bounding box, derived on demand.
//!
//! Code cross-refs: `util::{is_simple_ring, dedup_ring}`, `area::shoelace`

use nalgebra::Vector2;

use super::cfg::Tol;
use super::util::is_simple_ring;
use crate::area::shoelace::signed_ring_area;
use crate::error::AreaError;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Axis-aligned bounding box `[min.x, max.x] × [min.y, max.y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Point,
    pub max: Point,
}

impl Bounds2 {
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Length of the diagonal, used as the length scale for tolerances.
    #[inline]
    pub fn diagonal(&self) -> f64 {
        self.width().hypot(self.height())
    }

    /// Smallest box containing `points`; `None` for an empty slice.
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        points.first().map(|&first| Self::spanning(first, points))
    }

    fn spanning(first: Point, points: &[Point]) -> Self {
        let (min, max) = points
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
        Self { min, max }
    }
}

/// Simple polygon stored as a closed ring.
///
/// Invariants:
/// - `ring.len() >= 4` and `ring[0] == ring[ring.len() - 1]`.
/// - All coordinates finite, at least 3 distinct vertices.
/// - No zero-length edges (relative to the bounding-box diagonal).
/// - Bounding-box width, height, area and the signed area are finite.
///
/// Orientation is whatever the producer used. Simplicity is not checked on
/// construction; see [`Polygon::is_simple`].
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    ring: Vec<Point>,
}

impl Polygon {
    /// Build from an open vertex list or a closed ring (first point repeated).
    pub fn new(points: Vec<Point>) -> Result<Self, AreaError> {
        if points.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(AreaError::polygon("coordinates must be finite"));
        }
        let bounds = Bounds2::enclosing(&points)
            .ok_or_else(|| AreaError::polygon("need at least 3 distinct vertices"))?;
        if !(bounds.diagonal().is_finite() && bounds.area().is_finite()) {
            return Err(AreaError::polygon("bounding box overflows f64"));
        }
        let tol = Tol::from_scale(bounds.diagonal());
        let mut open = points;
        if open.len() >= 2 && tol.same(open[0], open[open.len() - 1]) {
            open.pop();
        }
        if distinct_count(&open, &tol) < 3 {
            return Err(AreaError::polygon("need at least 3 distinct vertices"));
        }
        let n = open.len();
        for i in 0..n {
            if tol.same(open[(i + 1) % n], open[i]) {
                return Err(AreaError::polygon(format!("zero-length edge at vertex {i}")));
            }
        }
        let first = open[0];
        open.push(first);
        if !signed_ring_area(&open).is_finite() {
            return Err(AreaError::polygon("signed area overflows f64"));
        }
        Ok(Self { ring: open })
    }

    /// Closed ring; the last point repeats the first.
    #[inline]
    pub fn ring(&self) -> &[Point] {
        &self.ring
    }

    /// Open vertex list (no repeated closing point).
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.ring[..self.ring.len() - 1]
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.ring.len() - 1
    }

    /// Bounding box of the vertices.
    pub fn bounds(&self) -> Bounds2 {
        Bounds2::spanning(self.ring[0], &self.ring)
    }

    /// Signed area: positive for counter-clockwise rings.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        signed_ring_area(&self.ring)
    }

    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// True if no two non-adjacent edges touch and adjacent edges only share
    /// their common vertex.
    pub fn is_simple(&self) -> bool {
        is_simple_ring(&self.ring)
    }

    /// Same boundary traversed in the opposite direction.
    pub fn reversed(&self) -> Polygon {
        let mut ring = self.ring.clone();
        ring.reverse();
        Polygon { ring }
    }

    /// Same boundary starting from vertex `k` (mod vertex count).
    pub fn rotated(&self, k: usize) -> Polygon {
        let mut open = self.vertices().to_vec();
        let n = open.len();
        open.rotate_left(k % n);
        let first = open[0];
        open.push(first);
        Polygon { ring: open }
    }
}

/// Number of pairwise distinct points (up to `tol.dedup` after sorting).
pub(crate) fn distinct_count(points: &[Point], tol: &Tol) -> usize {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup_by(|a, b| tol.same(*a, *b));
    pts.len()
}
