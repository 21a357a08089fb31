use super::cfg::Tol;
use super::types::{Point, Polygon};
use crate::area::shoelace::signed_ring_area;
use crate::error::AreaError;

/// Orientation of `c` relative to the directed line `a → b`.
/// Positive for a left turn, negative for a right turn, zero if collinear.
#[inline]
pub(crate) fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Andrew’s monotone chain convex hull (returns hull in CCW order, collinear points dropped).
fn convex_hull(points: &[Point], tol: &Tol) -> Option<Vec<Point>> {
    if points.len() < 3 {
        return None;
    }
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup_by(|a, b| tol.same(*a, *b));
    if pts.len() < 3 {
        return None;
    }
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    Some(hull)
}

/// Convex hull of `points` as a CCW polygon.
///
/// Fails with `InvalidPolygon` when the points do not span a 2D region.
pub fn convex_hull_polygon(points: &[Point]) -> Result<Polygon, AreaError> {
    let tol = Tol::for_points(points);
    let hull = convex_hull(points, &tol)
        .filter(|h| h.len() >= 3)
        .ok_or_else(|| AreaError::polygon("points do not span a 2D region"))?;
    let mut ring = hull.clone();
    ring.push(hull[0]);
    if tol.degenerate_area(signed_ring_area(&ring)) {
        return Err(AreaError::polygon("convex hull has zero area"));
    }
    Polygon::new(hull)
}

/// Drop consecutive coincident points, including across the seam, and any
/// explicit closing repeat. Returns an open vertex list.
pub(crate) fn dedup_ring(points: &[Point], tol: &Tol) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        if out.last().is_some_and(|q| tol.same(*p, *q)) {
            continue;
        }
        out.push(*p);
    }
    while out.len() >= 2 && tol.same(out[0], out[out.len() - 1]) {
        out.pop();
    }
    out
}

/// `q` lies within the axis-aligned extent of segment `p r` (collinearity checked by caller).
#[inline]
fn within_extent(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Closed segments `p1 p2` and `q1 q2` share at least one point.
pub(crate) fn segments_intersect(p1: Point, p2: Point, q1: Point, q2: Point) -> bool {
    let d1 = cross(q1, q2, p1);
    let d2 = cross(q1, q2, p2);
    let d3 = cross(p1, p2, q1);
    let d4 = cross(p1, p2, q2);
    let straddle = |a: f64, b: f64| (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0);
    if straddle(d1, d2) && straddle(d3, d4) {
        return true;
    }
    (d1 == 0.0 && within_extent(q1, p1, q2))
        || (d2 == 0.0 && within_extent(q1, p2, q2))
        || (d3 == 0.0 && within_extent(p1, q1, p2))
        || (d4 == 0.0 && within_extent(p1, q2, p2))
}

/// Simplicity test on a closed ring (`ring[0] == ring[last]`).
///
/// Adjacent edges may only share their common vertex (no fold-back onto each
/// other); non-adjacent edges must be disjoint. O(n²), fine for the vertex
/// counts used here.
pub(crate) fn is_simple_ring(ring: &[Point]) -> bool {
    if ring.len() < 4 {
        return false;
    }
    let n = ring.len() - 1;
    // Fold-back at vertex i: edges (i-1, i) and (i, i+1) overlap.
    for i in 0..n {
        let prev = ring[(i + n - 1) % n];
        let cur = ring[i];
        let next = ring[i + 1];
        if cross(prev, cur, next) == 0.0 && (prev - cur).dot(&(next - cur)) > 0.0 {
            return false;
        }
    }
    for i in 0..n {
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            if segments_intersect(ring[i], ring[i + 1], ring[j], ring[j + 1]) {
                return false;
            }
        }
    }
    true
}
