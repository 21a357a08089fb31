//! Random simple polygons in 2D (sorted angles + radial irregularity + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for star-shaped simple polygons used by
//!   the area experiments. The generator is parameterizable, reproducible, and
//!   returns a closed-ring `Polygon` ready for the estimators.
//!
//! Model
//! - Draw `n` uniform angles on [0, 2π) and sort them. While every angular gap
//!   is below π each edge stays inside its own wedge around the origin, so the
//!   ring is a star-shaped simple polygon.
//! - Radii are `radius * (1 - irregularity * U)` with `U ~ U[0,1)`, i.e. in
//!   `[radius * (1 - irregularity), radius]`.
//! - A gap above π (small `n`), coincident angles, or vertices collapsing onto
//!   a line can still produce a crossing or degenerate ring; `repair_ring`
//!   handles those (dedup, then convex hull).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `Polygon`, `util::{convex_hull_polygon, dedup_ring, is_simple_ring}`

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use super::cfg::Tol;
use super::types::{Point, Polygon};
use super::util::{convex_hull_polygon, dedup_ring, is_simple_ring};
use crate::area::shoelace::signed_ring_area;
use crate::error::AreaError;

/// Generator configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolygonCfg {
    /// Number of vertices drawn (>= 3).
    pub vertex_count: usize,
    /// Circumradius; vertex radii never exceed it.
    pub radius: f64,
    /// Relative radial spread in [0, 1]. 0 puts every vertex on the circle.
    pub irregularity: f64,
}

impl Default for PolygonCfg {
    fn default() -> Self {
        Self {
            vertex_count: 10,
            radius: 10.0,
            irregularity: 0.35,
        }
    }
}

impl PolygonCfg {
    pub fn validate(&self) -> Result<(), AreaError> {
        if self.vertex_count < 3 {
            return Err(AreaError::invalid(format!(
                "vertex_count must be >= 3, got {}",
                self.vertex_count
            )));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(AreaError::invalid("radius must be finite and positive"));
        }
        // The bounding box area is at most (2 * radius)².
        if !(4.0 * self.radius * self.radius).is_finite() {
            return Err(AreaError::invalid(format!(
                "radius {} is too large for a finite area",
                self.radius
            )));
        }
        if !(0.0..=1.0).contains(&self.irregularity) {
            return Err(AreaError::invalid(format!(
                "irregularity must lie in [0, 1], got {}",
                self.irregularity
            )));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    /// Token with a seed drawn from OS entropy (non-reproducible default).
    pub fn fresh() -> Self {
        Self {
            seed: StdRng::from_entropy().next_u64(),
            index: 0,
        }
    }

    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random simple polygon from `rng`.
///
/// Errors
/// - `InvalidParameter` if `cfg` fails validation.
/// - `Generation` if the drawn points cannot be repaired into a simple polygon.
pub fn generate_polygon<R: Rng + ?Sized>(cfg: PolygonCfg, rng: &mut R) -> Result<Polygon, AreaError> {
    cfg.validate()?;
    let mut angles: Vec<f64> = (0..cfg.vertex_count).map(|_| rng.gen_range(0.0..TAU)).collect();
    angles.sort_by(f64::total_cmp);
    let pts: Vec<Point> = angles
        .into_iter()
        .map(|th| {
            let r = cfg.radius * (1.0 - cfg.irregularity * rng.gen::<f64>());
            Point::new(r * th.cos(), r * th.sin())
        })
        .collect();
    repair_ring(&pts)
}

/// Deterministic variant of [`generate_polygon`] keyed by a replay token.
pub fn draw_polygon(cfg: PolygonCfg, tok: ReplayToken) -> Result<Polygon, AreaError> {
    let mut rng = tok.to_std_rng();
    generate_polygon(cfg, &mut rng)
}

/// Turn a candidate vertex list into a simple polygon.
///
/// Strategy
/// 1. Drop consecutive coincident vertices (seam included).
/// 2. If the result is simple with nonzero area, return it unchanged.
/// 3. Otherwise return the convex hull of all points (CCW).
/// 4. If the hull is degenerate (fewer than 3 vertices, zero area), fail.
pub fn repair_ring(points: &[Point]) -> Result<Polygon, AreaError> {
    let tol = Tol::for_points(points);
    let open = dedup_ring(points, &tol);
    if open.len() >= 3 {
        let mut ring = open.clone();
        ring.push(open[0]);
        if is_simple_ring(&ring) && !tol.degenerate_area(signed_ring_area(&ring)) {
            return Polygon::new(open).map_err(|e| AreaError::generation(e.to_string()));
        }
    }
    convex_hull_polygon(points).map_err(|e| AreaError::generation(e.to_string()))
}

/// A generated polygon plus the token that regenerates it.
#[derive(Clone, Debug)]
pub struct PolygonSample {
    pub polygon: Polygon,
    pub replay: ReplayToken,
}

/// Stream of reproducible polygons sharing one configuration.
pub struct PolygonGenerator {
    cfg: PolygonCfg,
    seed: u64,
    next_index: u64,
}

impl PolygonGenerator {
    pub fn new(cfg: PolygonCfg, seed: u64) -> Result<Self, AreaError> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            seed,
            next_index: 0,
        })
    }

    pub fn cfg(&self) -> &PolygonCfg {
        &self.cfg
    }

    pub fn generate_next(&mut self) -> Result<PolygonSample, AreaError> {
        let replay = ReplayToken {
            seed: self.seed,
            index: self.next_index,
        };
        self.next_index = self.next_index.wrapping_add(1);
        let polygon = draw_polygon(self.cfg, replay)?;
        Ok(PolygonSample { polygon, replay })
    }

    pub fn regenerate(&self, replay: &ReplayToken) -> Result<Polygon, AreaError> {
        draw_polygon(self.cfg, *replay)
    }
}
