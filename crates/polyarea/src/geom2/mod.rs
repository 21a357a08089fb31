//! 2D polygon geometry (vertex rings only).
//!
//! Purpose
//! - Provide a single closed-ring `Polygon` with explicit invariants (finite
//!   coordinates, ≥ 3 distinct vertices, no zero-length edges) for the area
//!   estimators.
//! - Keep the API minimal and numerically explicit (tolerances in `cfg`).
//!
//! Code cross-refs: `Polygon`, `Bounds2`, `rand::generate_polygon`, `area::*`

mod cfg;
pub mod rand;
mod types;
mod util;

pub use types::{Bounds2, Point, Polygon};
pub use util::convex_hull_polygon;

#[cfg(test)]
mod tests;
