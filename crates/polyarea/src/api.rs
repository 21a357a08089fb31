//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI,
//!   benches and examples. Breaking changes are allowed and expected.

// Geometry
pub use crate::geom2::{convex_hull_polygon, Bounds2, Point, Polygon};
// Random polygons
pub use crate::geom2::rand::{
    draw_polygon, generate_polygon, repair_ring, PolygonCfg, PolygonGenerator, PolygonSample,
    ReplayToken,
};
// Estimators and metric
pub use crate::area::{
    compare_areas, contains_point, convergence_study, monte_carlo_area, relative_error, ring_area,
    shoelace_area, AreaComparison, ConvergenceRow, MonteCarloCfg, ReferenceArea,
};
pub use crate::error::AreaError;
