//! Polygon area: random simple polygons, exact and Monte Carlo estimators.
//!
//! Layout
//! - `geom2`: closed-ring `Polygon`, bounding boxes, the random generator.
//! - `area`: shoelace, Monte Carlo, relative error, comparison helpers.
//! - `error`: the single `AreaError` type.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; `api`
//!   and `prelude` are the curated import surfaces for the CLI and benches.
//! - Nothing here logs or touches the file system. Randomness always comes
//!   from a caller-supplied RNG.

pub mod api;
pub mod area;
pub mod error;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::AreaError;
pub use geom2::{Point, Polygon};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::area::{
        compare_areas, contains_point, convergence_study, monte_carlo_area, relative_error,
        shoelace_area, AreaComparison, ConvergenceRow, MonteCarloCfg, ReferenceArea,
    };
    pub use crate::error::AreaError;
    pub use crate::geom2::rand::{draw_polygon, generate_polygon, PolygonCfg, ReplayToken};
    pub use crate::geom2::{Bounds2, Point, Polygon};
}
