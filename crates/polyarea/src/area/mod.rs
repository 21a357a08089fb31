//! Area estimators and their error metric.
//!
//! - `shoelace`: exact area from the closed ring.
//! - `monte_carlo`: rejection sampling inside the bounding box.
//! - `metric`: relative error in percent.
//! - `compare`: both estimators against an injected reference, plus the
//!   convergence study.
//!
//! Code cross-refs: `geom2::Polygon`, `error::AreaError`

pub mod compare;
pub mod metric;
pub mod monte_carlo;
pub mod shoelace;

pub use compare::{compare_areas, convergence_study, AreaComparison, ConvergenceRow, ReferenceArea};
pub use metric::relative_error;
pub use monte_carlo::{contains_point, monte_carlo_area, MonteCarloCfg};
pub use shoelace::{ring_area, shoelace_area};
