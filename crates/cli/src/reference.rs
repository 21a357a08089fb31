//! Reference areas from the `geo` crate.

use geo::{Area, Coord, LineString};
use polyarea::area::ReferenceArea;
use polyarea::Polygon;

/// `geo::Area::unsigned_area` on the polygon's exterior ring.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeoReference;

impl ReferenceArea for GeoReference {
    fn reference_area(&self, polygon: &Polygon) -> f64 {
        to_geo(polygon).unsigned_area()
    }
}

pub fn to_geo(polygon: &Polygon) -> geo::Polygon<f64> {
    let exterior: Vec<Coord<f64>> = polygon
        .ring()
        .iter()
        .map(|p| Coord { x: p.x, y: p.y })
        .collect();
    geo::Polygon::new(LineString::new(exterior), vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyarea::api::{draw_polygon, shoelace_area, PolygonCfg, ReplayToken};
    use polyarea::Point;

    #[test]
    fn square_reference() {
        let sq = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ])
        .unwrap();
        assert!((GeoReference.reference_area(&sq) - 100.0).abs() < 1e-12);
        assert!((GeoReference.reference_area(&sq.reversed()) - 100.0).abs() < 1e-12);
    }

    #[test]
    fn agrees_with_shoelace() {
        let cfg = PolygonCfg {
            vertex_count: 100,
            radius: 50.0,
            irregularity: 0.35,
        };
        let p = draw_polygon(cfg, ReplayToken { seed: 42, index: 0 }).unwrap();
        let geo_area = GeoReference.reference_area(&p);
        let exact = shoelace_area(&p);
        assert!(((geo_area - exact) / exact).abs() < 1e-9);
    }
}
