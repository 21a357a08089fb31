use super::cfg::Tol;
use super::util::{dedup_ring, is_simple_ring, segments_intersect};
use super::*;
use crate::error::AreaError;
use nalgebra::vector;

fn square(side: f64) -> Vec<Point> {
    vec![
        vector![0.0, 0.0],
        vector![side, 0.0],
        vector![side, side],
        vector![0.0, side],
    ]
}

#[test]
fn open_and_closed_rings_normalise_to_the_same_polygon() {
    let open = Polygon::new(square(10.0)).unwrap();
    let mut closed_pts = square(10.0);
    closed_pts.push(vector![0.0, 0.0]);
    let closed = Polygon::new(closed_pts).unwrap();
    assert_eq!(open, closed);
    assert_eq!(open.ring().len(), 5);
    assert_eq!(open.ring()[0], open.ring()[4]);
    assert_eq!(open.vertices().len(), 4);
    assert_eq!(open.vertex_count(), 4);
}

#[test]
fn constructor_rejects_degenerate_input() {
    let two = vec![vector![0.0, 0.0], vector![1.0, 0.0]];
    assert!(matches!(
        Polygon::new(two),
        Err(AreaError::InvalidPolygon { .. })
    ));
    // A, B, A: three entries but two distinct vertices.
    let back_and_forth = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 0.0], vector![1.0, 0.0]];
    assert!(Polygon::new(back_and_forth).is_err());
    let zero_edge = vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 0.0],
        vector![0.0, 1.0],
    ];
    assert!(matches!(
        Polygon::new(zero_edge),
        Err(AreaError::InvalidPolygon { .. })
    ));
    let nan = vec![vector![0.0, 0.0], vector![f64::NAN, 0.0], vector![0.0, 1.0]];
    assert!(Polygon::new(nan).is_err());
}

#[test]
fn bounds_and_orientation() {
    let p = Polygon::new(vec![vector![-1.0, 2.0], vector![3.0, 2.0], vector![1.0, 5.0]]).unwrap();
    let b = p.bounds();
    assert_eq!(b.min, vector![-1.0, 2.0]);
    assert_eq!(b.max, vector![3.0, 5.0]);
    assert_eq!(b.width(), 4.0);
    assert_eq!(b.height(), 3.0);
    assert_eq!(b.area(), 12.0);
    assert!(p.is_ccw());
    assert!(!p.reversed().is_ccw());
    assert!((p.signed_area() - 6.0).abs() < 1e-12);
}

#[test]
fn rotation_keeps_ring_closed() {
    let p = Polygon::new(square(2.0)).unwrap();
    let q = p.rotated(6);
    assert_eq!(q.vertices()[0], vector![2.0, 2.0]);
    assert_eq!(q.ring()[0], q.ring()[4]);
    assert_eq!(p.rotated(4), p);
}

#[test]
fn simplicity_checks() {
    assert!(Polygon::new(square(1.0)).unwrap().is_simple());
    let bowtie = Polygon::new(vec![
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![1.0, 0.0],
        vector![0.0, 1.0],
    ])
    .unwrap();
    assert!(!bowtie.is_simple());
    // Collinear "triangle" folds back on itself.
    let flat = Polygon::new(vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]]).unwrap();
    assert!(!flat.is_simple());
    // Concave L is simple.
    let ell = Polygon::new(vec![
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 1.0],
        vector![1.0, 1.0],
        vector![1.0, 2.0],
        vector![0.0, 2.0],
    ])
    .unwrap();
    assert!(ell.is_simple());
    // Vertex touching a non-adjacent edge.
    let touching = vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![2.0, 0.0],
        vector![0.0, 4.0],
        vector![0.0, 0.0],
    ];
    assert!(!is_simple_ring(&touching));
}

#[test]
fn segment_intersection_cases() {
    let (a, b) = (vector![0.0, 0.0], vector![2.0, 2.0]);
    assert!(segments_intersect(a, b, vector![0.0, 2.0], vector![2.0, 0.0]));
    assert!(!segments_intersect(a, b, vector![3.0, 3.0], vector![4.0, 4.0]));
    assert!(segments_intersect(a, b, vector![2.0, 2.0], vector![3.0, 0.0]));
    assert!(segments_intersect(a, b, vector![1.0, 1.0], vector![3.0, 3.0]));
    assert!(!segments_intersect(a, b, vector![0.0, 1.0], vector![1.0, 2.0]));
}

#[test]
fn dedup_handles_seam() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![0.0, 1.0],
        vector![0.0, 0.0],
    ];
    let out = dedup_ring(&pts, &Tol::for_points(&pts));
    assert_eq!(out.len(), 3);
}

#[test]
fn hull_polygon() {
    let mut pts = square(1.0);
    pts.push(vector![0.5, 0.5]);
    pts.push(vector![0.5, 0.0]);
    let p = convex_hull_polygon(&pts).unwrap();
    assert_eq!(p.vertex_count(), 4);
    assert!(p.is_ccw());
    let line = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]];
    assert!(convex_hull_polygon(&line).is_err());
}

#[test]
fn tiny_square_is_a_valid_polygon() {
    let p = Polygon::new(square(1e-13)).unwrap();
    assert_eq!(p.vertex_count(), 4);
    assert!(p.is_simple());
    assert!((p.signed_area() - 1e-26).abs() < 1e-38);
    let hull = convex_hull_polygon(&square(1e-13)).unwrap();
    assert_eq!(hull.vertex_count(), 4);
}

#[test]
fn tolerances_follow_the_scale() {
    // A 1e-3 edge on a unit square is kept.
    let mut pts = square(1.0);
    pts.insert(1, vector![1e-3, 0.0]);
    assert_eq!(Polygon::new(pts).unwrap().vertex_count(), 5);
    // A 1e-9 edge on a square of side 1e6 is below the scale: zero length.
    let mut pts = square(1e6);
    pts.insert(1, vector![1e-9, 0.0]);
    assert!(matches!(
        Polygon::new(pts),
        Err(AreaError::InvalidPolygon { .. })
    ));
}

#[test]
fn overflowing_extent_is_rejected() {
    let wide = vec![vector![-1e308, -1.0], vector![1e308, -1.0], vector![0.0, 1.0]];
    assert!(matches!(
        Polygon::new(wide),
        Err(AreaError::InvalidPolygon { .. })
    ));
    // Finite box whose area overflows.
    let big = vec![vector![0.0, 0.0], vector![1e200, 0.0], vector![0.0, 1e200]];
    assert!(matches!(
        Polygon::new(big),
        Err(AreaError::InvalidPolygon { .. })
    ));
    // Small box far from the origin: cross terms overflow.
    let far = vec![
        vector![1e160, 1e160],
        vector![1e160 + 1e150, 1e160],
        vector![1e160, 1e160 + 1e150],
    ];
    assert!(Polygon::new(far).is_err());
}
