use keyplate_core::{chamfer, fillet_lines, Error, GeometryError, Line, Point};

#[test]
fn test_fillet_on_obtuse_corner() {
    // 135 degree corner at the origin
    let mut a = Line::new(Point::new(-10.0, 0.0), Point::new(0.0, 0.0));
    let mut b = Line::new(Point::new(0.0, 0.0), Point::new(10.0, -10.0));
    let arc = fillet_lines(&mut a, &mut b, 2.0).unwrap();

    let center = arc.center().unwrap();
    assert!((center.distance_to(&arc.start) - 2.0).abs() < 1e-9);
    assert!((center.distance_to(&arc.end) - 2.0).abs() < 1e-9);
    // Tangent: the radius to each tangent point is perpendicular to its line.
    assert!((center.x - a.end.x).abs() < 1e-9);
    let (bx, by) = (b.end.x - b.start.x, b.end.y - b.start.y);
    let (rx, ry) = (center.x - b.start.x, center.y - b.start.y);
    assert!((bx * rx + by * ry).abs() < 1e-9);
    assert!(arc.clockwise);
}

#[test]
fn test_fillet_too_large_reports_geometry_error() {
    let mut a = Line::new(Point::new(0.0, 1.0), Point::new(0.0, 0.0));
    let mut b = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
    let err = fillet_lines(&mut a, &mut b, 2.0).unwrap_err();
    assert!(err.is_geometry_error());
    assert!(matches!(
        err,
        Error::Geometry(GeometryError::FilletTooLarge { .. })
    ));
    // Lines are left untouched on failure.
    assert_eq!(a.end, Point::ORIGIN);
    assert_eq!(b.start, Point::ORIGIN);
}

#[test]
fn test_chamfer_rejects_zero() {
    let mut a = Line::new(Point::new(0.0, 1.0), Point::new(0.0, 0.0));
    let mut b = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
    assert!(chamfer(&mut a, &mut b, 0.0, 0.5).is_err());
    assert!(chamfer(&mut a, &mut b, 0.5, 0.5).is_ok());
}
