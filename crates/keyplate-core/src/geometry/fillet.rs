//! Corner treatments between two lines
//!
//! [`closed_polyline`] turns a polygon into its edges; the two corner
//! operations take the two lines meeting at a corner, trim them back
//! from the shared endpoint and return the new path that closes the gap:
//! a tangent arc for a fillet, a straight cut for a chamfer.

use tracing::trace;

use super::path::{Arc, Line};
use super::point::Point;
use super::POINT_TOLERANCE;
use crate::{GeometryError, Result};

/// Which end of each line touches the shared corner.
struct Corner {
    point: Point,
    a_at_start: bool,
    b_at_start: bool,
}

fn find_corner(a: &Line, b: &Line) -> Result<Corner> {
    let candidates = [
        (a.start, b.start, true, true),
        (a.start, b.end, true, false),
        (a.end, b.start, false, true),
        (a.end, b.end, false, false),
    ];
    candidates
        .iter()
        .find(|(pa, pb, _, _)| pa.approx_eq(pb, POINT_TOLERANCE))
        .map(|&(point, _, a_at_start, b_at_start)| Corner {
            point,
            a_at_start,
            b_at_start,
        })
        .ok_or_else(|| {
            GeometryError::NoCommonCorner(format!(
                "({:.5}, {:.5})-({:.5}, {:.5}) and ({:.5}, {:.5})-({:.5}, {:.5})",
                a.start.x, a.start.y, a.end.x, a.end.y, b.start.x, b.start.y, b.end.x, b.end.y
            ))
            .into()
        })
}

fn far_end(line: &Line, at_start: bool) -> Point {
    if at_start {
        line.end
    } else {
        line.start
    }
}

fn set_corner_end(line: &mut Line, at_start: bool, p: Point) {
    if at_start {
        line.start = p;
    } else {
        line.end = p;
    }
}

fn unit_from(corner: Point, towards: Point) -> (f64, f64, f64) {
    let dx = towards.x - corner.x;
    let dy = towards.y - corner.y;
    let len = (dx * dx + dy * dy).sqrt();
    (dx / len, dy / len, len)
}

/// Round the corner shared by `a` and `b` with a tangent arc of `radius`.
///
/// Both lines are shortened to the tangent points; the returned arc runs
/// from the tangent point on `a` to the one on `b`.
pub fn fillet_lines(a: &mut Line, b: &mut Line, radius: f64) -> Result<Arc> {
    if !(radius > 0.0) {
        return Err(GeometryError::InvalidDimension {
            name: "fillet radius".to_string(),
            value: radius,
        }
        .into());
    }

    let corner = find_corner(a, b)?;
    let (ax, ay, len_a) = unit_from(corner.point, far_end(a, corner.a_at_start));
    let (bx, by, len_b) = unit_from(corner.point, far_end(b, corner.b_at_start));

    let cos_theta = (ax * bx + ay * by).clamp(-1.0, 1.0);
    let theta = cos_theta.acos();
    if theta.sin().abs() < 1e-12 {
        return Err(GeometryError::ParallelPaths.into());
    }

    let trim = radius / (theta / 2.0).tan();
    let available = len_a.min(len_b);
    if trim > available + POINT_TOLERANCE {
        return Err(GeometryError::FilletTooLarge {
            radius,
            needed: trim,
            available,
        }
        .into());
    }

    let tangent_a = corner.point.translated(ax * trim, ay * trim);
    let tangent_b = corner.point.translated(bx * trim, by * trim);

    // Centre sits on the bisector; its side fixes the sweep direction.
    let (mx, my) = (ax + bx, ay + by);
    let m_len = (mx * mx + my * my).sqrt();
    let to_center = radius / (theta / 2.0).sin();
    let center = corner
        .point
        .translated(mx / m_len * to_center, my / m_len * to_center);
    let cross = (tangent_a.x - center.x) * (tangent_b.y - center.y)
        - (tangent_a.y - center.y) * (tangent_b.x - center.x);

    set_corner_end(a, corner.a_at_start, tangent_a);
    set_corner_end(b, corner.b_at_start, tangent_b);

    trace!(
        "fillet r={} at ({:.5}, {:.5}) trims {:.5}",
        radius,
        corner.point.x,
        corner.point.y,
        trim
    );

    Ok(Arc::new(tangent_a, tangent_b, radius, cross < 0.0, false))
}

/// Cut the corner shared by `a` and `b` with a straight chamfer.
///
/// `along_a` and `along_b` are the distances the chamfer's endpoints sit
/// from the corner on each line. The returned line runs from the point
/// on `a` to the point on `b`.
pub fn chamfer(a: &mut Line, b: &mut Line, along_a: f64, along_b: f64) -> Result<Line> {
    for (name, value) in [("chamfer", along_a), ("chamfer", along_b)] {
        if !(value > 0.0) {
            return Err(GeometryError::InvalidDimension {
                name: name.to_string(),
                value,
            }
            .into());
        }
    }

    let corner = find_corner(a, b)?;
    let (ax, ay, len_a) = unit_from(corner.point, far_end(a, corner.a_at_start));
    let (bx, by, len_b) = unit_from(corner.point, far_end(b, corner.b_at_start));

    if along_a > len_a + POINT_TOLERANCE || along_b > len_b + POINT_TOLERANCE {
        return Err(GeometryError::FilletTooLarge {
            radius: along_a.max(along_b),
            needed: along_a.max(along_b),
            available: len_a.min(len_b),
        }
        .into());
    }

    let cut_a = corner.point.translated(ax * along_a, ay * along_a);
    let cut_b = corner.point.translated(bx * along_b, by * along_b);
    set_corner_end(a, corner.a_at_start, cut_a);
    set_corner_end(b, corner.b_at_start, cut_b);

    Ok(Line::new(cut_a, cut_b))
}

/// Lines joining consecutive vertices of a closed polygon.
pub fn closed_polyline(vertices: &[Point]) -> Vec<Line> {
    if vertices.len() < 2 {
        return Vec::new();
    }
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| Line::new(*a, *b))
        .collect()
}
