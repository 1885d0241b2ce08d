//! Path primitives
//!
//! Lines, endpoint-defined arcs and circles. Arcs carry their two
//! endpoints plus radius and sweep flags rather than a centre and angles,
//! which is what lets a profile be written as a list of vertices joined
//! alternately by lines and arcs.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::point::Point;
use super::Extents;
use crate::{GeometryError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn reversed(&self) -> Line {
        Line::new(self.end, self.start)
    }
}

/// Circular arc between two endpoints.
///
/// The centre lies on the chord's perpendicular bisector; `clockwise`
/// and `large_arc` pick which of the four candidate arcs is meant, with
/// the same meaning as SVG's sweep and large-arc flags in a y-up frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub start: Point,
    pub end: Point,
    pub radius: f64,
    pub clockwise: bool,
    pub large_arc: bool,
}

impl Arc {
    pub fn new(start: Point, end: Point, radius: f64, clockwise: bool, large_arc: bool) -> Self {
        Self {
            start,
            end,
            radius,
            clockwise,
            large_arc,
        }
    }

    pub fn chord(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Centre of the arc derived from endpoints, radius and flags.
    pub fn center(&self) -> Result<Point> {
        let chord = self.chord();
        let half = chord / 2.0;
        if self.radius <= 0.0 || self.radius + 1e-9 < half {
            return Err(GeometryError::ArcTooSmall {
                radius: self.radius,
                chord,
            }
            .into());
        }
        if chord == 0.0 {
            return Err(GeometryError::ArcTooSmall {
                radius: self.radius,
                chord,
            }
            .into());
        }

        let mid = self.start.midpoint(&self.end);
        let dx = (self.end.x - self.start.x) / chord;
        let dy = (self.end.y - self.start.y) / chord;
        // Left of the chord direction.
        let (nx, ny) = (-dy, dx);
        let h = (self.radius * self.radius - half * half).max(0.0).sqrt();
        let side = if self.clockwise == self.large_arc {
            1.0
        } else {
            -1.0
        };
        Ok(Point::new(mid.x + nx * h * side, mid.y + ny * h * side))
    }

    /// Swept angle in radians, always positive.
    pub fn sweep(&self) -> f64 {
        let ratio = (self.chord() / (2.0 * self.radius)).clamp(-1.0, 1.0);
        let minor = 2.0 * ratio.asin();
        if self.large_arc {
            TAU - minor
        } else {
            minor
        }
    }

    /// Area between the chord and the arc.
    pub fn segment_area(&self) -> f64 {
        let theta = self.sweep();
        self.radius * self.radius / 2.0 * (theta - theta.sin())
    }

    pub fn reversed(&self) -> Arc {
        Arc::new(
            self.end,
            self.start,
            self.radius,
            !self.clockwise,
            self.large_arc,
        )
    }

    /// Bounding box, including any axis crossings inside the sweep.
    pub fn extents(&self) -> Result<Extents> {
        let center = self.center()?;
        let mut extents = Extents::of_point(self.start);
        extents.include(self.end);

        let start_angle = Point::new(self.start.x - center.x, self.start.y - center.y).angle_rad();
        let sweep = self.sweep();
        let direction = if self.clockwise { -1.0 } else { 1.0 };

        for k in 0..4 {
            let cardinal = k as f64 * FRAC_PI_2;
            // Travel from the start angle to the cardinal in the sweep direction.
            let travel = ((cardinal - start_angle) * direction).rem_euclid(TAU);
            if travel > 0.0 && travel < sweep {
                extents.include(Point::new(
                    center.x + self.radius * cardinal.cos(),
                    center.y + self.radius * cardinal.sin(),
                ));
            }
        }
        Ok(extents)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

/// Tagged path variant stored in a [`CutoutModel`](super::model::CutoutModel).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PathPrimitive {
    Line(Line),
    Arc(Arc),
    Circle(Circle),
}

impl PathPrimitive {
    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            PathPrimitive::Line(l) => {
                l.start = l.start.translated(dx, dy);
                l.end = l.end.translated(dx, dy);
            }
            PathPrimitive::Arc(a) => {
                a.start = a.start.translated(dx, dy);
                a.end = a.end.translated(dx, dy);
            }
            PathPrimitive::Circle(c) => {
                c.center = c.center.translated(dx, dy);
            }
        }
    }

    /// Rotate about the origin. Sweep flags are unchanged by rotation.
    pub fn rotate(&mut self, angle_deg: f64) {
        match self {
            PathPrimitive::Line(l) => {
                l.start = l.start.rotated(angle_deg);
                l.end = l.end.rotated(angle_deg);
            }
            PathPrimitive::Arc(a) => {
                a.start = a.start.rotated(angle_deg);
                a.end = a.end.rotated(angle_deg);
            }
            PathPrimitive::Circle(c) => {
                c.center = c.center.rotated(angle_deg);
            }
        }
    }

    /// Start and end points, or `None` for closed primitives.
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        match self {
            PathPrimitive::Line(l) => Some((l.start, l.end)),
            PathPrimitive::Arc(a) => Some((a.start, a.end)),
            PathPrimitive::Circle(_) => None,
        }
    }

    pub fn reversed(&self) -> PathPrimitive {
        match self {
            PathPrimitive::Line(l) => PathPrimitive::Line(l.reversed()),
            PathPrimitive::Arc(a) => PathPrimitive::Arc(a.reversed()),
            PathPrimitive::Circle(c) => PathPrimitive::Circle(*c),
        }
    }

    pub fn extents(&self) -> Result<Extents> {
        match self {
            PathPrimitive::Line(l) => {
                let mut e = Extents::of_point(l.start);
                e.include(l.end);
                Ok(e)
            }
            PathPrimitive::Arc(a) => a.extents(),
            PathPrimitive::Circle(c) => Ok(Extents::new(
                c.center.translated(-c.radius, -c.radius),
                c.center.translated(c.radius, c.radius),
            )),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PathPrimitive::Line(_) => "line",
            PathPrimitive::Arc(_) => "arc",
            PathPrimitive::Circle(_) => "circle",
        }
    }

    /// Structural comparison with a coordinate tolerance.
    pub fn approx_eq(&self, other: &PathPrimitive, tolerance: f64) -> bool {
        match (self, other) {
            (PathPrimitive::Line(a), PathPrimitive::Line(b)) => {
                a.start.approx_eq(&b.start, tolerance) && a.end.approx_eq(&b.end, tolerance)
            }
            (PathPrimitive::Arc(a), PathPrimitive::Arc(b)) => {
                a.start.approx_eq(&b.start, tolerance)
                    && a.end.approx_eq(&b.end, tolerance)
                    && (a.radius - b.radius).abs() <= tolerance
                    && a.clockwise == b.clockwise
                    && a.large_arc == b.large_arc
            }
            (PathPrimitive::Circle(a), PathPrimitive::Circle(b)) => {
                a.center.approx_eq(&b.center, tolerance) && (a.radius - b.radius).abs() <= tolerance
            }
            _ => false,
        }
    }
}

impl From<Line> for PathPrimitive {
    fn from(l: Line) -> Self {
        PathPrimitive::Line(l)
    }
}

impl From<Arc> for PathPrimitive {
    fn from(a: Arc) -> Self {
        PathPrimitive::Arc(a)
    }
}

impl From<Circle> for PathPrimitive {
    fn from(c: Circle) -> Self {
        PathPrimitive::Circle(c)
    }
}
