//! Vector-path kernel
//!
//! A deliberately small 2D kernel: points, line/arc/circle primitives,
//! named composite models, the fillet and chamfer corner operations the
//! cutout outlines are built with, and loop walking for area checks. Coordinates are `f64`
//! in a y-up frame; angles are in degrees and positive angles turn
//! counter-clockwise.

pub mod chains;
pub mod fillet;
pub mod model;
pub mod path;
pub mod point;
pub mod round_rect;

use serde::{Deserialize, Serialize};

use point::Point;

/// Tolerance used when deciding whether two endpoints coincide
pub const POINT_TOLERANCE: f64 = 1e-6;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extents {
    pub min: Point,
    pub max: Point,
}

impl Extents {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Extents of a single point
    pub fn of_point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    /// Grow to include a point
    pub fn include(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Smallest box containing both
    pub fn union(&self, other: &Extents) -> Extents {
        let mut out = *self;
        out.include(other.min);
        out.include(other.max);
        out
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }
}

/// Merge optional extents, treating `None` as empty
pub(crate) fn merge_extents(a: Option<Extents>, b: Option<Extents>) -> Option<Extents> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.union(&b)),
        (a, None) => a,
        (None, b) => b,
    }
}
