use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Rotate about the origin by `angle_deg` (counter-clockwise positive).
    ///
    /// Whole quarter turns are applied as exact coordinate swaps.
    pub fn rotated(&self, angle_deg: f64) -> Point {
        let quarters = angle_deg / 90.0;
        if quarters.fract() == 0.0 && quarters.is_finite() {
            return match (quarters as i64).rem_euclid(4) {
                0 => *self,
                1 => Point::new(-self.y, self.x),
                2 => Point::new(-self.x, -self.y),
                _ => Point::new(self.y, -self.x),
            };
        }

        let angle_rad = angle_deg.to_radians();
        let s = angle_rad.sin();
        let c = angle_rad.cos();
        Point::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Angle of the vector from the origin to this point, in radians.
    pub(crate) fn angle_rad(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl From<[f64; 2]> for Point {
    fn from(p: [f64; 2]) -> Self {
        Point::new(p[0], p[1])
    }
}
