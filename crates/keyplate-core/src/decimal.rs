//! Exact decimal helpers
//!
//! Dimension math is done in [`Decimal`] so that constants such as
//! `47.625` or `1.07544` carry no binary rounding error. Values cross
//! into `f64` only when a point or radius is handed to the geometry
//! kernel.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::geometry::point::Point;

/// Convert a decimal to the kernel's numeric type.
pub fn to_f64(value: Decimal) -> f64 {
    // Decimal's range is a strict subset of f64's, so this never misses.
    value.to_f64().unwrap_or(f64::NAN)
}

/// Build a kernel point from two decimal coordinates.
pub fn point(x: Decimal, y: Decimal) -> Point {
    Point::new(to_f64(x), to_f64(y))
}

/// Half of a dimension, exactly.
pub fn half(value: Decimal) -> Decimal {
    value / dec!(2)
}

/// Parse a decimal literal, reporting the offending text on failure.
pub fn parse(text: &str) -> crate::Result<Decimal> {
    let trimmed = text.trim();
    trimmed
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|e| crate::Error::Parse(format!("'{}' is not a decimal: {}", text, e)))
}
