//! Keyboard unit conversion utilities
//!
//! Handles conversion between keyboard units (u) and millimetres.
//! One unit is the standard 19.05 mm key pitch. Key sizes may be given
//! with an explicit `u` or `mm` suffix.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Millimetres per keyboard unit
pub const MM_PER_UNIT: Decimal = dec!(19.05);

/// Unit a key dimension is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyUnits {
    /// Keyboard units (1u = 19.05 mm)
    Units,
    /// Millimetres
    Millimeters,
}

impl Default for KeyUnits {
    fn default() -> Self {
        Self::Units
    }
}

impl fmt::Display for KeyUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Units => write!(f, "u"),
            Self::Millimeters => write!(f, "mm"),
        }
    }
}

impl FromStr for KeyUnits {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "u" | "unit" | "units" => Ok(Self::Units),
            "mm" | "millimeter" | "millimeters" => Ok(Self::Millimeters),
            _ => Err(Error::Parse(format!("Unknown key unit: {}", s))),
        }
    }
}

/// Convert keyboard units to millimetres
pub fn units_to_mm(units: Decimal) -> Decimal {
    units * MM_PER_UNIT
}

/// Convert millimetres to keyboard units
pub fn mm_to_units(mm: Decimal) -> Decimal {
    mm / MM_PER_UNIT
}

/// Parse a key dimension into keyboard units
///
/// * `input` - Text such as `6.25`, `6.25u` or `119.0625mm`
/// * `assumed` - Unit used when the text carries no suffix
pub fn parse_key_size(input: &str, assumed: KeyUnits) -> Result<Decimal> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::Parse("Empty key size".to_string()));
    }

    // Only a trailing run of letters is a unit, so `1e1` stays a number.
    let split = input
        .trim_end_matches(|c: char| c.is_ascii_alphabetic())
        .len();
    let (number, suffix) = input.split_at(split);

    let system = if suffix.trim().is_empty() {
        assumed
    } else {
        suffix.trim().parse::<KeyUnits>()?
    };

    let value = crate::decimal::parse(number)?;

    Ok(match system {
        KeyUnits::Units => value,
        KeyUnits::Millimeters => mm_to_units(value),
    })
}

/// Format a key dimension given in units for display
pub fn format_key_size(units: Decimal, system: KeyUnits) -> String {
    match system {
        KeyUnits::Units => format!("{}u", units.normalize()),
        KeyUnits::Millimeters => format!("{:.3}mm", units_to_mm(units)),
    }
}
