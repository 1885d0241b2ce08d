//! Kerf compensation
//!
//! Kerf-aware outlines are built from the nominal half width and half
//! height pulled in by the kerf on every side. Opposite edges always move
//! by the same amount.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{ParameterError, ParameterResult};
use crate::options::MAX_ALLOWANCE;
use keyplate_core::decimal::half;

fn overflow(name: &str, value: Decimal) -> ParameterError {
    ParameterError::InvalidValue {
        name: name.to_string(),
        reason: format!("{} is too large to compute with", value),
    }
}

/// Half extents of a centred box after kerf compensation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KerfBox {
    pub half_width: Decimal,
    pub half_height: Decimal,
}

impl KerfBox {
    /// Nominal `width` x `height` box with each edge moved `kerf` inward.
    ///
    /// Fails when a nominal side is not positive or when the kerf would
    /// collapse or invert the box.
    pub fn new(width: Decimal, height: Decimal, kerf: Decimal) -> ParameterResult<Self> {
        for (name, value) in [("width", width), ("height", height)] {
            if value <= Decimal::ZERO {
                return Err(ParameterError::InvalidDimensions(format!(
                    "outline {} {} must be > 0",
                    name, value
                )));
            }
        }

        let half_width = half(width);
        let half_height = half(height);
        let limit = half_width.min(half_height);
        if kerf >= limit || kerf < -MAX_ALLOWANCE {
            return Err(ParameterError::OutOfRange {
                name: "kerf".to_string(),
                value: kerf,
                min: -MAX_ALLOWANCE,
                max: limit,
            });
        }

        let kerfed = Self {
            half_width: half_width
                .checked_sub(kerf)
                .ok_or_else(|| overflow("width", width))?,
            half_height: half_height
                .checked_sub(kerf)
                .ok_or_else(|| overflow("height", height))?,
        };
        for (name, value) in [("width", kerfed.half_width), ("height", kerfed.half_height)] {
            value
                .checked_mul(Decimal::TWO)
                .ok_or_else(|| overflow(name, value))?;
        }
        debug!(
            "Kerf {} turns {}x{} into {}x{}",
            kerf,
            width,
            height,
            kerfed.width(),
            kerfed.height()
        );
        Ok(kerfed)
    }

    pub fn width(&self) -> Decimal {
        self.half_width * Decimal::TWO
    }

    pub fn height(&self) -> Decimal {
        self.half_height * Decimal::TWO
    }

    /// Check that two corner cuts sharing one edge leave it non-negative.
    ///
    /// `horizontal` selects the top/bottom edges (compared against the
    /// kerfed width) rather than the left/right ones.
    pub fn check_edge(
        &self,
        edge: &str,
        horizontal: bool,
        first: Decimal,
        second: Decimal,
    ) -> ParameterResult<()> {
        let length = if horizontal {
            self.width()
        } else {
            self.height()
        };
        let consumed = first.checked_add(second).ok_or_else(|| ParameterError::InvalidValue {
            name: edge.to_string(),
            reason: format!("corner cuts of {} and {} are too large", first, second),
        })?;
        if consumed > length {
            return Err(ParameterError::InvalidValue {
                name: edge.to_string(),
                reason: format!(
                    "corner cuts of {} and {} do not fit on an edge of {}",
                    first, second, length
                ),
            });
        }
        Ok(())
    }
}
