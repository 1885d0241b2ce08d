//! Key descriptor
//!
//! The physical footprint of one key, in keyboard units.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, ParameterResult};

/// Size and orientation of a single key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDescriptor {
    /// Width in keyboard units
    pub width: Decimal,
    /// Height in keyboard units
    pub height: Decimal,
    /// Keep the cutout in its authored orientation even for tall keys
    #[serde(default)]
    pub skip_orientation_fix: bool,
}

impl KeyDescriptor {
    pub fn new(width: Decimal, height: Decimal) -> Self {
        Self {
            width,
            height,
            skip_orientation_fix: false,
        }
    }

    pub fn with_skip_orientation_fix(mut self, skip: bool) -> Self {
        self.skip_orientation_fix = skip;
        self
    }

    /// True when the key is modelled with its long axis vertical and the
    /// orientation fix has not been suppressed.
    pub fn is_sideways(&self) -> bool {
        !self.skip_orientation_fix && self.height > self.width
    }

    /// The dimension stabilizer spacing is looked up by.
    ///
    /// This is measured before any rotation is applied.
    pub fn long_axis(&self) -> Decimal {
        if self.is_sideways() {
            self.height
        } else {
            self.width
        }
    }

    /// Both dimensions must be positive.
    pub fn validate(&self) -> ParameterResult<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value <= Decimal::ZERO {
                return Err(ParameterError::InvalidDimensions(format!(
                    "key {} {} must be > 0",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
