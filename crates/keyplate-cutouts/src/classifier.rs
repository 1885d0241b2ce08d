//! Stabilizer size classification
//!
//! Maps a key's long axis to the distance between the key centre and
//! each of its two stabilizer housings.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

/// Offsets of the left and right housings from the key centre (mm)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StabilizerSpacing {
    pub left: Decimal,
    pub right: Decimal,
}

impl StabilizerSpacing {
    pub const fn symmetric(spacing: Decimal) -> Self {
        Self {
            left: spacing,
            right: spacing,
        }
    }
}

/// One row of a [`SizeClassTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeClass {
    /// Smallest key size (in units) this row applies to
    pub minimum: Decimal,
    pub spacing: StabilizerSpacing,
}

/// Thresholds ordered from the largest minimum to the smallest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeClassTable {
    pub classes: &'static [SizeClass],
}

impl SizeClassTable {
    /// Spacing for the first class whose minimum `key_size` meets, or
    /// `None` when the key is too short to be stabilized.
    pub fn classify(&self, key_size: Decimal) -> Option<StabilizerSpacing> {
        let found = self
            .classes
            .iter()
            .find(|class| key_size >= class.minimum)
            .map(|class| class.spacing);
        match found {
            Some(spacing) => debug!(
                "Key size {}u uses stabilizer spacing {}/{}",
                key_size, spacing.left, spacing.right
            ),
            None => debug!("Key size {}u has no stabilizer", key_size),
        }
        found
    }

    /// The smallest key size that receives a stabilizer.
    pub fn minimum(&self) -> Option<Decimal> {
        self.classes.last().map(|class| class.minimum)
    }
}

/// Spacebar-style stabilizer spacing shared by every stabilizer housing
pub const STABILIZER_SPACING: SizeClassTable = SizeClassTable {
    classes: &[
        SizeClass {
            minimum: dec!(8),
            spacing: StabilizerSpacing::symmetric(dec!(66.675)),
        },
        SizeClass {
            minimum: dec!(7),
            spacing: StabilizerSpacing::symmetric(dec!(57.15)),
        },
        SizeClass {
            minimum: dec!(6.25),
            spacing: StabilizerSpacing::symmetric(dec!(50)),
        },
        SizeClass {
            minimum: dec!(6),
            spacing: StabilizerSpacing::symmetric(dec!(47.625)),
        },
    ],
};
