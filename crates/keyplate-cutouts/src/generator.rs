//! Cutout generators
//!
//! [`CutoutGenerator`] is the single entry point every housing exposes.
//! The two implementations here are driven entirely by constant tables:
//! [`SwitchCutout`] picks a 1u or 2u outline for the key, and
//! [`StabilizerCutout`] classifies the key's long axis and places a pair
//! of housings either side of the key centre.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;
use tracing::debug;

use crate::classifier::SizeClassTable;
use crate::error::CutoutResult;
use crate::housings::Housing;
use crate::key::KeyDescriptor;
use crate::options::GenerationOptions;
use crate::orientation::{normalize, QuarterTurn};
use crate::outline::Outline;
use keyplate_core::decimal::to_f64;
use keyplate_core::CutoutModel;

/// Produces the cutout for one key in one housing
pub trait CutoutGenerator: Send + Sync {
    /// The housing this generator cuts for.
    fn housing(&self) -> Housing;

    /// Generate the cutout for `key`.
    ///
    /// `Ok(None)` means the housing has nothing to cut for this key, as
    /// with a stabilizer under a key too short to need one. Errors are
    /// reserved for invalid keys or options.
    fn generate(
        &self,
        key: &KeyDescriptor,
        options: &GenerationOptions,
    ) -> CutoutResult<Option<CutoutModel>>;
}

/// Switch footprint class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Footprint {
    OneUnit,
    TwoUnit,
}

impl Footprint {
    /// Two-unit housings serve keys with either side between 2u and 3u
    /// inclusive.
    pub fn for_key(key: &KeyDescriptor) -> Self {
        let in_range = |v: Decimal| v >= dec!(2) && v <= dec!(3);
        if in_range(key.width) || in_range(key.height) {
            Footprint::TwoUnit
        } else {
            Footprint::OneUnit
        }
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Footprint::OneUnit => write!(f, "1u"),
            Footprint::TwoUnit => write!(f, "2u"),
        }
    }
}

/// Switch housing with a 1u and a 2u outline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchCutout {
    pub housing: Housing,
    pub one_unit: Outline,
    pub two_unit: Outline,
    pub turn: QuarterTurn,
}

impl SwitchCutout {
    pub fn outline_for(&self, footprint: Footprint) -> &Outline {
        match footprint {
            Footprint::OneUnit => &self.one_unit,
            Footprint::TwoUnit => &self.two_unit,
        }
    }
}

impl CutoutGenerator for SwitchCutout {
    fn housing(&self) -> Housing {
        self.housing
    }

    fn generate(
        &self,
        key: &KeyDescriptor,
        options: &GenerationOptions,
    ) -> CutoutResult<Option<CutoutModel>> {
        key.validate()?;
        options.validate()?;

        let footprint = Footprint::for_key(key);
        debug!(
            "{} switch for {}x{} key uses the {} footprint",
            self.housing, key.width, key.height, footprint
        );
        let model = self.outline_for(footprint).build(options)?;
        Ok(Some(normalize(model, key, self.turn)))
    }
}

/// Pair of stabilizer housings spaced by key size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StabilizerCutout {
    pub housing: Housing,
    pub outline: Outline,
    pub spacing: SizeClassTable,
    pub turn: QuarterTurn,
}

impl CutoutGenerator for StabilizerCutout {
    fn housing(&self) -> Housing {
        self.housing
    }

    fn generate(
        &self,
        key: &KeyDescriptor,
        options: &GenerationOptions,
    ) -> CutoutResult<Option<CutoutModel>> {
        key.validate()?;
        options.validate()?;

        let Some(spacing) = self.spacing.classify(key.long_axis()) else {
            debug!(
                "{} stabilizer: no cutout for {}x{} key (shortest stabilized key is {:?})",
                self.housing,
                key.width,
                key.height,
                self.spacing.minimum()
            );
            return Ok(None);
        };

        let single = self.outline.build(options)?;
        let left = single.clone().moved(-to_f64(spacing.left), 0.0);
        let right = single.moved(to_f64(spacing.right), 0.0);
        let model = CutoutModel::new()
            .with_model("left", left)
            .with_model("right", right);

        Ok(Some(normalize(model, key, self.turn)))
    }
}
