//! Orientation normalization
//!
//! Outlines are authored for a key whose long axis runs horizontally.
//! Keys modelled with the long axis vertical get the finished model
//! turned by the housing's quarter turn, once, after spacing is applied.

use tracing::debug;

use crate::key::KeyDescriptor;
use keyplate_core::CutoutModel;

/// Fixed rotation a housing applies to sideways keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuarterTurn {
    /// +90°
    CounterClockwise,
    /// -90°
    Clockwise,
}

impl QuarterTurn {
    pub fn degrees(&self) -> f64 {
        match self {
            QuarterTurn::CounterClockwise => 90.0,
            QuarterTurn::Clockwise => -90.0,
        }
    }
}

/// Rotate `model` by `turn` when `key` is sideways, otherwise return it
/// unchanged.
pub fn normalize(model: CutoutModel, key: &KeyDescriptor, turn: QuarterTurn) -> CutoutModel {
    if key.is_sideways() {
        debug!(
            "Key {}x{} is sideways, rotating cutout by {} degrees",
            key.width,
            key.height,
            turn.degrees()
        );
        model.rotated(turn.degrees())
    } else {
        model
    }
}
