//! Generation options
//!
//! Runtime knobs shared by every housing. Housing dimensions themselves
//! are compile-time constants of each housing table; only the cutting
//! allowances live here. Options can be loaded from a `.toml` or `.json`
//! file:
//!
//! ```toml
//! kerf = "0.1"
//! stabilizer_fillet_radius = "0.5"
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{CutoutError, CutoutResult, ParameterError, ParameterResult};

/// Largest kerf or fillet radius magnitude accepted, in mm
pub const MAX_ALLOWANCE: Decimal = dec!(100);

/// Options applied to every `generate` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Allowance each kerf-aware edge moves toward the cutout interior.
    /// Negative values grow the cutout instead.
    pub kerf: Decimal,
    /// Corner radius for stabilizer housings that support filleting;
    /// zero keeps sharp corners
    pub stabilizer_fillet_radius: Decimal,
}

impl GenerationOptions {
    /// Create options with no kerf and no stabilizer fillet
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kerf(mut self, kerf: Decimal) -> Self {
        self.kerf = kerf;
        self
    }

    pub fn with_stabilizer_fillet_radius(mut self, radius: Decimal) -> Self {
        self.stabilizer_fillet_radius = radius;
        self
    }

    /// Load options from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> CutoutResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let options: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(CutoutError::Config(
                "Options file must be .json or .toml".to_string(),
            ));
        };

        options.validate()?;
        debug!(
            "Loaded options from {}: kerf={} stabilizer_fillet_radius={}",
            path.display(),
            options.kerf,
            options.stabilizer_fillet_radius
        );
        Ok(options)
    }

    /// Validate option values that are wrong for every housing.
    ///
    /// Whether a kerf or radius fits a particular outline is checked by
    /// the outline builder against that housing's dimensions.
    pub fn validate(&self) -> ParameterResult<()> {
        if self.stabilizer_fillet_radius < Decimal::ZERO {
            return Err(ParameterError::InvalidValue {
                name: "stabilizer_fillet_radius".to_string(),
                reason: format!("{} must be >= 0", self.stabilizer_fillet_radius),
            });
        }
        if self.stabilizer_fillet_radius > MAX_ALLOWANCE {
            return Err(ParameterError::OutOfRange {
                name: "stabilizer_fillet_radius".to_string(),
                value: self.stabilizer_fillet_radius,
                min: Decimal::ZERO,
                max: MAX_ALLOWANCE,
            });
        }
        if self.kerf.abs() > MAX_ALLOWANCE {
            return Err(ParameterError::OutOfRange {
                name: "kerf".to_string(),
                value: self.kerf,
                min: -MAX_ALLOWANCE,
                max: MAX_ALLOWANCE,
            });
        }
        Ok(())
    }
}
