//! # Keyplate Cutouts
//!
//! Switch and stabilizer cutout generators for keyboard mounting plates.
//!
//! Each supported [`Housing`] has a [`CutoutGenerator`] that turns a
//! [`KeyDescriptor`] and [`GenerationOptions`] into a [`CutoutModel`] of
//! named lines, arcs and circles centred on the key:
//!
//! - switch housings always produce a single outline, 1u or 2u
//! - stabilizer housings produce a `left`/`right` pair, or nothing for
//!   keys too short to be stabilized
//!
//! ```ignore
//! use keyplate_cutouts::{Housing, KeyDescriptor, GenerationOptions};
//! use rust_decimal_macros::dec;
//!
//! let key = KeyDescriptor::new(dec!(6.25), dec!(1));
//! let options = GenerationOptions::new().with_kerf(dec!(0.1));
//! let stabs = Housing::EcTopreDeskeysStabilizer
//!     .generator()
//!     .generate(&key, &options)?;
//! ```

pub mod classifier;
pub mod error;
pub mod generator;
pub mod housings;
pub mod kerf;
pub mod key;
pub mod options;
pub mod orientation;
pub mod outline;

pub use classifier::{SizeClass, SizeClassTable, StabilizerSpacing, STABILIZER_SPACING};
pub use error::{CutoutError, CutoutResult, ParameterError, ParameterResult};
pub use generator::{CutoutGenerator, Footprint, StabilizerCutout, SwitchCutout};
pub use housings::{generator_for, Housing};
pub use key::KeyDescriptor;
pub use options::{GenerationOptions, MAX_ALLOWANCE};
pub use orientation::{normalize, QuarterTurn};
pub use outline::{
    ContourOutline, ContourSegment, CornerTreatment, Corners, MountingHoles, Outline,
    QuadOutline, RoundRectOutline,
};

pub use keyplate_core::CutoutModel;
