//! # Keyplate
//!
//! Switch and stabilizer cutout geometry for mechanical keyboard plates.
//!
//! ## Architecture
//!
//! Keyplate is organized as a workspace with multiple crates:
//!
//! 1. **keyplate-core** - Error type, exact-decimal helpers, key units and
//!    the vector-path kernel (lines, arcs, circles, composite models)
//! 2. **keyplate-cutouts** - Size classification, kerf compensation,
//!    outline construction, orientation normalization and the per-housing
//!    cutout generators
//! 3. **keyplate** - This facade plus a small command line front end
//!
//! ## Housings
//!
//! - EC (Topre) switches in OEM and Deskeys housings
//! - DynaCap classic switches
//! - EC (Topre) Deskeys and DynaCap classic spacebar stabilizers

pub mod summary;

pub use keyplate_core::{
    decimal, units, Arc, Circle, CutoutModel, Error, Extents, GeometryError, KeyUnits, Line,
    PathPrimitive, Point, Result,
};

pub use keyplate_cutouts::{
    generator_for, CutoutError, CutoutGenerator, CutoutResult, Footprint, GenerationOptions,
    Housing, KeyDescriptor, ParameterError, QuarterTurn,
};

pub use summary::summarize;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output to stderr so summaries on stdout stay clean
/// - RUST_LOG environment variable support, `info` when unset
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
