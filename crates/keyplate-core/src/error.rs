//! Error handling for Keyplate
//!
//! Provides the error types shared by the geometry kernel and the
//! cutout generators:
//! - Geometry errors (degenerate or self-inverting shapes)
//! - Parse errors (dimension strings)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised when a construction step would produce degenerate geometry,
/// such as a fillet that consumes a whole edge or a rectangle with a
/// non-positive side.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A physical dimension is zero or negative
    #[error("Invalid dimension '{name}': {value} (must be > 0)")]
    InvalidDimension {
        /// The name of the offending dimension.
        name: String,
        /// The value that was supplied.
        value: f64,
    },

    /// A fillet radius does not fit between the two paths
    #[error("Fillet radius {radius} does not fit: needs {needed} but edge is only {available} long")]
    FilletTooLarge {
        /// The requested fillet radius.
        radius: f64,
        /// The trim length the fillet requires on each edge.
        needed: f64,
        /// The shorter of the two edge lengths.
        available: f64,
    },

    /// Two paths that should meet at a corner do not share an endpoint
    #[error("Paths do not share a corner: {0}")]
    NoCommonCorner(String),

    /// Two paths are parallel so no tangent arc exists
    #[error("Paths are parallel; no fillet possible")]
    ParallelPaths,

    /// An arc radius is too small to span its endpoints
    #[error("Arc radius {radius} cannot span a chord of {chord}")]
    ArcTooSmall {
        /// The arc radius.
        radius: f64,
        /// The distance between the arc endpoints.
        chord: f64,
    },
}

/// Main error type for Keyplate core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// A dimension string could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
