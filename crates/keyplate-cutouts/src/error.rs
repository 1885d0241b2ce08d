//! Error types for the cutouts crate.
//!
//! This module provides structured error types for cutout generation,
//! parameter validation and options file loading.

use rust_decimal::Decimal;
use std::io;
use thiserror::Error;

/// Errors that can occur while generating a cutout.
#[derive(Error, Debug)]
pub enum CutoutError {
    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// The geometry kernel rejected a construction step.
    #[error("Geometry error: {0}")]
    Geometry(#[from] keyplate_core::Error),

    /// No housing is registered under the given id.
    #[error("Unknown housing: {0}")]
    UnknownHousing(String),

    /// The options file is malformed or has an unsupported extension.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error while reading an options file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON deserialization error.
    #[error("Invalid JSON options: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("Invalid TOML options: {0}")]
    Toml(#[from] toml::de::Error),
}

impl From<keyplate_core::GeometryError> for CutoutError {
    fn from(err: keyplate_core::GeometryError) -> Self {
        CutoutError::Geometry(err.into())
    }
}

/// Errors related to key and option validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// Dimensions are invalid (zero or negative).
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Result type alias for cutout generation.
pub type CutoutResult<T> = Result<T, CutoutError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;
