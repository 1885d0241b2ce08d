//! # Keyplate Core
//!
//! Core types and utilities shared by the Keyplate crates.
//! Provides the error type, exact-decimal helpers, keyboard unit
//! conversions and the small vector-path kernel that cutout generators
//! build their outlines with.

pub mod decimal;
pub mod error;
pub mod geometry;
pub mod units;

pub use error::{Error, GeometryError, Result};

pub use geometry::{
    chains::{enclosed_area, find_chains, Chain},
    fillet::{chamfer, closed_polyline, fillet_lines},
    model::CutoutModel,
    path::{Arc, Circle, Line, PathPrimitive},
    point::Point,
    round_rect::round_rectangle,
    Extents,
};

pub use units::KeyUnits;
