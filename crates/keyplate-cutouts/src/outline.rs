//! Outline construction
//!
//! Every housing outline is one of three shapes, each described by a
//! constant table and built centred on the origin:
//!
//! - [`QuadOutline`]: a kerf-aware rectangle whose four corners are each
//!   left sharp, chamfered or filleted, with optional mounting holes
//! - [`RoundRectOutline`]: a fixed rounded rectangle, no kerf
//! - [`ContourOutline`]: a hand-fitted closed contour given as literal
//!   vertices joined by lines and arcs, no kerf
//!
//! Dimension math stays in [`Decimal`] until the points are handed to
//! the geometry kernel.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{CutoutResult, ParameterError};
use crate::kerf::KerfBox;
use crate::options::GenerationOptions;
use keyplate_core::decimal::{point, to_f64};
use keyplate_core::geometry::POINT_TOLERANCE;
use keyplate_core::{
    chamfer, closed_polyline, fillet_lines, round_rectangle, Arc, Circle, CutoutModel, Line,
};

/// How a single corner of a [`QuadOutline`] is finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerTreatment {
    Sharp,
    /// Straight cut `x` along the horizontal edge and `y` along the
    /// vertical edge
    Chamfer { x: Decimal, y: Decimal },
    /// Tangent arc of a fixed radius
    Fillet { radius: Decimal },
    /// Tangent arc of `stabilizer_fillet_radius`, sharp when that is zero
    StabilizerFillet,
}

impl CornerTreatment {
    pub const fn chamfer(size: Decimal) -> Self {
        CornerTreatment::Chamfer { x: size, y: size }
    }

    /// Replace option-driven treatments with concrete ones.
    fn resolve(self, options: &GenerationOptions) -> Self {
        match self {
            CornerTreatment::StabilizerFillet
                if options.stabilizer_fillet_radius > Decimal::ZERO =>
            {
                CornerTreatment::Fillet {
                    radius: options.stabilizer_fillet_radius,
                }
            }
            CornerTreatment::StabilizerFillet => CornerTreatment::Sharp,
            CornerTreatment::Fillet { radius } if radius.is_zero() => CornerTreatment::Sharp,
            CornerTreatment::Chamfer { x, y } if x.is_zero() && y.is_zero() => {
                CornerTreatment::Sharp
            }
            other => other,
        }
    }

    /// Length consumed along the horizontal and vertical edges.
    fn reach(&self) -> (Decimal, Decimal) {
        match *self {
            CornerTreatment::Chamfer { x, y } => (x, y),
            CornerTreatment::Fillet { radius } => (radius, radius),
            CornerTreatment::Sharp | CornerTreatment::StabilizerFillet => {
                (Decimal::ZERO, Decimal::ZERO)
            }
        }
    }
}

/// Treatments for the four corners, clockwise from the top left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corners {
    pub top_left: CornerTreatment,
    pub top_right: CornerTreatment,
    pub bottom_right: CornerTreatment,
    pub bottom_left: CornerTreatment,
}

impl Corners {
    pub const fn uniform(treatment: CornerTreatment) -> Self {
        Self {
            top_left: treatment,
            top_right: treatment,
            bottom_right: treatment,
            bottom_left: treatment,
        }
    }

    /// Same treatment on both top corners and on both bottom corners.
    pub const fn top_bottom(top: CornerTreatment, bottom: CornerTreatment) -> Self {
        Self {
            top_left: top,
            top_right: top,
            bottom_right: bottom,
            bottom_left: bottom,
        }
    }

    fn as_array(&self) -> [CornerTreatment; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }
}

/// Pair of mounting-hole circles mirrored about the vertical axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountingHoles {
    /// Distance of each centre from the vertical axis
    pub x: Decimal,
    pub y: Decimal,
    pub radius: Decimal,
}

impl MountingHoles {
    fn add_to(&self, model: &mut CutoutModel) {
        let r = to_f64(self.radius);
        model.add_path("mountingHoleLeft", Circle::new(point(-self.x, self.y), r));
        model.add_path("mountingHoleRight", Circle::new(point(self.x, self.y), r));
    }
}

const CORNER_NAMES: [&str; 4] = ["TopLeft", "TopRight", "BottomRight", "BottomLeft"];
const EDGE_NAMES: [&str; 4] = ["lineTop", "lineRight", "lineBottom", "lineLeft"];

/// Kerf-aware rectangle with per-corner treatments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadOutline {
    pub width: Decimal,
    pub height: Decimal,
    pub corners: Corners,
    pub holes: Option<MountingHoles>,
}

impl QuadOutline {
    /// Build the outline with every edge moved `options.kerf` inward.
    ///
    /// Edges are named `lineTop`, `lineRight`, `lineBottom` and
    /// `lineLeft`; chamfers `lineTopLeft` and so on; fillets
    /// `filletTopLeft` and so on. The outline runs clockwise.
    pub fn build(&self, options: &GenerationOptions) -> CutoutResult<CutoutModel> {
        let kerfed = KerfBox::new(self.width, self.height, options.kerf)?;
        let corners = self.corners.as_array().map(|c| c.resolve(options));
        self.check_fit(&kerfed, &corners)?;

        let hw = kerfed.half_width;
        let hh = kerfed.half_height;
        let vertices = [
            point(-hw, hh),
            point(hw, hh),
            point(hw, -hh),
            point(-hw, -hh),
        ];
        // Edge i leaves corner i and arrives at corner i + 1.
        let mut edges = closed_polyline(&vertices);

        let mut model = CutoutModel::new();
        for (i, corner) in corners.iter().enumerate() {
            let name = CORNER_NAMES[i];
            let prev = (i + 3) % 4;
            let (mut incoming, mut outgoing) = (edges[prev], edges[i]);
            match *corner {
                CornerTreatment::Chamfer { x, y } => {
                    // Top-left and bottom-right are entered along a vertical edge.
                    let (along_in, along_out) = if i % 2 == 0 { (y, x) } else { (x, y) };
                    let cut = chamfer(
                        &mut incoming,
                        &mut outgoing,
                        to_f64(along_in),
                        to_f64(along_out),
                    )?;
                    model.add_path(format!("line{}", name), cut);
                }
                CornerTreatment::Fillet { radius } => {
                    let arc = fillet_lines(&mut incoming, &mut outgoing, to_f64(radius))?;
                    model.add_path(format!("fillet{}", name), arc);
                }
                CornerTreatment::Sharp | CornerTreatment::StabilizerFillet => continue,
            }
            edges[prev] = incoming;
            edges[i] = outgoing;
        }

        for (name, edge) in EDGE_NAMES.iter().zip(edges) {
            if edge.length() > POINT_TOLERANCE {
                model.add_path(*name, edge);
            }
        }

        if let Some(holes) = &self.holes {
            holes.add_to(&mut model);
        }

        debug!(
            "Built {}x{} outline with {} paths",
            kerfed.width(),
            kerfed.height(),
            model.path_count()
        );
        Ok(model)
    }

    /// Corner cuts sharing an edge must fit on the kerfed edge.
    fn check_fit(&self, kerfed: &KerfBox, corners: &[CornerTreatment; 4]) -> CutoutResult<()> {
        for corner in corners {
            let (x, y) = corner.reach();
            if x < Decimal::ZERO || y < Decimal::ZERO {
                return Err(ParameterError::InvalidDimensions(format!(
                    "corner cut {}x{} must not be negative",
                    x, y
                ))
                .into());
            }
        }
        let reach: Vec<(Decimal, Decimal)> = corners.iter().map(CornerTreatment::reach).collect();
        kerfed.check_edge("lineTop", true, reach[0].0, reach[1].0)?;
        kerfed.check_edge("lineRight", false, reach[1].1, reach[2].1)?;
        kerfed.check_edge("lineBottom", true, reach[2].0, reach[3].0)?;
        kerfed.check_edge("lineLeft", false, reach[3].1, reach[0].1)?;
        Ok(())
    }
}

/// Rounded rectangle with fixed dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRectOutline {
    pub width: Decimal,
    pub height: Decimal,
    pub radius: Decimal,
}

impl RoundRectOutline {
    pub fn build(&self) -> CutoutResult<CutoutModel> {
        let model = round_rectangle(
            to_f64(self.width),
            to_f64(self.height),
            to_f64(self.radius),
        )?;
        debug!(
            "Built {}x{} r{} rounded outline",
            self.width, self.height, self.radius
        );
        Ok(model)
    }
}

/// How consecutive contour vertices are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContourSegment {
    Line,
    /// Minor arc of `radius` in the given direction
    Arc { radius: Decimal, clockwise: bool },
}

/// Closed contour given as literal vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContourOutline {
    pub vertices: &'static [[Decimal; 2]],
    /// `segments[i]` joins vertex `i` to vertex `i + 1`, wrapping around
    pub segments: &'static [ContourSegment],
    pub holes: Option<MountingHoles>,
}

impl ContourOutline {
    /// Paths are named `path0` through `pathN` in vertex order.
    pub fn build(&self) -> CutoutResult<CutoutModel> {
        if self.vertices.len() != self.segments.len() || self.vertices.len() < 2 {
            return Err(ParameterError::InvalidDimensions(format!(
                "contour has {} vertices but {} segments",
                self.vertices.len(),
                self.segments.len()
            ))
            .into());
        }

        let n = self.vertices.len();
        let mut model = CutoutModel::new();
        for (i, segment) in self.segments.iter().enumerate() {
            let [ax, ay] = self.vertices[i];
            let [bx, by] = self.vertices[(i + 1) % n];
            let (start, end) = (point(ax, ay), point(bx, by));
            let name = format!("path{}", i);
            match *segment {
                ContourSegment::Line => model.add_path(name, Line::new(start, end)),
                ContourSegment::Arc { radius, clockwise } => {
                    model.add_path(name, Arc::new(start, end, to_f64(radius), clockwise, false))
                }
            }
        }

        if let Some(holes) = &self.holes {
            holes.add_to(&mut model);
        }

        debug!("Built contour outline with {} paths", model.path_count());
        Ok(model)
    }
}

/// Any housing outline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outline {
    Quad(QuadOutline),
    RoundRect(RoundRectOutline),
    Contour(ContourOutline),
}

impl Outline {
    /// Whether `options.kerf` affects this outline.
    pub fn is_kerf_aware(&self) -> bool {
        matches!(self, Outline::Quad(_))
    }

    pub fn build(&self, options: &GenerationOptions) -> CutoutResult<CutoutModel> {
        if !self.is_kerf_aware() && !options.kerf.is_zero() {
            debug!("Kerf {} does not apply to fixed outlines", options.kerf);
        }
        match self {
            Outline::Quad(quad) => quad.build(options),
            Outline::RoundRect(rect) => rect.build(),
            Outline::Contour(contour) => contour.build(),
        }
    }
}
