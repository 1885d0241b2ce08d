use super::model::CutoutModel;
use super::path::{Arc, Line};
use super::point::Point;
use crate::{GeometryError, Result};

/// Rectangle of `width` x `height` centred on the origin with every corner
/// rounded to `radius`.
///
/// The outline runs clockwise starting at the top edge. A zero radius
/// yields four plain lines; a radius of exactly half the shorter side
/// drops the zero-length edges and leaves a slot or circle of arcs.
pub fn round_rectangle(width: f64, height: f64, radius: f64) -> Result<CutoutModel> {
    for (name, value) in [("width", width), ("height", height)] {
        if !(value > 0.0) {
            return Err(GeometryError::InvalidDimension {
                name: name.to_string(),
                value,
            }
            .into());
        }
    }
    if !(radius >= 0.0) || radius > width.min(height) / 2.0 {
        return Err(GeometryError::InvalidDimension {
            name: "corner radius".to_string(),
            value: radius,
        }
        .into());
    }

    let hw = width / 2.0;
    let hh = height / 2.0;
    let r = radius;

    let mut model = CutoutModel::new();
    let mut add_line = |name: &str, a: Point, b: Point| {
        if a.distance_to(&b) > 0.0 {
            model.add_path(name, Line::new(a, b));
        }
    };

    add_line("lineTop", Point::new(-hw + r, hh), Point::new(hw - r, hh));
    add_line("lineRight", Point::new(hw, hh - r), Point::new(hw, -hh + r));
    add_line("lineBottom", Point::new(hw - r, -hh), Point::new(-hw + r, -hh));
    add_line("lineLeft", Point::new(-hw, -hh + r), Point::new(-hw, hh - r));

    if r > 0.0 {
        let corners = [
            ("arcTopRight", Point::new(hw - r, hh), Point::new(hw, hh - r)),
            ("arcBottomRight", Point::new(hw, -hh + r), Point::new(hw - r, -hh)),
            ("arcBottomLeft", Point::new(-hw + r, -hh), Point::new(-hw, -hh + r)),
            ("arcTopLeft", Point::new(-hw, hh - r), Point::new(-hw + r, hh)),
        ];
        for (name, start, end) in corners {
            model.add_path(name, Arc::new(start, end, r, true, false));
        }
    }

    Ok(model)
}
