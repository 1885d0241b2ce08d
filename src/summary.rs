//! Plain-text description of a generated cutout

use std::fmt::Write;

use keyplate_core::{CutoutModel, PathPrimitive, Result};

/// One line per primitive plus the overall bounding box.
pub fn summarize(model: &CutoutModel) -> Result<String> {
    let mut out = String::new();
    for (name, path) in model.walk() {
        let detail = match path {
            PathPrimitive::Line(l) => format!(
                "({:.4}, {:.4}) -> ({:.4}, {:.4})",
                l.start.x, l.start.y, l.end.x, l.end.y
            ),
            PathPrimitive::Arc(a) => format!(
                "({:.4}, {:.4}) -> ({:.4}, {:.4}) r={:.5} {}",
                a.start.x,
                a.start.y,
                a.end.x,
                a.end.y,
                a.radius,
                if a.clockwise { "cw" } else { "ccw" }
            ),
            PathPrimitive::Circle(c) => {
                format!("centre ({:.4}, {:.4}) r={:.4}", c.center.x, c.center.y, c.radius)
            }
        };
        let _ = writeln!(out, "{:<24} {:<6} {}", name, path.kind(), detail);
    }

    match model.extents()? {
        Some(e) => {
            let _ = writeln!(
                out,
                "{} paths, extents ({:.4}, {:.4}) to ({:.4}, {:.4}), {:.4} x {:.4}",
                model.path_count(),
                e.min.x,
                e.min.y,
                e.max.x,
                e.max.y,
                e.width(),
                e.height()
            );
        }
        None => out.push_str("empty model\n"),
    }
    Ok(out)
}
