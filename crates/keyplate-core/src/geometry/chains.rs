//! Chain walking and enclosed area
//!
//! Connects the primitives of a model into chains by matching endpoints,
//! so that a cutout assembled from independently named paths can be
//! measured as the closed outline it describes.

use super::model::CutoutModel;
use super::path::PathPrimitive;
use super::point::Point;
use super::POINT_TOLERANCE;

/// Primitives connected end to end, each oriented along the chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    /// `(name, primitive)` pairs in travel order.
    pub links: Vec<(String, PathPrimitive)>,
    /// Whether the last link ends where the first begins.
    pub closed: bool,
}

impl Chain {
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    fn start(&self) -> Option<Point> {
        self.links.first().and_then(|(_, p)| p.endpoints()).map(|(s, _)| s)
    }

    fn end(&self) -> Option<Point> {
        self.links.last().and_then(|(_, p)| p.endpoints()).map(|(_, e)| e)
    }
}

/// Group every primitive of `model` into chains.
///
/// Circles are closed chains on their own. Chains are returned in the
/// order their first primitive appears in [`CutoutModel::walk`].
pub fn find_chains(model: &CutoutModel) -> Vec<Chain> {
    let walked = model.walk();
    let mut used = vec![false; walked.len()];
    let mut chains = Vec::new();

    for seed in 0..walked.len() {
        if used[seed] {
            continue;
        }
        used[seed] = true;
        let (name, path) = &walked[seed];

        if path.endpoints().is_none() {
            chains.push(Chain {
                links: vec![(name.clone(), **path)],
                closed: true,
            });
            continue;
        }

        let mut chain = Chain {
            links: vec![(name.clone(), **path)],
            closed: false,
        };

        // Extend forward from the end, then backward from the start.
        while let Some(end) = chain.end() {
            match take_link(&walked, &mut used, end, true) {
                Some(link) => chain.links.push(link),
                None => break,
            }
        }
        while let Some(start) = chain.start() {
            if chain
                .end()
                .is_some_and(|e| e.approx_eq(&start, POINT_TOLERANCE))
            {
                break;
            }
            match take_link(&walked, &mut used, start, false) {
                Some(link) => chain.links.insert(0, link),
                None => break,
            }
        }

        chain.closed = match (chain.start(), chain.end()) {
            (Some(s), Some(e)) => s.approx_eq(&e, POINT_TOLERANCE),
            _ => false,
        };
        chains.push(chain);
    }

    chains
}

/// Find an unused open primitive touching `at` and orient it so that it
/// leaves from `at` (forward) or arrives at `at` (backward).
fn take_link(
    walked: &[(String, &PathPrimitive)],
    used: &mut [bool],
    at: Point,
    forward: bool,
) -> Option<(String, PathPrimitive)> {
    for (i, (name, path)) in walked.iter().enumerate() {
        if used[i] {
            continue;
        }
        let Some((s, e)) = path.endpoints() else {
            continue;
        };
        let oriented = if forward {
            if s.approx_eq(&at, POINT_TOLERANCE) {
                Some(**path)
            } else if e.approx_eq(&at, POINT_TOLERANCE) {
                Some(path.reversed())
            } else {
                None
            }
        } else if e.approx_eq(&at, POINT_TOLERANCE) {
            Some(**path)
        } else if s.approx_eq(&at, POINT_TOLERANCE) {
            Some(path.reversed())
        } else {
            None
        };
        if let Some(p) = oriented {
            used[i] = true;
            return Some((name.clone(), p));
        }
    }
    None
}

/// Signed area of a closed chain; positive when it runs counter-clockwise.
pub fn signed_area(chain: &Chain) -> f64 {
    let mut area = 0.0;
    for (_, path) in &chain.links {
        match path {
            PathPrimitive::Line(l) => {
                area += (l.start.x * l.end.y - l.end.x * l.start.y) / 2.0;
            }
            PathPrimitive::Arc(a) => {
                area += (a.start.x * a.end.y - a.end.x * a.start.y) / 2.0;
                let segment = a.segment_area();
                area += if a.clockwise { -segment } else { segment };
            }
            PathPrimitive::Circle(c) => area += c.area(),
        }
    }
    area
}

/// Unsigned area enclosed by a closed chain; zero for open chains.
pub fn enclosed_area(chain: &Chain) -> f64 {
    if !chain.closed {
        return 0.0;
    }
    signed_area(chain).abs()
}
