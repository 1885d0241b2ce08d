//! Composite cutout models
//!
//! A [`CutoutModel`] is a named tree: each node holds named path
//! primitives and named child models. Stabilizer cutouts, for example,
//! are a root with two children called `left` and `right`. Names are
//! kept in `BTreeMap`s so walking a model is deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::path::PathPrimitive;
use super::{merge_extents, Extents};
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CutoutModel {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub paths: BTreeMap<String, PathPrimitive>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub models: BTreeMap<String, CutoutModel>,
}

impl CutoutModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_path(&mut self, name: impl Into<String>, path: impl Into<PathPrimitive>) {
        self.paths.insert(name.into(), path.into());
    }

    pub fn with_path(mut self, name: impl Into<String>, path: impl Into<PathPrimitive>) -> Self {
        self.add_path(name, path);
        self
    }

    pub fn add_model(&mut self, name: impl Into<String>, model: CutoutModel) {
        self.models.insert(name.into(), model);
    }

    pub fn with_model(mut self, name: impl Into<String>, model: CutoutModel) -> Self {
        self.add_model(name, model);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.models.values().all(CutoutModel::is_empty)
    }

    /// Number of primitives in this model and all descendants.
    pub fn path_count(&self) -> usize {
        self.paths.len() + self.models.values().map(CutoutModel::path_count).sum::<usize>()
    }

    /// Offset every coordinate by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for path in self.paths.values_mut() {
            path.translate(dx, dy);
        }
        for child in self.models.values_mut() {
            child.translate(dx, dy);
        }
    }

    pub fn moved(mut self, dx: f64, dy: f64) -> Self {
        self.translate(dx, dy);
        self
    }

    /// Rotate every coordinate about the model's local origin.
    pub fn rotate(&mut self, angle_deg: f64) {
        for path in self.paths.values_mut() {
            path.rotate(angle_deg);
        }
        for child in self.models.values_mut() {
            child.rotate(angle_deg);
        }
    }

    pub fn rotated(mut self, angle_deg: f64) -> Self {
        self.rotate(angle_deg);
        self
    }

    /// Every primitive with its slash-joined name, depth first.
    ///
    /// Own paths come before children; both are in name order.
    pub fn walk(&self) -> Vec<(String, &PathPrimitive)> {
        let mut out = Vec::with_capacity(self.path_count());
        self.walk_into("", &mut out);
        out
    }

    fn walk_into<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a PathPrimitive)>) {
        for (name, path) in &self.paths {
            out.push((join(prefix, name), path));
        }
        for (name, child) in &self.models {
            child.walk_into(&join(prefix, name), out);
        }
    }

    /// Look up a primitive by slash-joined name, e.g. `left/lineTop`.
    pub fn get(&self, name: &str) -> Option<&PathPrimitive> {
        match name.split_once('/') {
            Some((child, rest)) => self.models.get(child)?.get(rest),
            None => self.paths.get(name),
        }
    }

    /// Look up a child model by slash-joined name.
    pub fn child(&self, name: &str) -> Option<&CutoutModel> {
        match name.split_once('/') {
            Some((child, rest)) => self.models.get(child)?.child(rest),
            None => self.models.get(name),
        }
    }

    /// Bounding box of all primitives, `None` when the model is empty.
    pub fn extents(&self) -> Result<Option<Extents>> {
        let mut extents = None;
        for path in self.paths.values() {
            extents = merge_extents(extents, Some(path.extents()?));
        }
        for child in self.models.values() {
            extents = merge_extents(extents, child.extents()?);
        }
        Ok(extents)
    }

    /// Same tree shape and names, coordinates equal within `tolerance`.
    pub fn approx_eq(&self, other: &CutoutModel, tolerance: f64) -> bool {
        self.paths.len() == other.paths.len()
            && self.models.len() == other.models.len()
            && self.paths.iter().all(|(name, path)| {
                other
                    .paths
                    .get(name)
                    .is_some_and(|o| path.approx_eq(o, tolerance))
            })
            && self.models.iter().all(|(name, child)| {
                other
                    .models
                    .get(name)
                    .is_some_and(|o| child.approx_eq(o, tolerance))
            })
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", prefix, name)
    }
}
