//! Placed groups of curves.
//!
//! An entity pairs a transform with the curves it positions. The curves
//! stay in local space; [`CurveEntity2::world_curves`] and
//! [`CurveEntity3::world_curves`] produce transformed copies.

use knotwork_math::{Transform2, Transform3};
use serde::{Deserialize, Serialize};

use crate::curve::{Curve2, Curve3};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveEntity2 {
    pub transform: Transform2,
    pub curves: Vec<Curve2>,
}

impl CurveEntity2 {
    pub fn new(transform: Transform2, curves: Vec<Curve2>) -> Self {
        Self { transform, curves }
    }

    pub fn append(&mut self, curve: Curve2) {
        self.curves.push(curve);
    }

    pub fn world_curves(&self) -> Vec<Curve2> {
        self.curves
            .iter()
            .cloned()
            .map(|mut curve| {
                curve.apply_transform(&self.transform);
                curve
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveEntity3 {
    pub transform: Transform3,
    pub curves: Vec<Curve3>,
}

impl CurveEntity3 {
    pub fn new(transform: Transform3, curves: Vec<Curve3>) -> Self {
        Self { transform, curves }
    }

    pub fn append(&mut self, curve: Curve3) {
        self.curves.push(curve);
    }

    pub fn world_curves(&self) -> Vec<Curve3> {
        self.curves
            .iter()
            .cloned()
            .map(|mut curve| {
                curve.apply_transform(&self.transform);
                curve
            })
            .collect()
    }
}
