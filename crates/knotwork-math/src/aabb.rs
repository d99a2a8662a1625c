use crate::{CurveVector, DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box over 2D or 3D points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb<V> {
    pub min: V,
    pub max: V,
}

pub type Aabb2 = Aabb<DVec2>;
pub type Aabb3 = Aabb<DVec3>;

impl<V: CurveVector> Aabb<V> {
    pub fn new(min: V, max: V) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: &[V]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let mut bounds = Self::new(first, first);
        for &p in rest {
            bounds.include(p);
        }
        Some(bounds)
    }

    /// Grow the box to contain `p`.
    pub fn include(&mut self, p: V) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn center(&self) -> V {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> V {
        self.max - self.min
    }

    pub fn contains_point(&self, p: V) -> bool {
        (0..V::DIM).all(|i| {
            let c = p.component(i);
            c >= self.min.component(i) && c <= self.max.component(i)
        })
    }

    pub fn intersects(&self, other: &Self) -> bool {
        (0..V::DIM).all(|i| {
            self.min.component(i) <= other.max.component(i)
                && self.max.component(i) >= other.min.component(i)
        })
    }

    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}
