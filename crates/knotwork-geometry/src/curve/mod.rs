//! Composite cubic Bezier curves and the parametric curve trait.

mod bezier;
mod curve2;
mod curve3;

use knotwork_math::CurveVector;
use serde::{Deserialize, Serialize};

pub use bezier::{Curve, Curve2, Curve3};

/// A point on a curve with its direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSample<V> {
    pub point: V,
    /// Zero when the direction is undefined.
    pub tangent: V,
}

impl<V: CurveVector> CurveSample<V> {
    pub fn new(point: V, tangent: V) -> Self {
        Self { point, tangent }
    }

    /// Unit tangent, or zero when the tangent is zero.
    pub fn direction(&self) -> V {
        self.tangent.normalize_or_zero()
    }
}

/// Trait for parametric curves in 2D or 3D space.
pub trait ParametricCurve: Send + Sync {
    type Vector: CurveVector;

    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Self::Vector;

    /// Evaluate the tangent vector at parameter `t`.
    fn tangent_at(&self, t: f64) -> Self::Vector;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Number of unit-aligned pieces the domain splits into. Tessellation
    /// refines each piece separately.
    fn span_count(&self) -> usize {
        1
    }

    /// Whether the curve is closed (start == end).
    fn is_closed(&self) -> bool {
        false
    }
}
