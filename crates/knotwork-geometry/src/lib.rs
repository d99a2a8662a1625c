//! knotwork geometry: Bezier knots, composite curves, and tessellation.

pub mod curve;
pub mod entity;
pub mod format;
pub mod knot;
pub mod tessellate;

pub use curve::{Curve, Curve2, Curve3, CurveSample, ParametricCurve};
pub use entity::{CurveEntity2, CurveEntity3};
pub use knot::{Knot, Knot2, Knot3};
pub use tessellate::{curve_to_polyline, sample_uniform, TessellationOptions};
