//! Tessellation utilities for converting curves to polylines.

use knotwork_core::Tolerance;
use knotwork_math::CurveVector;
use serde::{Deserialize, Serialize};

use crate::curve::ParametricCurve;

/// Maximum recursion depth for adaptive subdivision.
const MAX_DEPTH: u32 = 12;

/// Settings for [`curve_to_polyline_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellationOptions {
    /// Maximum allowed deviation of a chord midpoint from the curve.
    pub tolerance: f64,
    /// Subdivision stops at this depth regardless of deviation.
    pub max_depth: u32,
}

impl TessellationOptions {
    pub fn from_tolerance(tolerance: Tolerance) -> Self {
        Self {
            tolerance: tolerance.linear,
            max_depth: MAX_DEPTH,
        }
    }
}

impl Default for TessellationOptions {
    fn default() -> Self {
        Self::from_tolerance(Tolerance::loose())
    }
}

/// Convert a curve to a polyline using adaptive subdivision.
///
/// Each span of the curve (one Bezier segment for knot curves) is
/// subdivided separately where the midpoint deviation from the chord
/// exceeds `tolerance`, so knot coordinates always appear in the output.
///
/// # Arguments
/// * `curve` - The curve to tessellate
/// * `tolerance` - Maximum allowed deviation from the true curve
///
/// # Returns
/// A vector of points approximating the curve. A closed curve repeats its
/// first point at the end.
pub fn curve_to_polyline<C>(curve: &C, tolerance: f64) -> Vec<C::Vector>
where
    C: ParametricCurve + ?Sized,
{
    curve_to_polyline_with(
        curve,
        &TessellationOptions {
            tolerance,
            max_depth: MAX_DEPTH,
        },
    )
}

/// [`curve_to_polyline`] with explicit options.
pub fn curve_to_polyline_with<C>(curve: &C, options: &TessellationOptions) -> Vec<C::Vector>
where
    C: ParametricCurve + ?Sized,
{
    let (t_min, t_max) = curve.domain();
    let mut points = vec![curve.point_at(t_min)];
    let spans = curve.span_count();
    if spans == 0 || t_max <= t_min {
        return points;
    }

    let width = (t_max - t_min) / spans as f64;
    for i in 0..spans {
        let t0 = t_min + width * i as f64;
        let t1 = if i + 1 == spans { t_max } else { t0 + width };
        subdivide_curve(curve, t0, t1, options, &mut points, 0);
    }
    log::debug!(
        "tessellated {} spans into {} points (tolerance {})",
        spans,
        points.len(),
        options.tolerance
    );
    points
}

fn subdivide_curve<C>(
    curve: &C,
    t0: f64,
    t1: f64,
    options: &TessellationOptions,
    points: &mut Vec<C::Vector>,
    depth: u32,
) where
    C: ParametricCurve + ?Sized,
{
    if depth >= options.max_depth {
        points.push(curve.point_at(t1));
        return;
    }

    let t_mid = (t0 + t1) * 0.5;
    let p0 = curve.point_at(t0);
    let p1 = curve.point_at(t1);
    let p_mid = curve.point_at(t_mid);

    // Chord midpoint
    let chord_mid = (p0 + p1) * 0.5;
    let deviation = (p_mid - chord_mid).length();

    if deviation > options.tolerance {
        subdivide_curve(curve, t0, t_mid, options, points, depth + 1);
        subdivide_curve(curve, t_mid, t1, options, points, depth + 1);
    } else {
        points.push(p1);
    }
}

/// Sample `samples_per_span` evenly spaced parameters per span, plus the
/// end of the domain.
pub fn sample_uniform<C>(curve: &C, samples_per_span: usize) -> Vec<C::Vector>
where
    C: ParametricCurve + ?Sized,
{
    let (t_min, t_max) = curve.domain();
    let steps = curve.span_count() * samples_per_span.max(1);
    if steps == 0 {
        return vec![curve.point_at(t_min)];
    }
    (0..=steps)
        .map(|i| curve.point_at(t_min + (t_max - t_min) * i as f64 / steps as f64))
        .collect()
}
