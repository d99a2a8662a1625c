//! Cubic Bezier point and tangent formulas.
//!
//! A segment runs from `anchor0` to `anchor1`, shaped by `control0` (the
//! leaving knot's fore handle) and `control1` (the arriving knot's rear
//! handle). Parameter `u` is local to the segment, in `[0, 1]`.

use crate::CurveVector;

/// B(u) = (1-u)³·A0 + 3(1-u)²u·C0 + 3(1-u)u²·C1 + u³·A1
pub fn cubic_point<V: CurveVector>(anchor0: V, control0: V, control1: V, anchor1: V, u: f64) -> V {
    let v = 1.0 - u;
    let vv = v * v;
    let uu = u * u;
    anchor0 * (vv * v) + control0 * (3.0 * vv * u) + control1 * (3.0 * v * uu) + anchor1 * (uu * u)
}

/// B′(u) = 3(1-u)²·(C0-A0) + 6(1-u)u·(C1-C0) + 3u²·(A1-C1)
///
/// Unnormalized; zero when the handle at the evaluated end coincides with
/// its anchor.
pub fn cubic_tangent<V: CurveVector>(anchor0: V, control0: V, control1: V, anchor1: V, u: f64) -> V {
    let v = 1.0 - u;
    (control0 - anchor0) * (3.0 * v * v)
        + (control1 - control0) * (6.0 * v * u)
        + (anchor1 - control1) * (3.0 * u * u)
}

/// [`cubic_tangent`], falling back to the chord `A1 - A0` when the
/// derivative vanishes.
pub fn cubic_tangent_or_chord<V: CurveVector>(
    anchor0: V,
    control0: V,
    control1: V,
    anchor1: V,
    u: f64,
) -> V {
    let tangent = cubic_tangent(anchor0, control0, control1, anchor1, u);
    if tangent.is_zero() {
        anchor1 - anchor0
    } else {
        tangent
    }
}

/// Parameters in the open interval `(0, 1)` where one scalar component of a
/// cubic Bezier reaches a local extremum.
///
/// Solves B′(u) = 0 for the component with control values `p0..p3`. Together
/// with the segment endpoints these bound the segment exactly.
pub fn cubic_extrema(p0: f64, p1: f64, p2: f64, p3: f64) -> Vec<f64> {
    // B′(u)/3 = a·u² + b·u + c
    let a = -p0 + 3.0 * p1 - 3.0 * p2 + p3;
    let b = 2.0 * (p0 - 2.0 * p1 + p2);
    let c = p1 - p0;

    let mut roots = Vec::with_capacity(2);
    if a.abs() < EPSILON {
        if b.abs() >= EPSILON {
            roots.push(-c / b);
        }
    } else {
        let disc = b * b - 4.0 * a * c;
        if disc >= 0.0 {
            let sq = disc.sqrt();
            roots.push((-b + sq) / (2.0 * a));
            roots.push((-b - sq) / (2.0 * a));
        }
    }
    roots.retain(|&u| u > 0.0 && u < 1.0);
    roots
}

const EPSILON: f64 = 1e-12;
