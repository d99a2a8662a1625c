//! Rotations of 3D vectors by a precomputed `(cos, sin)` pair.
//!
//! Curves rotate many knots by the same angle, so the trigonometry is done
//! once by the caller and only the pair is passed down.

use crate::DVec3;

/// Rotate `v` about the x axis.
pub fn rotate_x(v: DVec3, cos: f64, sin: f64) -> DVec3 {
    DVec3::new(v.x, v.y * cos - v.z * sin, v.y * sin + v.z * cos)
}

/// Rotate `v` about the y axis.
pub fn rotate_y(v: DVec3, cos: f64, sin: f64) -> DVec3 {
    DVec3::new(v.x * cos + v.z * sin, v.y, v.z * cos - v.x * sin)
}

/// Rotate `v` about the z axis.
pub fn rotate_z(v: DVec3, cos: f64, sin: f64) -> DVec3 {
    DVec3::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos, v.z)
}

/// Rotate `v` about an arbitrary `axis` (Rodrigues' formula).
///
/// The axis is normalized here; a zero axis leaves `v` unchanged.
pub fn rotate_axis(v: DVec3, cos: f64, sin: f64, axis: DVec3) -> DVec3 {
    let k = axis.normalize_or_zero();
    if k == DVec3::ZERO {
        return v;
    }
    v * cos + k.cross(v) * sin + k * (k.dot(v) * (1.0 - cos))
}
