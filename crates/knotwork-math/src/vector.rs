//! Dimension-agnostic view over `glam` vectors used by knots and curves.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use crate::{rotation, DVec2, DVec3};

/// Operations a knot needs from its coordinate type.
///
/// Implemented for [`DVec2`] and [`DVec3`]. Components are addressed in
/// `x, y[, z]` order.
pub trait CurveVector:
    Copy
    + Debug
    + Default
    + PartialEq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Mul<Self, Output = Self>
    + Neg<Output = Self>
{
    /// Number of scalar components.
    const DIM: usize;
    const ZERO: Self;

    /// Component by index, `0.0` when `index >= DIM`.
    fn component(&self, index: usize) -> f64;

    /// Set a component by index; out-of-range indices are ignored.
    fn set_component(&mut self, index: usize, value: f64);

    /// Build from a slice, reading missing components as `0.0`.
    fn from_components(values: &[f64]) -> Self {
        let mut v = Self::ZERO;
        for (i, &value) in values.iter().take(Self::DIM).enumerate() {
            v.set_component(i, value);
        }
        v
    }

    fn length(self) -> f64;

    fn dot(self, rhs: Self) -> f64;

    /// Unit vector in the same direction, or the zero vector when the
    /// length is zero or not finite.
    fn normalize_or_zero(self) -> Self;

    fn is_finite(self) -> bool;

    fn min(self, rhs: Self) -> Self;

    fn max(self, rhs: Self) -> Self;

    /// Rotate about the z axis by a precomputed `(cos, sin)` pair.
    fn rotate_z_cs(self, cos: f64, sin: f64) -> Self;

    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    fn lerp(self, rhs: Self, t: f64) -> Self {
        self + (rhs - self) * t
    }
}

impl CurveVector for DVec2 {
    const DIM: usize = 2;
    const ZERO: Self = DVec2::ZERO;

    fn component(&self, index: usize) -> f64 {
        match index {
            0 => self.x,
            1 => self.y,
            _ => 0.0,
        }
    }

    fn set_component(&mut self, index: usize, value: f64) {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => {}
        }
    }

    fn length(self) -> f64 {
        DVec2::length(self)
    }

    fn dot(self, rhs: Self) -> f64 {
        DVec2::dot(self, rhs)
    }

    fn normalize_or_zero(self) -> Self {
        DVec2::normalize_or_zero(self)
    }

    fn is_finite(self) -> bool {
        DVec2::is_finite(self)
    }

    fn min(self, rhs: Self) -> Self {
        DVec2::min(self, rhs)
    }

    fn max(self, rhs: Self) -> Self {
        DVec2::max(self, rhs)
    }

    fn rotate_z_cs(self, cos: f64, sin: f64) -> Self {
        DVec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl CurveVector for DVec3 {
    const DIM: usize = 3;
    const ZERO: Self = DVec3::ZERO;

    fn component(&self, index: usize) -> f64 {
        match index {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => 0.0,
        }
    }

    fn set_component(&mut self, index: usize, value: f64) {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => {}
        }
    }

    fn length(self) -> f64 {
        DVec3::length(self)
    }

    fn dot(self, rhs: Self) -> f64 {
        DVec3::dot(self, rhs)
    }

    fn normalize_or_zero(self) -> Self {
        DVec3::normalize_or_zero(self)
    }

    fn is_finite(self) -> bool {
        DVec3::is_finite(self)
    }

    fn min(self, rhs: Self) -> Self {
        DVec3::min(self, rhs)
    }

    fn max(self, rhs: Self) -> Self {
        DVec3::max(self, rhs)
    }

    fn rotate_z_cs(self, cos: f64, sin: f64) -> Self {
        rotation::rotate_z(self, cos, sin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{dvec2, dvec3};

    #[test]
    fn test_component_access() {
        let mut v = dvec3(1.0, 2.0, 3.0);
        assert_eq!(v.component(2), 3.0);
        assert_eq!(v.component(3), 0.0);
        v.set_component(1, 5.0);
        v.set_component(7, 9.0);
        assert_eq!(v, dvec3(1.0, 5.0, 3.0));
    }

    #[test]
    fn test_from_components_short_slice() {
        assert_eq!(DVec3::from_components(&[4.0]), dvec3(4.0, 0.0, 0.0));
        assert_eq!(DVec2::from_components(&[1.0, 2.0, 3.0]), dvec2(1.0, 2.0));
    }

    #[test]
    fn test_normalize_zero_vector() {
        assert_eq!(CurveVector::normalize_or_zero(DVec2::ZERO), DVec2::ZERO);
        let n = CurveVector::normalize_or_zero(dvec2(3.0, 4.0));
        assert!((n - dvec2(0.6, 0.8)).length() < 1e-12);
    }

    #[test]
    fn test_rotate_z_2d_quarter_turn() {
        let (sin, cos) = std::f64::consts::FRAC_PI_2.sin_cos();
        let r = dvec2(1.0, 0.0).rotate_z_cs(cos, sin);
        assert!((r - dvec2(0.0, 1.0)).length() < 1e-12);
    }
}
