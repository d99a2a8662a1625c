//! Control vertices of composite cubic Bezier curves.
//!
//! A [`Knot`] holds an anchor `coord` plus two handles. The fore handle
//! shapes the segment leaving the knot; the rear handle shapes the segment
//! arriving at it.

mod knot2;
mod knot3;

use knotwork_core::Tolerance;
use knotwork_math::{CurveVector, DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// A knot with planar coordinates.
pub type Knot2 = Knot<DVec2>;
/// A knot with spatial coordinates.
pub type Knot3 = Knot<DVec3>;

/// One control vertex of a piecewise cubic Bezier curve.
///
/// No invariant ties the handles to the coordinate: either handle may
/// coincide with `coord`, which yields a degenerate (but valid) segment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Knot<V> {
    pub coord: V,
    pub fore_handle: V,
    pub rear_handle: V,
}

const HASH_OFFSET_BASIS: u32 = 0x811c_9dc5;
const HASH_PRIME: u32 = 0x0100_0193;

impl<V: CurveVector> Knot<V> {
    /// Number of flattened components: `coord`, `fore_handle`, `rear_handle`
    /// in that order, each `V::DIM` wide.
    pub const COMPONENTS: usize = 3 * V::DIM;

    pub fn new(coord: V, fore_handle: V, rear_handle: V) -> Self {
        Self {
            coord,
            fore_handle,
            rear_handle,
        }
    }

    /// A knot whose handles both sit on `coord`.
    pub fn new_straight(coord: V) -> Self {
        Self::new(coord, coord, coord)
    }

    /// Build from a flattened slice in [`Knot::to_array`] order. Missing
    /// components read as `0.0`; extra components are ignored.
    pub fn from_slice(values: &[f64]) -> Self {
        let mut parts = values.chunks(V::DIM).map(V::from_components);
        let coord = parts.next().unwrap_or(V::ZERO);
        let fore_handle = parts.next().unwrap_or(V::ZERO);
        let rear_handle = parts.next().unwrap_or(V::ZERO);
        Self::new(coord, fore_handle, rear_handle)
    }

    /// Flattened components: `coord`, then `fore_handle`, then `rear_handle`.
    pub fn to_array(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(Self::COMPONENTS);
        self.write_components(&mut out);
        out
    }

    pub(crate) fn write_components(&self, out: &mut Vec<f64>) {
        for v in [self.coord, self.fore_handle, self.rear_handle] {
            out.extend((0..V::DIM).map(|i| v.component(i)));
        }
    }

    /// Map a forward (`0..N`) or from-end (`-N..=-1`) index to a slot.
    fn resolve(index: isize) -> Option<usize> {
        let n = Self::COMPONENTS as isize;
        let i = if index < 0 { index + n } else { index };
        (0..n).contains(&i).then_some(i as usize)
    }

    /// Flattened component access. Negative indices count from the end.
    ///
    /// Out-of-range indices return `0.0`.
    pub fn get(&self, index: isize) -> f64 {
        let Some(i) = Self::resolve(index) else {
            return 0.0;
        };
        let (slot, axis) = (i / V::DIM, i % V::DIM);
        match slot {
            0 => self.coord.component(axis),
            1 => self.fore_handle.component(axis),
            _ => self.rear_handle.component(axis),
        }
    }

    /// Flattened component assignment. Negative indices count from the end.
    ///
    /// Out-of-range indices are ignored.
    pub fn set(&mut self, index: isize, value: f64) {
        let Some(i) = Self::resolve(index) else {
            return;
        };
        let (slot, axis) = (i / V::DIM, i % V::DIM);
        let target = match slot {
            0 => &mut self.coord,
            1 => &mut self.fore_handle,
            _ => &mut self.rear_handle,
        };
        target.set_component(axis, value);
    }

    /// Offset of the fore handle from the coordinate.
    pub fn fore_offset(&self) -> V {
        self.fore_handle - self.coord
    }

    /// Offset of the rear handle from the coordinate.
    pub fn rear_offset(&self) -> V {
        self.rear_handle - self.coord
    }

    /// Swap the handles. Called for every knot when a curve's knot order
    /// is reversed so each handle still faces the same neighbor.
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.fore_handle, &mut self.rear_handle);
    }

    /// Set the rear handle to the reflection of the fore handle through
    /// `coord`.
    pub fn mirror_handles_forward(&mut self) {
        self.rear_handle = self.coord - self.fore_offset();
    }

    /// Set the fore handle to the reflection of the rear handle through
    /// `coord`.
    pub fn mirror_handles_backward(&mut self) {
        self.fore_handle = self.coord - self.rear_offset();
    }

    /// Point the rear handle directly away from the fore handle while
    /// keeping the rear handle's own length.
    ///
    /// Collapses the rear handle onto `coord` if either offset is zero.
    pub fn align_handles_forward(&mut self) {
        let direction = (-self.fore_offset()).normalize_or_zero();
        self.rear_handle = self.coord + direction * self.rear_offset().length();
    }

    /// Point the fore handle directly away from the rear handle while
    /// keeping the fore handle's own length.
    ///
    /// Collapses the fore handle onto `coord` if either offset is zero.
    pub fn align_handles_backward(&mut self) {
        let direction = (-self.rear_offset()).normalize_or_zero();
        self.fore_handle = self.coord + direction * self.fore_offset().length();
    }

    /// Multiply the fore handle's offset. Negative factors flip it.
    pub fn scale_fore_handle_by(&mut self, factor: f64) {
        self.fore_handle = self.coord + self.fore_offset() * factor;
    }

    /// Multiply the rear handle's offset. Negative factors flip it.
    pub fn scale_rear_handle_by(&mut self, factor: f64) {
        self.rear_handle = self.coord + self.rear_offset() * factor;
    }

    /// Set the fore handle's distance from `coord`. A zero-length offset
    /// has no direction and is left unchanged.
    pub fn scale_fore_handle_to(&mut self, magnitude: f64) {
        let offset = self.fore_offset();
        if !offset.is_zero() {
            self.fore_handle = self.coord + offset.normalize_or_zero() * magnitude;
        }
    }

    /// Set the rear handle's distance from `coord`. A zero-length offset
    /// has no direction and is left unchanged.
    pub fn scale_rear_handle_to(&mut self, magnitude: f64) {
        let offset = self.rear_offset();
        if !offset.is_zero() {
            self.rear_handle = self.coord + offset.normalize_or_zero() * magnitude;
        }
    }

    pub fn rotate_z(&mut self, radians: f64) {
        let (sin, cos) = radians.sin_cos();
        self.rotate_z_cs(cos, sin);
    }

    pub fn rotate_z_cs(&mut self, cos: f64, sin: f64) {
        self.map(|v| v.rotate_z_cs(cos, sin));
    }

    /// Component-wise scale about the origin.
    pub fn scale(&mut self, scale: V) {
        self.map(|v| v * scale);
    }

    pub fn scale_uniform(&mut self, scale: f64) {
        self.map(|v| v * scale);
    }

    pub fn translate(&mut self, offset: V) {
        self.map(|v| v + offset);
    }

    /// Apply `f` to the coordinate and both handles.
    pub fn map(&mut self, f: impl Fn(V) -> V) {
        self.coord = f(self.coord);
        self.fore_handle = f(self.fore_handle);
        self.rear_handle = f(self.rear_handle);
    }

    /// Blend every vector of `a` toward `b`.
    pub fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self::new(
            a.coord.lerp(b.coord, t),
            a.fore_handle.lerp(b.fore_handle, t),
            a.rear_handle.lerp(b.rear_handle, t),
        )
    }

    pub fn is_finite(&self) -> bool {
        self.coord.is_finite() && self.fore_handle.is_finite() && self.rear_handle.is_finite()
    }

    /// Component-wise comparison within `tolerance.linear`.
    pub fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        (0..Self::COMPONENTS as isize).all(|i| tolerance.linear_eq(self.get(i), other.get(i)))
    }

    /// Combined 32-bit hash of the three vectors.
    ///
    /// Equal knots have equal hash codes; the converse does not hold.
    /// Compare knots with `==` or [`Knot::approx_eq`].
    pub fn hash_code(&self) -> u32 {
        [self.coord, self.fore_handle, self.rear_handle]
            .into_iter()
            .fold(HASH_OFFSET_BASIS, |h, v| h.wrapping_mul(HASH_PRIME) ^ vector_hash(v))
    }
}

/// Bit pattern with `-0.0` folded into `0.0`, so knots that compare equal
/// get equal hash codes.
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

fn vector_hash<V: CurveVector>(v: V) -> u32 {
    (0..V::DIM).fold(HASH_OFFSET_BASIS, |h, i| {
        let bits = canonical_bits(v.component(i));
        h.wrapping_mul(HASH_PRIME) ^ (bits ^ (bits >> 32)) as u32
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use knotwork_math::{dvec2, dvec3};

    fn sample2() -> Knot2 {
        Knot2::new(dvec2(1.0, 2.0), dvec2(3.0, 4.0), dvec2(5.0, 6.0))
    }

    #[test]
    fn test_flattened_order() {
        assert_eq!(sample2().to_array(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let k = Knot3::new(dvec3(1.0, 2.0, 3.0), dvec3(4.0, 5.0, 6.0), dvec3(7.0, 8.0, 9.0));
        assert_eq!(k.to_array(), (1..=9).map(f64::from).collect::<Vec<_>>());
        assert_eq!(Knot3::COMPONENTS, 9);
    }

    #[test]
    fn test_negative_index_addresses_same_components() {
        let k = sample2();
        for i in 0..6isize {
            assert_eq!(k.get(i), k.get(i - 6));
        }
        assert_eq!(k.get(-1), 6.0);
        assert_eq!(k.get(-6), 1.0);
    }

    #[test]
    fn test_out_of_range_is_silent() {
        let mut k = sample2();
        assert_eq!(k.get(6), 0.0);
        assert_eq!(k.get(-7), 0.0);
        let before = k;
        k.set(6, 99.0);
        k.set(-7, 99.0);
        assert_eq!(k, before);
    }

    #[test]
    fn test_set_negative_index() {
        let mut k = sample2();
        k.set(-2, 10.0);
        assert_eq!(k.rear_handle, dvec2(10.0, 6.0));
        k.set(3, -1.0);
        assert_eq!(k.fore_handle, dvec2(3.0, -1.0));
    }

    #[test]
    fn test_from_slice_short_reads_zero() {
        let k = Knot2::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(k.coord, dvec2(1.0, 2.0));
        assert_eq!(k.fore_handle, dvec2(3.0, 0.0));
        assert_eq!(k.rear_handle, DVec2::ZERO);
    }

    #[test]
    fn test_reverse_swaps_handles() {
        let mut k = sample2();
        k.reverse();
        assert_eq!(k.fore_handle, dvec2(5.0, 6.0));
        assert_eq!(k.rear_handle, dvec2(3.0, 4.0));
        k.reverse();
        assert_eq!(k, sample2());
    }

    #[test]
    fn test_mirror_forward() {
        let mut k = sample2();
        k.mirror_handles_forward();
        assert_eq!(k.rear_offset(), -k.fore_offset());
        assert_eq!(k.rear_handle, dvec2(-1.0, 0.0));
    }

    #[test]
    fn test_mirror_backward() {
        let mut k = sample2();
        k.mirror_handles_backward();
        assert_eq!(k.fore_offset(), -k.rear_offset());
    }

    #[test]
    fn test_align_forward_keeps_rear_magnitude() {
        let mut k = Knot2::new(dvec2(0.0, 0.0), dvec2(2.0, 0.0), dvec2(0.0, 0.5));
        k.align_handles_forward();
        assert_relative_eq!(k.rear_offset().length(), 0.5, epsilon = 1e-12);
        assert!((k.rear_handle - dvec2(-0.5, 0.0)).length() < 1e-12);
        // Fore handle untouched
        assert_eq!(k.fore_handle, dvec2(2.0, 0.0));
    }

    #[test]
    fn test_align_backward_keeps_fore_magnitude() {
        let mut k = Knot3::new(dvec3(1.0, 1.0, 1.0), dvec3(1.0, 4.0, 1.0), dvec3(1.0, 1.0, 0.0));
        k.align_handles_backward();
        assert_relative_eq!(k.fore_offset().length(), 3.0, epsilon = 1e-12);
        assert!((k.fore_handle - dvec3(1.0, 1.0, 4.0)).length() < 1e-12);
    }

    #[test]
    fn test_align_with_zero_offset_collapses() {
        let mut k = Knot2::new(dvec2(1.0, 1.0), dvec2(1.0, 1.0), dvec2(3.0, 1.0));
        k.align_handles_forward();
        assert_eq!(k.rear_handle, k.coord);

        let mut k = Knot2::new(dvec2(1.0, 1.0), dvec2(2.0, 1.0), dvec2(1.0, 1.0));
        k.align_handles_forward();
        assert_eq!(k.rear_handle, k.coord);
    }

    #[test]
    fn test_scale_handle_by() {
        let mut k = sample2();
        k.scale_fore_handle_by(1.0);
        assert_eq!(k, sample2());
        k.scale_fore_handle_by(-1.0);
        assert_eq!(k.fore_handle, dvec2(-1.0, 0.0));
        k.scale_rear_handle_by(0.0);
        assert_eq!(k.rear_handle, k.coord);
    }

    #[test]
    fn test_scale_handle_to() {
        let mut k = Knot2::new(dvec2(0.0, 0.0), dvec2(3.0, 4.0), dvec2(0.0, 0.0));
        k.scale_fore_handle_to(10.0);
        assert!((k.fore_handle - dvec2(6.0, 8.0)).length() < 1e-12);
        k.scale_rear_handle_to(10.0);
        assert_eq!(k.rear_handle, DVec2::ZERO);
    }

    #[test]
    fn test_translate_preserves_offsets() {
        let mut k = sample2();
        let (fore, rear) = (k.fore_offset(), k.rear_offset());
        k.translate(dvec2(-4.0, 7.5));
        assert_eq!(k.coord, dvec2(-3.0, 9.5));
        assert!((k.fore_offset() - fore).length() < 1e-12);
        assert!((k.rear_offset() - rear).length() < 1e-12);
    }

    #[test]
    fn test_scale_componentwise() {
        let mut k = sample2();
        k.scale(dvec2(2.0, -1.0));
        assert_eq!(k.to_array(), vec![2.0, -2.0, 6.0, -4.0, 10.0, -6.0]);
    }

    #[test]
    fn test_equality_is_fieldwise() {
        let a = sample2();
        let mut b = sample2();
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
        b.rear_handle.y += 1e-9;
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_ignores_colliding_hash() {
        let a = Knot2::new_straight(dvec2(1.0, 0.0));
        let b = Knot2::new_straight(dvec2(f64::from_bits(0x3FF0_0000), 0.0));
        assert_eq!(a.hash_code(), b.hash_code());
        assert_ne!(a, b);
    }

    #[test]
    fn test_approx_eq_within_linear_tolerance() {
        let a = sample2();
        let mut b = a;
        b.fore_handle.x += 1e-9;
        assert_ne!(a, b);
        assert!(a.approx_eq(&b, Tolerance::default()));
        b.rear_handle.y -= 1e-3;
        assert!(!a.approx_eq(&b, Tolerance::default()));
        assert!(a.approx_eq(&b, Tolerance::new(1e-2)));
    }

    #[test]
    fn test_hash_code_ignores_zero_sign() {
        let a = Knot2::new_straight(dvec2(0.0, 1.0));
        let b = Knot2::new_straight(dvec2(-0.0, 1.0));
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn test_hash_code_distinguishes_handle_roles() {
        let a = sample2();
        let mut b = a;
        b.reverse();
        assert_ne!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn test_lerp() {
        let a = Knot2::new_straight(dvec2(0.0, 0.0));
        let b = Knot2::new_straight(dvec2(2.0, 4.0));
        assert_eq!(Knot2::lerp(&a, &b, 0.5).coord, dvec2(1.0, 2.0));
    }
}
