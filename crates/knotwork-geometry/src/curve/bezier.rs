//! Knot sequences with open or closed-loop topology.

use knotwork_core::traits::{BoundingBox, Validate};
use knotwork_core::{KnotworkError, Result, Tolerance};
use knotwork_math::bezier::{cubic_extrema, cubic_point, cubic_tangent_or_chord};
use knotwork_math::{wrap_index, Aabb, CurveVector, DVec2, DVec3};
use serde::{Deserialize, Serialize};

use super::{CurveSample, ParametricCurve};
use crate::knot::Knot;

/// A planar composite Bezier curve.
pub type Curve2 = Curve<DVec2>;
/// A spatial composite Bezier curve.
pub type Curve3 = Curve<DVec3>;

const ONE_THIRD: f64 = 1.0 / 3.0;

/// A piecewise cubic Bezier curve.
///
/// Segment `i` runs from `knots[i]` to `knots[i + 1]`, shaped by the first
/// knot's fore handle and the second knot's rear handle. A closed loop adds
/// a final segment from the last knot back to the first, so it has as many
/// segments as knots; an open curve has one fewer.
///
/// On a closed loop every index is wrapped into range, negative ones
/// included. On an open curve indices are direct and out-of-range access
/// yields `None` or an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Curve<V> {
    pub closed_loop: bool,
    pub knots: Vec<Knot<V>>,
}

impl<V: CurveVector> Curve<V> {
    pub fn new(closed_loop: bool, knots: Vec<Knot<V>>) -> Self {
        Self { closed_loop, knots }
    }

    /// Build from knots laid out back to back as in [`Curve::to_array`].
    ///
    /// Trailing values that do not fill a whole knot are dropped.
    pub fn from_array(closed_loop: bool, values: &[f64]) -> Self {
        let chunks = values.chunks_exact(Knot::<V>::COMPONENTS);
        let leftover = chunks.remainder().len();
        if leftover != 0 {
            log::warn!(
                "Dropping {} trailing values that do not form a whole knot of {} components",
                leftover,
                Knot::<V>::COMPONENTS
            );
        }
        Self::new(closed_loop, chunks.map(Knot::from_slice).collect())
    }

    /// A curve of straight segments through `points`.
    pub fn from_points(closed_loop: bool, points: &[V]) -> Self {
        let mut curve = Self::new(
            closed_loop,
            points.iter().copied().map(Knot::new_straight).collect(),
        );
        curve.straighten_handles();
        curve
    }

    /// A single straight open segment.
    pub fn line(start: V, end: V) -> Self {
        Self::from_points(false, &[start, end])
    }

    /// Every knot's flattened components, in knot order.
    pub fn to_array(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.knots.len() * Knot::<V>::COMPONENTS);
        for knot in &self.knots {
            knot.write_components(&mut out);
        }
        out
    }

    pub fn len(&self) -> usize {
        self.knots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Knot<V>> {
        self.knots.iter()
    }

    /// `len` for a closed loop, `len - 1` for an open curve, never negative.
    pub fn segment_count(&self) -> usize {
        match self.knots.len() {
            0 => 0,
            n if self.closed_loop => n,
            n => n - 1,
        }
    }

    fn resolve(&self, index: isize) -> Option<usize> {
        let len = self.knots.len();
        if self.closed_loop {
            (len > 0).then(|| wrap_index(index, len))
        } else {
            usize::try_from(index).ok().filter(|&i| i < len)
        }
    }

    pub fn get(&self, index: isize) -> Option<&Knot<V>> {
        self.resolve(index).map(|i| &self.knots[i])
    }

    pub fn get_mut(&mut self, index: isize) -> Option<&mut Knot<V>> {
        self.resolve(index).map(|i| &mut self.knots[i])
    }

    pub fn get_first(&self) -> Option<&Knot<V>> {
        self.knots.first()
    }

    pub fn get_last(&self) -> Option<&Knot<V>> {
        self.knots.last()
    }

    /// Insert `knot` so that it ends up at `index`, shifting later knots.
    ///
    /// A closed loop wraps `index` over the current length. An open curve
    /// accepts `0..=len`.
    pub fn insert(&mut self, index: isize, knot: Knot<V>) -> Result<()> {
        let len = self.knots.len();
        let at = if self.closed_loop {
            wrap_index(index, len)
        } else {
            usize::try_from(index)
                .ok()
                .filter(|&i| i <= len)
                .ok_or(KnotworkError::IndexOutOfRange { index, len })?
        };
        self.knots.insert(at, knot);
        Ok(())
    }

    pub fn append(&mut self, knot: Knot<V>) {
        self.knots.push(knot);
    }

    pub fn prepend(&mut self, knot: Knot<V>) {
        self.knots.insert(0, knot);
    }

    pub fn remove_at(&mut self, index: isize) -> Result<Knot<V>> {
        if self.knots.is_empty() {
            return Err(KnotworkError::EmptyCurve);
        }
        let i = self.resolve(index).ok_or(KnotworkError::IndexOutOfRange {
            index,
            len: self.knots.len(),
        })?;
        Ok(self.knots.remove(i))
    }

    pub fn remove_first(&mut self) -> Result<Knot<V>> {
        if self.knots.is_empty() {
            return Err(KnotworkError::EmptyCurve);
        }
        Ok(self.knots.remove(0))
    }

    pub fn remove_last(&mut self) -> Result<Knot<V>> {
        self.knots.pop().ok_or(KnotworkError::EmptyCurve)
    }

    pub fn clear(&mut self) {
        self.knots.clear();
    }

    /// Run the curve the other way: reverse the knot order and swap every
    /// knot's handles.
    pub fn reverse(&mut self) {
        self.knots.reverse();
        for knot in &mut self.knots {
            knot.reverse();
        }
    }

    /// Start point with the unit direction of the first fore handle.
    pub fn eval_first(&self) -> Option<CurveSample<V>> {
        let knot = self.knots.first()?;
        Some(CurveSample::new(knot.coord, knot.fore_offset().normalize_or_zero()))
    }

    /// End point with the unit direction arriving through the last rear
    /// handle.
    pub fn eval_last(&self) -> Option<CurveSample<V>> {
        let knot = self.knots.last()?;
        Some(CurveSample::new(
            knot.coord,
            (knot.coord - knot.rear_handle).normalize_or_zero(),
        ))
    }

    /// Control points `[anchor0, control0, control1, anchor1]` of segment `index`.
    pub fn segment(&self, index: usize) -> Option<[V; 4]> {
        if index >= self.segment_count() {
            return None;
        }
        let from = &self.knots[index];
        let to = &self.knots[(index + 1) % self.knots.len()];
        Some([from.coord, from.fore_handle, to.rear_handle, to.coord])
    }

    /// Evaluate segment `index` at local parameter `u`.
    ///
    /// The tangent is the unnormalized derivative, or the chord when the
    /// derivative vanishes.
    pub fn eval_segment(&self, index: usize, u: f64) -> Option<CurveSample<V>> {
        let [a0, c0, c1, a1] = self.segment(index)?;
        Some(CurveSample::new(
            cubic_point(a0, c0, c1, a1, u),
            cubic_tangent_or_chord(a0, c0, c1, a1, u),
        ))
    }

    /// Evaluate at global parameter `t` in `[0, segment_count]`.
    ///
    /// The integer part selects the segment (clamped into range), the
    /// remainder is the local parameter. A lone knot on an open curve
    /// evaluates to its coordinate with the fore handle's offset as tangent.
    /// Returns `None` only for an empty curve.
    pub fn eval(&self, t: f64) -> Option<CurveSample<V>> {
        let count = self.segment_count();
        if count == 0 {
            let knot = self.knots.first()?;
            return Some(CurveSample::new(knot.coord, knot.fore_offset()));
        }
        let segment = t.floor().clamp(0.0, (count - 1) as f64);
        self.eval_segment(segment as usize, t - segment)
    }

    /// Polyline approximation of the arc length.
    pub fn arc_length(&self, samples_per_segment: usize) -> f64 {
        let steps = samples_per_segment.max(1);
        let mut length = 0.0;
        for i in 0..self.segment_count() {
            let Some([a0, c0, c1, a1]) = self.segment(i) else {
                continue;
            };
            let mut prev = a0;
            for s in 1..=steps {
                let p = cubic_point(a0, c0, c1, a1, s as f64 / steps as f64);
                length += (p - prev).length();
                prev = p;
            }
        }
        length
    }

    /// Move every handle a third of the way toward the neighboring anchor,
    /// making each segment a straight line.
    ///
    /// On an open curve the outward handles of the end knots are mirrored
    /// so the end tangents stay defined.
    pub fn straighten_handles(&mut self) {
        let len = self.knots.len();
        for i in 0..self.segment_count() {
            let j = (i + 1) % len;
            let (a0, a1) = (self.knots[i].coord, self.knots[j].coord);
            self.knots[i].fore_handle = a0.lerp(a1, ONE_THIRD);
            self.knots[j].rear_handle = a1.lerp(a0, ONE_THIRD);
        }
        if !self.closed_loop && len > 1 {
            self.knots[0].mirror_handles_forward();
            self.knots[len - 1].mirror_handles_backward();
        }
    }

    pub fn mirror_handles_forward(&mut self) {
        self.knots.iter_mut().for_each(Knot::mirror_handles_forward);
    }

    pub fn mirror_handles_backward(&mut self) {
        self.knots.iter_mut().for_each(Knot::mirror_handles_backward);
    }

    pub fn align_handles_forward(&mut self) {
        self.knots.iter_mut().for_each(Knot::align_handles_forward);
    }

    pub fn align_handles_backward(&mut self) {
        self.knots.iter_mut().for_each(Knot::align_handles_backward);
    }

    pub fn rotate_z(&mut self, radians: f64) {
        let (sin, cos) = radians.sin_cos();
        for knot in &mut self.knots {
            knot.rotate_z_cs(cos, sin);
        }
    }

    /// Component-wise scale about the origin.
    pub fn scale(&mut self, scale: V) {
        for knot in &mut self.knots {
            knot.scale(scale);
        }
    }

    pub fn scale_uniform(&mut self, scale: f64) {
        for knot in &mut self.knots {
            knot.scale_uniform(scale);
        }
    }

    pub fn translate(&mut self, offset: V) {
        for knot in &mut self.knots {
            knot.translate(offset);
        }
    }

    pub fn is_finite(&self) -> bool {
        self.knots.iter().all(Knot::is_finite)
    }

    /// Same topology and knot count, with every component within
    /// `tolerance.linear`.
    pub fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.closed_loop == other.closed_loop
            && tolerance.slice_eq(&self.to_array(), &other.to_array())
    }
}

impl<V: CurveVector> Extend<Knot<V>> for Curve<V> {
    fn extend<I: IntoIterator<Item = Knot<V>>>(&mut self, iter: I) {
        self.knots.extend(iter);
    }
}

impl<'a, V> IntoIterator for &'a Curve<V> {
    type Item = &'a Knot<V>;
    type IntoIter = std::slice::Iter<'a, Knot<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.knots.iter()
    }
}

impl<V: CurveVector> ParametricCurve for Curve<V> {
    type Vector = V;

    /// The zero vector for an empty curve.
    fn point_at(&self, t: f64) -> V {
        self.eval(t).map_or(V::ZERO, |s| s.point)
    }

    fn tangent_at(&self, t: f64) -> V {
        self.eval(t).map_or(V::ZERO, |s| s.tangent)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, self.segment_count() as f64)
    }

    fn span_count(&self) -> usize {
        self.segment_count()
    }

    fn is_closed(&self) -> bool {
        self.closed_loop
    }
}

impl<V: CurveVector> BoundingBox for Curve<V> {
    type Bounds = Aabb<V>;

    /// Tight bounds of the curve itself, not of its control hull.
    fn bounding_box(&self) -> Option<Aabb<V>> {
        let first = self.knots.first()?;
        let mut bounds = Aabb::new(first.coord, first.coord);
        for i in 0..self.segment_count() {
            let Some([a0, c0, c1, a1]) = self.segment(i) else {
                continue;
            };
            bounds.include(a1);
            for axis in 0..V::DIM {
                let extrema = cubic_extrema(
                    a0.component(axis),
                    c0.component(axis),
                    c1.component(axis),
                    a1.component(axis),
                );
                for u in extrema {
                    bounds.include(cubic_point(a0, c0, c1, a1, u));
                }
            }
        }
        Some(bounds)
    }
}

impl<V: CurveVector> Validate for Curve<V> {
    fn validate(&self) -> Result<()> {
        match self.knots.iter().position(|k| !k.is_finite()) {
            Some(i) => Err(KnotworkError::NonFinite(format!(
                "knot {} has a non-finite component",
                i
            ))),
            None => Ok(()),
        }
    }
}
