use std::f64::consts::{FRAC_PI_2, TAU};

use knotwork_math::{DVec2, Transform2};

use super::Curve2;
use crate::knot::Knot2;

impl Curve2 {
    /// Closed Bezier approximation of a circle about the origin.
    ///
    /// Uses at least 3 sectors. Handles have length
    /// `4/3 · tan(π / (2 · sectors)) · radius`, the standard cubic
    /// approximation of a circular arc.
    pub fn circle(sectors: usize, radius: f64, offset_radians: f64) -> Self {
        let n = sectors.max(3);
        let step = TAU / n as f64;
        let handle = (4.0 / 3.0) * (FRAC_PI_2 / n as f64).tan() * radius;
        log::trace!("circle: {} sectors, radius {}, handle {}", n, radius, handle);
        let knots = (0..n)
            .map(|i| Knot2::from_polar(offset_radians + step * i as f64, radius, handle))
            .collect();
        Self::new(true, knots)
    }

    /// Closed regular polygon with straight edges, vertices on a circle of
    /// `radius` about the origin. Uses at least 3 sides.
    pub fn polygon(sides: usize, radius: f64, offset_radians: f64) -> Self {
        let n = sides.max(3);
        let step = TAU / n as f64;
        let points: Vec<DVec2> = (0..n)
            .map(|i| {
                let (sin, cos) = (offset_radians + step * i as f64).sin_cos();
                DVec2::new(cos, sin) * radius
            })
            .collect();
        Self::from_points(true, &points)
    }

    /// Rotate about the origin, counter-clockwise.
    pub fn rotate(&mut self, radians: f64) {
        self.rotate_z(radians);
    }

    /// Scale, rotate, then translate every knot.
    pub fn apply_transform(&mut self, transform: &Transform2) {
        self.scale(transform.scale);
        self.rotate_z(transform.rotation);
        self.translate(transform.location);
    }
}
