use knotwork_math::DVec2;

use super::Knot2;

impl Knot2 {
    /// A knot on a circle of `radius` about the origin at `radians`, with
    /// handles tangent to the circle at distance `handle_magnitude`.
    ///
    /// The fore handle points counter-clockwise.
    pub fn from_polar(radians: f64, radius: f64, handle_magnitude: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::from_polar_cs(cos, sin, radius, handle_magnitude)
    }

    /// [`Knot2::from_polar`] with a precomputed `(cos, sin)` pair.
    pub fn from_polar_cs(cos: f64, sin: f64, radius: f64, handle_magnitude: f64) -> Self {
        let coord = DVec2::new(cos * radius, sin * radius);
        let tangent = DVec2::new(-sin, cos) * handle_magnitude;
        Self::new(coord, coord + tangent, coord - tangent)
    }

    /// Rotate about the origin, counter-clockwise.
    pub fn rotate(&mut self, radians: f64) {
        self.rotate_z(radians);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knotwork_math::dvec2;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_from_polar_on_circle() {
        let k = Knot2::from_polar(FRAC_PI_2, 2.0, 0.5);
        assert!((k.coord - dvec2(0.0, 2.0)).length() < 1e-12);
        assert!((k.fore_handle - dvec2(-0.5, 2.0)).length() < 1e-12);
        assert!((k.rear_handle - dvec2(0.5, 2.0)).length() < 1e-12);
        // Handles are tangent: perpendicular to the radius
        assert!(k.fore_offset().dot(k.coord).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_half_turn() {
        let mut k = Knot2::new(dvec2(1.0, 0.0), dvec2(1.0, 1.0), dvec2(1.0, -1.0));
        k.rotate(PI);
        assert!((k.coord - dvec2(-1.0, 0.0)).length() < 1e-12);
        assert!((k.fore_handle - dvec2(-1.0, -1.0)).length() < 1e-12);
        assert!((k.rear_handle - dvec2(-1.0, 1.0)).length() < 1e-12);
    }
}
