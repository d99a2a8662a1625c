use knotwork_math::{DQuat, DVec3, Transform3};

use super::{Curve2, Curve3};

impl Curve3 {
    pub fn rotate_x(&mut self, radians: f64) {
        let (sin, cos) = radians.sin_cos();
        for knot in &mut self.knots {
            knot.rotate_x_cs(cos, sin);
        }
    }

    pub fn rotate_y(&mut self, radians: f64) {
        let (sin, cos) = radians.sin_cos();
        for knot in &mut self.knots {
            knot.rotate_y_cs(cos, sin);
        }
    }

    /// Rotate about an arbitrary axis through the origin.
    pub fn rotate(&mut self, radians: f64, axis: DVec3) {
        let (sin, cos) = radians.sin_cos();
        for knot in &mut self.knots {
            knot.rotate_cs(cos, sin, axis);
        }
    }

    pub fn rotate_quat(&mut self, q: DQuat) {
        for knot in &mut self.knots {
            knot.rotate_quat(q);
        }
    }

    /// Scale, rotate, then translate every knot.
    pub fn apply_transform(&mut self, transform: &Transform3) {
        self.scale(transform.scale);
        self.rotate_quat(transform.rotation);
        self.translate(transform.location);
    }
}

impl From<Curve2> for Curve3 {
    fn from(curve: Curve2) -> Self {
        Self::new(curve.closed_loop, curve.knots.into_iter().map(Into::into).collect())
    }
}
