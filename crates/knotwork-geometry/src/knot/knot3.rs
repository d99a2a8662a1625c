use knotwork_math::{rotation, DQuat, DVec3};

use super::{Knot2, Knot3};

impl Knot3 {
    pub fn rotate_x(&mut self, radians: f64) {
        let (sin, cos) = radians.sin_cos();
        self.rotate_x_cs(cos, sin);
    }

    pub fn rotate_x_cs(&mut self, cos: f64, sin: f64) {
        self.map(|v| rotation::rotate_x(v, cos, sin));
    }

    pub fn rotate_y(&mut self, radians: f64) {
        let (sin, cos) = radians.sin_cos();
        self.rotate_y_cs(cos, sin);
    }

    pub fn rotate_y_cs(&mut self, cos: f64, sin: f64) {
        self.map(|v| rotation::rotate_y(v, cos, sin));
    }

    /// Rotate about an arbitrary axis through the origin.
    pub fn rotate(&mut self, radians: f64, axis: DVec3) {
        let (sin, cos) = radians.sin_cos();
        self.rotate_cs(cos, sin, axis);
    }

    pub fn rotate_cs(&mut self, cos: f64, sin: f64, axis: DVec3) {
        self.map(|v| rotation::rotate_axis(v, cos, sin, axis));
    }

    pub fn rotate_quat(&mut self, q: DQuat) {
        self.map(|v| q * v);
    }
}

impl From<Knot2> for Knot3 {
    fn from(k: Knot2) -> Self {
        Self::new(k.coord.extend(0.0), k.fore_handle.extend(0.0), k.rear_handle.extend(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knotwork_math::{dvec2, dvec3};
    use std::f64::consts::{FRAC_PI_2, PI};

    fn sample() -> Knot3 {
        Knot3::new(dvec3(1.0, 0.0, 0.0), dvec3(1.0, 1.0, 0.0), dvec3(1.0, 0.0, 1.0))
    }

    #[test]
    fn test_rotate_z_half_turn() {
        let mut k = sample();
        k.rotate_z(PI);
        assert!((k.coord - dvec3(-1.0, 0.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn test_rotate_x_quarter_turn() {
        let mut k = sample();
        k.rotate_x(FRAC_PI_2);
        assert!((k.coord - dvec3(1.0, 0.0, 0.0)).length() < 1e-12);
        assert!((k.fore_handle - dvec3(1.0, 0.0, 1.0)).length() < 1e-12);
        assert!((k.rear_handle - dvec3(1.0, -1.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_rotate_y_quarter_turn() {
        let mut k = sample();
        k.rotate_y(FRAC_PI_2);
        assert!((k.coord - dvec3(0.0, 0.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn test_rotate_about_z_axis_matches_rotate_z() {
        let mut a = sample();
        let mut b = sample();
        a.rotate(0.83, DVec3::Z);
        b.rotate_z(0.83);
        for i in 0..9 {
            assert!((a.get(i) - b.get(i)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rotate_quat_preserves_handle_lengths() {
        let mut k = sample();
        let (fore, rear) = (k.fore_offset().length(), k.rear_offset().length());
        k.rotate_quat(DQuat::from_axis_angle(dvec3(1.0, 2.0, -0.5).normalize(), 1.3));
        assert!((k.fore_offset().length() - fore).abs() < 1e-12);
        assert!((k.rear_offset().length() - rear).abs() < 1e-12);
    }

    #[test]
    fn test_from_knot2() {
        let k2 = Knot2::new(dvec2(1.0, 2.0), dvec2(3.0, 4.0), dvec2(5.0, 6.0));
        let k3 = Knot3::from(k2);
        assert_eq!(k3.to_array(), vec![1.0, 2.0, 0.0, 3.0, 4.0, 0.0, 5.0, 6.0, 0.0]);
    }
}
