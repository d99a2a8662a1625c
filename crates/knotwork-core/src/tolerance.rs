/// Comparison threshold for curve geometry.
///
/// Equality of knots and curves is always exact; a `Tolerance` is only
/// consulted by `approx_eq` comparisons and by tessellation to decide when
/// a chord is close enough to the curve.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Linear tolerance for distance comparisons (in model units)
    pub linear: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-7;

    pub fn new(linear: f64) -> Self {
        Self { linear }
    }

    /// Coarse enough for tessellation of screen-space curves.
    pub fn loose() -> Self {
        Self::new(1e-4)
    }

    /// Check if two values are equal within linear tolerance
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.linear
    }

    /// Component-wise linear comparison of two flattened buffers.
    ///
    /// Buffers of different length are never equal.
    pub fn slice_eq(self, a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| self.linear_eq(x, y))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LINEAR)
    }
}
