//! Fixed-precision text and JSON dumps of knots and curves.
//!
//! These are debug/export formats. The JSON dump uses the camel-case keys
//! `closedLoop`, `knots`, `coord`, `foreHandle` and `rearHandle`; the serde
//! derives on the types themselves are the structured alternative.

use std::fmt::{self, Display, Write};

use knotwork_math::CurveVector;

use crate::curve::Curve;
use crate::knot::Knot;

/// Decimal places used by `Display` when the formatter sets no precision.
pub const DEFAULT_PRECISION: usize = 4;

const AXES: [&str; 3] = ["x", "y", "z"];

fn write_vector_text<V: CurveVector>(out: &mut impl Write, v: V, precision: usize) -> fmt::Result {
    out.write_char('(')?;
    for i in 0..V::DIM {
        if i > 0 {
            out.write_str(", ")?;
        }
        write!(out, "{:.*}", precision, v.component(i))?;
    }
    out.write_char(')')
}

fn write_knot_text<V: CurveVector>(out: &mut impl Write, knot: &Knot<V>, precision: usize) -> fmt::Result {
    out.write_str("{ coord: ")?;
    write_vector_text(out, knot.coord, precision)?;
    out.write_str(", foreHandle: ")?;
    write_vector_text(out, knot.fore_handle, precision)?;
    out.write_str(", rearHandle: ")?;
    write_vector_text(out, knot.rear_handle, precision)?;
    out.write_str(" }")
}

fn write_curve_text<V: CurveVector>(out: &mut impl Write, curve: &Curve<V>, precision: usize) -> fmt::Result {
    write!(out, "{{ closedLoop: {}, knots: [ ", curve.closed_loop)?;
    for (i, knot) in curve.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_knot_text(out, knot, precision)?;
    }
    out.write_str(" ] }")
}

/// Non-finite components have no JSON number form and are written as `null`.
fn write_json_number(out: &mut impl Write, value: f64, precision: usize) -> fmt::Result {
    if value.is_finite() {
        write!(out, "{:.*}", precision, value)
    } else {
        out.write_str("null")
    }
}

fn write_vector_json<V: CurveVector>(out: &mut impl Write, v: V, precision: usize) -> fmt::Result {
    out.write_char('{')?;
    for (i, axis) in AXES.iter().take(V::DIM).enumerate() {
        if i > 0 {
            out.write_char(',')?;
        }
        write!(out, "\"{}\":", axis)?;
        write_json_number(out, v.component(i), precision)?;
    }
    out.write_char('}')
}

fn write_knot_json<V: CurveVector>(out: &mut impl Write, knot: &Knot<V>, precision: usize) -> fmt::Result {
    out.write_str("{\"coord\":")?;
    write_vector_json(out, knot.coord, precision)?;
    out.write_str(",\"foreHandle\":")?;
    write_vector_json(out, knot.fore_handle, precision)?;
    out.write_str(",\"rearHandle\":")?;
    write_vector_json(out, knot.rear_handle, precision)?;
    out.write_char('}')
}

fn write_curve_json<V: CurveVector>(out: &mut impl Write, curve: &Curve<V>, precision: usize) -> fmt::Result {
    write!(out, "{{\"closedLoop\":{},\"knots\":[", curve.closed_loop)?;
    for (i, knot) in curve.iter().enumerate() {
        if i > 0 {
            out.write_char(',')?;
        }
        write_knot_json(out, knot, precision)?;
    }
    out.write_str("]}")
}

impl<V: CurveVector> Knot<V> {
    pub fn to_string_with_precision(&self, precision: usize) -> String {
        let mut out = String::new();
        let _ = write_knot_text(&mut out, self, precision);
        out
    }

    pub fn to_json_string(&self, precision: usize) -> String {
        let mut out = String::new();
        let _ = write_knot_json(&mut out, self, precision);
        out
    }
}

impl<V: CurveVector> Curve<V> {
    pub fn to_string_with_precision(&self, precision: usize) -> String {
        let mut out = String::new();
        let _ = write_curve_text(&mut out, self, precision);
        out
    }

    /// `{"closedLoop":<bool>,"knots":[...]}` with every component written
    /// to `precision` decimal places.
    pub fn to_json_string(&self, precision: usize) -> String {
        let mut out = String::new();
        let _ = write_curve_json(&mut out, self, precision);
        out
    }
}

/// Honors the formatter's precision, e.g. `format!("{:.2}", knot)`.
impl<V: CurveVector> Display for Knot<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        write_knot_text(f, self, precision)
    }
}

/// Honors the formatter's precision, e.g. `format!("{:.2}", curve)`.
impl<V: CurveVector> Display for Curve<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        write_curve_text(f, self, precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{Curve2, Curve3};
    use crate::knot::Knot2;
    use knotwork_math::dvec2;

    fn knot() -> Knot2 {
        Knot2::new(dvec2(-0.5, 0.0), dvec2(-0.25, 0.25), dvec2(-0.75, -0.25))
    }

    #[test]
    fn test_knot_text() {
        assert_eq!(
            knot().to_string_with_precision(2),
            "{ coord: (-0.50, 0.00), foreHandle: (-0.25, 0.25), rearHandle: (-0.75, -0.25) }"
        );
        assert_eq!(format!("{:.1}", knot()), knot().to_string_with_precision(1));
        assert_eq!(knot().to_string(), knot().to_string_with_precision(DEFAULT_PRECISION));
    }

    #[test]
    fn test_knot_json() {
        assert_eq!(
            knot().to_json_string(2),
            r#"{"coord":{"x":-0.50,"y":0.00},"foreHandle":{"x":-0.25,"y":0.25},"rearHandle":{"x":-0.75,"y":-0.25}}"#
        );
    }

    #[test]
    fn test_curve_json_shape() {
        let curve = Curve2::new(true, vec![knot()]);
        let json = curve.to_json_string(3);
        assert!(json.starts_with(r#"{"closedLoop":true,"knots":[{"coord":{"x":-0.500,"y":0.000}"#));
        assert!(json.ends_with("]}"));
        assert_eq!(Curve2::default().to_json_string(2), r#"{"closedLoop":false,"knots":[]}"#);
    }

    #[test]
    fn test_curve_json_3d_has_z() {
        let curve = Curve3::from(Curve2::new(false, vec![knot()]));
        assert!(curve.to_json_string(1).contains(r#"{"x":-0.5,"y":0.0,"z":0.0}"#));
    }

    #[test]
    fn test_curve_text() {
        let curve = Curve2::new(false, vec![knot(), knot()]);
        let text = format!("{:.1}", curve);
        assert!(text.starts_with("{ closedLoop: false, knots: [ { coord: (-0.5, 0.0)"));
        assert_eq!(text.matches("coord").count(), 2);
    }

    #[test]
    fn test_non_finite_json_is_null() {
        let mut k = knot();
        k.coord.x = f64::INFINITY;
        assert!(k.to_json_string(2).starts_with(r#"{"coord":{"x":null,"y":0.00}"#));
    }
}
