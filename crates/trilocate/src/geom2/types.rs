//! Basic 2D value types.
//!
//! - `Point`: immutable coordinate pair; differences of points are vectors.
//!
//! Interop
//! - `Point` converts to and from `nalgebra::Vector2<f64>` so callers that
//!   already hold nalgebra vectors can query triangles without copying fields.

use std::fmt;
use std::ops::Sub;

use nalgebra::Vector2;

/// Point (or vector) in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// `p - q` is the vector from `q` to `p`.
impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Self::Output {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// Shortest round-trip decimal for one coordinate.
///
/// Plain notation with at least one fractional digit for magnitudes in
/// `[1e-3, 1e7)` and for zero; otherwise `<mantissa>E<exp>` with the same
/// fractional-digit rule (`1.0E7`, `-2.5E-5`).
fn fmt_coord(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        let s = if v > 0.0 { "Infinity" } else { "-Infinity" };
        return s.to_string();
    }
    let mag = v.abs();
    if v == 0.0 || (1e-3..1e7).contains(&mag) {
        let mut s = v.to_string();
        if !s.contains('.') {
            s.push_str(".0");
        }
        return s;
    }
    let sci = format!("{v:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) if mantissa.contains('.') => format!("{mantissa}E{exp}"),
        Some((mantissa, exp)) => format!("{mantissa}.0E{exp}"),
        None => sci,
    }
}

/// Renders `Point(x=1.0, y=-0.5)`; large and tiny coordinates use `E` notation.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point(x={}, y={})", fmt_coord(self.x), fmt_coord(self.y))
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}
