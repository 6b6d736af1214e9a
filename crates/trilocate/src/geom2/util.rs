use super::types::Point;

/// Signed parallelogram area of `u, v` (2D cross product).
#[inline]
pub fn cross(u: Point, v: Point) -> f64 {
    u.x * v.y - u.y * v.x
}

/// Twice the signed area of triangle `(p1, p2, p3)`; positive for CCW order.
#[inline]
pub fn area2(p1: Point, p2: Point, p3: Point) -> f64 {
    cross(p2 - p1, p3 - p1)
}
