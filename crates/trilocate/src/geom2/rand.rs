//! Random points and triangles in 2D.
//!
//! Purpose
//! - Small deterministic samplers for randomized tests and benchmarks.
//!   Determinism comes from the caller's RNG (use `StdRng::seed_from_u64`).
//!
//! Model
//! - Points are uniform in an axis-aligned box.
//! - Points inside a triangle use the folded unit-square map: draw
//!   `(u, v)` in `[0,1)^2`, reflect when `u + v > 1`, return `a + u(b-a) + v(c-a)`.

use super::triangle::Triangle;
use super::types::Point;
use rand::Rng;

/// Axis-aligned sampling box.
#[derive(Clone, Copy, Debug)]
pub struct Bounds2 {
    pub min: Point,
    pub max: Point,
}

impl Bounds2 {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Square `[-r, r]^2`.
    pub fn centered(r: f64) -> Self {
        Self {
            min: Point::new(-r, -r),
            max: Point::new(r, r),
        }
    }
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self::centered(1.0)
    }
}

#[inline]
fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Uniform point in `bounds` (empty or inverted boxes collapse to `min`).
pub fn draw_point<R: Rng>(rng: &mut R, bounds: Bounds2) -> Point {
    Point::new(
        uniform(rng, bounds.min.x, bounds.max.x),
        uniform(rng, bounds.min.y, bounds.max.y),
    )
}

/// Three independent uniform vertices in `bounds`; may be degenerate.
pub fn draw_triangle<R: Rng>(rng: &mut R, bounds: Bounds2) -> Triangle {
    Triangle::new(
        draw_point(rng, bounds),
        draw_point(rng, bounds),
        draw_point(rng, bounds),
    )
}

/// Uniform point in the closed triangle.
pub fn draw_point_in_triangle<R: Rng>(rng: &mut R, tri: &Triangle) -> Point {
    let mut u: f64 = rng.gen();
    let mut v: f64 = rng.gen();
    if u + v > 1.0 {
        u = 1.0 - u;
        v = 1.0 - v;
    }
    let ab = tri.b - tri.a;
    let ac = tri.c - tri.a;
    Point::new(
        tri.a.x + u * ab.x + v * ac.x,
        tri.a.y + u * ab.y + v * ac.y,
    )
}
