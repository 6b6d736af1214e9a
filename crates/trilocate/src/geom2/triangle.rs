//! Point-in-triangle classification by barycentric signs.
//!
//! Model
//! - For a query point `p`, the three sub-triangle signed double-areas
//!   `A1 = [p,b,c]`, `A2 = [a,p,c]`, `A3 = [a,b,p]` are the barycentric
//!   coordinates of `p` scaled by `[a,b,c]`. The point is inside or on the
//!   boundary iff they never take both strictly positive and strictly
//!   negative values (beyond `EPS`).
//! - Degeneracy (`|[a,b,c]| < EPS`) is detected per query, not at
//!   construction. Degenerate triangles contain nothing.
//!
//! eps policy
//! - Sign tests are strict (`Ai < -EPS`, `Ai > EPS`); the edge test is closed
//!   (`|Ai| <= EPS`). The edge test only looks at the supporting line, so
//!   `Outside` must win over `OnEdge`.

use std::fmt;

use super::cfg::EPS;
use super::types::Point;
use super::util::area2;

/// Where a point sits relative to a triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    /// The triangle encloses (near) zero area; no classification attempted.
    Degenerate,
    Outside,
    /// On the supporting line of at least one edge and not outside.
    OnEdge,
    Inside,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Degenerate => "degenerate",
            Location::Outside => "outside",
            Location::OnEdge => "on edge",
            Location::Inside => "inside",
        }
    }

    /// True for the outcomes counted as containment (`Inside`, `OnEdge`).
    #[inline]
    pub fn is_contained(&self) -> bool {
        matches!(self, Location::Inside | Location::OnEdge)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Triangle with vertices `a, b, c` in the given order (either orientation).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

/// Sign summary of the sub-areas of one query.
#[derive(Clone, Copy, Debug)]
struct Signs {
    has_neg: bool,
    has_pos: bool,
    on_edge: bool,
}

impl Signs {
    #[inline]
    fn of(areas: [f64; 3]) -> Self {
        Self {
            has_neg: areas.iter().any(|&s| s < -EPS),
            has_pos: areas.iter().any(|&s| s > EPS),
            on_edge: areas.iter().any(|&s| s.abs() <= EPS),
        }
    }

    #[inline]
    fn straddles(&self) -> bool {
        self.has_neg && self.has_pos
    }
}

impl Triangle {
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// Twice the signed area; positive when `a, b, c` is counterclockwise.
    #[inline]
    pub fn signed_area2(&self) -> f64 {
        area2(self.a, self.b, self.c)
    }

    /// Vertices collinear or coincident (within `EPS` on the double-area).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.signed_area2().abs() < EPS
    }

    /// Unnormalized barycentric coordinates `[A1, A2, A3]` of `p`.
    ///
    /// Each entry replaces one vertex by `p`; they sum to `signed_area2()`
    /// up to rounding.
    #[inline]
    pub fn sub_areas(&self, p: Point) -> [f64; 3] {
        [
            area2(p, self.b, self.c),
            area2(self.a, p, self.c),
            area2(self.a, self.b, p),
        ]
    }

    /// Closed containment: inside or on the boundary. Degenerate → `false`.
    pub fn contains(&self, p: Point) -> bool {
        if self.is_degenerate() {
            return false;
        }
        !Signs::of(self.sub_areas(p)).straddles()
    }

    /// Four-way classification. `Outside` is decided before `OnEdge`.
    pub fn location(&self, p: Point) -> Location {
        if self.is_degenerate() {
            return Location::Degenerate;
        }
        let signs = Signs::of(self.sub_areas(p));
        if signs.straddles() {
            Location::Outside
        } else if signs.on_edge {
            Location::OnEdge
        } else {
            Location::Inside
        }
    }

    /// Arithmetic mean of the vertices.
    #[inline]
    pub fn centroid(&self) -> Point {
        Point::new(
            (self.a.x + self.b.x + self.c.x) / 3.0,
            (self.a.y + self.b.y + self.c.y) / 3.0,
        )
    }

    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }
}

impl From<[Point; 3]> for Triangle {
    #[inline]
    fn from([a, b, c]: [Point; 3]) -> Self {
        Triangle::new(a, b, c)
    }
}
