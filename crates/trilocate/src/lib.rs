//! Point-in-triangle location in the plane.
//!
//! A point is classified against a triangle from the signs of three
//! sub-triangle signed areas (unnormalized barycentric coordinates), with a
//! fixed absolute tolerance for degeneracy and edge hits.
//!
//! API Policy
//! - All queries are total and pure. Degenerate triangles are a reported
//!   outcome (`Location::Degenerate`), never an error.

pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{area2, cross, Location, Point, Triangle, EPS};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_point, draw_point_in_triangle, draw_triangle, Bounds2};
    pub use crate::geom2::{Location, Point, Triangle, EPS};
}
