//! 2D point-in-triangle predicates.
//!
//! Purpose
//! - Classify a point against a triangle (inside, on an edge line, outside)
//!   from the signs of sub-triangle signed areas.
//! - Keep everything pure and `Copy`; one fixed absolute tolerance (`EPS`).
//!
//! Layout
//! - `types`: `Point`.
//! - `util`: `cross`, `area2`.
//! - `triangle`: `Triangle`, `Location`.
//! - `rand`: seeded samplers for tests and benches.

mod cfg;
pub mod rand;
mod triangle;
mod types;
mod util;

pub use cfg::EPS;
pub use triangle::{Location, Triangle};
pub use types::Point;
pub use util::{area2, cross};
