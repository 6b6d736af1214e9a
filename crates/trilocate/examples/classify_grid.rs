//! Print an ASCII map of point locations for the demo triangle.
//!
//! Usage:
//!   cargo run -p trilocate --example classify_grid
//!
//! Legend: `#` inside, `+` on edge, `.` outside.

use trilocate::{Location, Point, Triangle};

fn main() {
    let tri = Triangle::new(
        Point::new(0.0, 0.0),
        Point::new(5.0, 0.0),
        Point::new(1.0, 4.0),
    );
    for y in (-1..=5).rev() {
        let row: String = (-2..=7)
            .map(|x| match tri.location(Point::new(f64::from(x), f64::from(y))) {
                Location::Inside => '#',
                Location::OnEdge => '+',
                Location::Outside => '.',
                Location::Degenerate => '?',
            })
            .collect();
        println!("{y:>3} {row}");
    }
}
