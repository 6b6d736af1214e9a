use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;
use trilocate::{Location, Point, Triangle};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Locate points relative to a triangle")]
struct Cmd {
    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Classify the fixed sample points against the fixed triangle (default)
    Demo,
    /// Classify user-supplied points
    Locate {
        /// Triangle vertices as "ax,ay;bx,by;cx,cy"
        #[arg(long)]
        tri: String,
        /// Query point as "x,y"; repeatable
        #[arg(long = "point", required = true)]
        points: Vec<String>,
    },
    /// Print version, tolerance and demo results as JSON
    Report,
}

const DEMO_TRIANGLE: [(f64, f64); 3] = [(0.0, 0.0), (5.0, 0.0), (1.0, 4.0)];
const DEMO_POINTS: [(f64, f64); 5] = [
    (1.0, 1.0),
    (5.0, 0.0),
    (3.0, 0.0),
    (4.0, 2.0),
    (-1.0, 0.0),
];

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action.unwrap_or(Action::Demo) {
        Action::Demo => demo(),
        Action::Locate { tri, points } => locate(&tri, &points),
        Action::Report => report(),
    }
}

fn demo_triangle() -> Triangle {
    let [a, b, c] = DEMO_TRIANGLE.map(Point::from);
    Triangle::new(a, b, c)
}

fn demo_points() -> Vec<Point> {
    DEMO_POINTS.iter().copied().map(Point::from).collect()
}

fn render_line(p: Point, loc: Location) -> String {
    format!("Point {p} is {loc} the triangle")
}

fn render(tri: &Triangle, points: &[Point]) -> Vec<String> {
    points
        .iter()
        .map(|&p| {
            let loc = tri.location(p);
            tracing::debug!(x = p.x, y = p.y, location = loc.as_str(), "classified");
            render_line(p, loc)
        })
        .collect()
}

fn demo() -> Result<()> {
    for line in render(&demo_triangle(), &demo_points()) {
        println!("{line}");
    }
    Ok(())
}

fn locate(tri: &str, points: &[String]) -> Result<()> {
    let tri = parse_triangle(tri)?;
    let points = points
        .iter()
        .map(|s| parse_point(s))
        .collect::<Result<Vec<_>>>()?;
    if tri.is_degenerate() {
        tracing::warn!(area2 = tri.signed_area2(), "degenerate triangle");
    }
    tracing::info!(points = points.len(), "locate");
    for line in render(&tri, &points) {
        println!("{line}");
    }
    Ok(())
}

/// Parse `"x,y"` (surrounding whitespace allowed).
fn parse_point(s: &str) -> Result<Point> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y] = parts.as_slice() else {
        bail!("expected point as \"x,y\", got {s:?}");
    };
    let x: f64 = x
        .parse()
        .with_context(|| format!("parsing x coordinate of {s:?}"))?;
    let y: f64 = y
        .parse()
        .with_context(|| format!("parsing y coordinate of {s:?}"))?;
    Ok(Point::new(x, y))
}

/// Parse `"ax,ay;bx,by;cx,cy"`.
fn parse_triangle(s: &str) -> Result<Triangle> {
    let verts = s
        .split(';')
        .map(parse_point)
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("parsing triangle {s:?}"))?;
    let [a, b, c] = verts.as_slice() else {
        bail!("expected 3 vertices separated by ';', got {}", verts.len());
    };
    Ok(Triangle::from([*a, *b, *c]))
}

#[derive(Serialize)]
struct PointReport {
    x: f64,
    y: f64,
    location: &'static str,
    contains: bool,
}

#[derive(Serialize)]
struct Report {
    version: &'static str,
    eps: f64,
    triangle: [[f64; 2]; 3],
    results: Vec<PointReport>,
}

fn build_report() -> Report {
    let tri = demo_triangle();
    let results = demo_points()
        .into_iter()
        .map(|p| PointReport {
            x: p.x,
            y: p.y,
            location: tri.location(p).as_str(),
            contains: tri.contains(p),
        })
        .collect();
    Report {
        version: trilocate::VERSION,
        eps: trilocate::EPS,
        triangle: tri.vertices().map(|v| [v.x, v.y]),
        results,
    }
}

fn report() -> Result<()> {
    let obj = build_report();
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_lines_match_expected_output() {
        let lines = render(&demo_triangle(), &demo_points());
        assert_eq!(
            lines,
            vec![
                "Point Point(x=1.0, y=1.0) is inside the triangle",
                "Point Point(x=5.0, y=0.0) is on edge the triangle",
                "Point Point(x=3.0, y=0.0) is on edge the triangle",
                "Point Point(x=4.0, y=2.0) is outside the triangle",
                "Point Point(x=-1.0, y=0.0) is outside the triangle",
            ]
        );
    }

    #[test]
    fn parse_point_accepts_whitespace_and_rejects_garbage() {
        assert_eq!(parse_point(" 1.5 , -2 ").unwrap(), Point::new(1.5, -2.0));
        assert!(parse_point("1").is_err());
        assert!(parse_point("1,2,3").is_err());
        assert!(parse_point("a,2").is_err());
    }

    #[test]
    fn parse_triangle_requires_three_vertices() {
        let tri = parse_triangle("0,0;5,0;1,4").unwrap();
        assert_eq!(tri, demo_triangle());
        assert!(parse_triangle("0,0;5,0").is_err());
        assert!(parse_triangle("0,0;5,0;1,x").is_err());
    }

    #[test]
    fn locate_lines_use_exponent_form_for_extreme_coordinates() {
        let tri = parse_triangle("0,0;5,0;1,4").unwrap();
        let p = parse_point("1e7,1e-4").unwrap();
        assert_eq!(
            render(&tri, &[p]),
            vec!["Point Point(x=1.0E7, y=1.0E-4) is outside the triangle"]
        );
    }

    #[test]
    fn report_serializes_demo_results() {
        let v = serde_json::to_value(build_report()).unwrap();
        assert_eq!(v["eps"], 1e-12);
        assert_eq!(v["results"].as_array().unwrap().len(), 5);
        assert_eq!(v["results"][0]["location"], "inside");
        assert_eq!(v["results"][1]["location"], "on edge");
        assert_eq!(v["results"][3]["contains"], false);
    }

    #[test]
    fn cli_defaults_to_demo() {
        let cmd = Cmd::try_parse_from(["cli"]).unwrap();
        assert!(cmd.action.is_none());
        let cmd = Cmd::try_parse_from([
            "cli", "locate", "--tri", "0,0;1,0;0,1", "--point", "0.2,0.2",
        ])
        .unwrap();
        assert!(matches!(cmd.action, Some(Action::Locate { .. })));
    }
}
