mod parse;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, info, Level};
use tracing_subscriber::fmt::SubscriberBuilder;
use twod::{cfg, GeomCfg, Line, Planar, Point, Rect, Winding};

#[derive(Parser)]
#[command(name = "twod")]
#[command(about = "Query the 2D geometry kernel from the command line")]
struct Cmd {
    /// Log verbosity: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Below this |det| two segments count as parallel
    #[arg(long, global = true, default_value_t = cfg::EPS_DET)]
    eps_det: f64,

    /// Threshold for the parallel/perpendicular ratio tests
    #[arg(long, global = true, default_value_t = cfg::EPS_ANGLE)]
    eps_angle: f64,

    /// Distance tolerance for on-segment checks
    #[arg(long, global = true, default_value_t = cfg::EPS_CONTAINS)]
    tolerance: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Cartesian and polar views of a point
    Point {
        #[arg(allow_hyphen_values = true)]
        p: String,
    },
    /// Winding of the ordered triple a→b→c
    Orient {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
        #[arg(allow_hyphen_values = true)]
        c: String,
    },
    /// Intersection of segments AB and CD
    Intersect {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
        #[arg(allow_hyphen_values = true)]
        c: String,
        #[arg(allow_hyphen_values = true)]
        d: String,
    },
    /// Closest point to P on segment AB
    Closest {
        #[arg(allow_hyphen_values = true)]
        p: String,
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Derived measures of a rectangle given as x,y,w,h
    Rect {
        #[arg(allow_hyphen_values = true)]
        rect: String,
        /// Also report whether this point is strictly inside
        #[arg(long, allow_hyphen_values = true)]
        point: Option<String>,
    },
}

impl Cmd {
    fn geom_cfg(&self) -> GeomCfg {
        GeomCfg {
            eps_det: self.eps_det,
            eps_angle: self.eps_angle,
            eps_contains: self.tolerance,
        }
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level())
        .with_writer(std::io::stderr)
        .init();
    for line in run(&cmd)? {
        println!("{line}");
    }
    Ok(())
}

fn run(cmd: &Cmd) -> Result<Vec<String>> {
    let geom = cmd.geom_cfg();
    debug!(?geom, "tolerances");
    match &cmd.action {
        Action::Point { p } => Ok(point_report(parse::point(p)?)),
        Action::Orient { a, b, c } => Ok(orient_report(
            parse::point(a)?,
            parse::point(b)?,
            parse::point(c)?,
        )),
        Action::Intersect { a, b, c, d } => {
            let first = Line::new(parse::point(a)?, parse::point(b)?);
            let second = Line::new(parse::point(c)?, parse::point(d)?);
            Ok(intersect_report(&first, &second, geom))
        }
        Action::Closest { p, a, b } => {
            let line = Line::new(parse::point(a)?, parse::point(b)?);
            Ok(closest_report(parse::point(p)?, &line, geom))
        }
        Action::Rect { rect, point } => {
            let inside = point.as_deref().map(parse::point).transpose()?;
            Ok(rect_report(&parse::rect(rect)?, inside))
        }
    }
}

fn point_report(p: Point) -> Vec<String> {
    info!(%p, "point");
    let (r, theta) = p.polar();
    debug!(r, theta, "polar");
    vec![
        format!("cartesian: {p}"),
        format!("radius: {r:?}"),
        format!("radians: {theta:?}"),
        format!("degrees: {:?}", p.degrees()),
        format!("quadrant: {}", p.quadrant()),
    ]
}

fn orient_report(a: Point, b: Point, c: Point) -> Vec<String> {
    info!(%a, %b, %c, "orient");
    let value = a.ccw(&b, &c);
    let winding = Winding::from_ccw(value);
    debug!(value, %winding, "ccw");
    vec![format!("ccw: {value:?}"), format!("winding: {winding}")]
}

fn intersect_report(first: &Line, second: &Line, geom: GeomCfg) -> Vec<String> {
    info!(first.start = %first.start, first.end = %first.end,
        second.start = %second.start, second.end = %second.end, "intersect");
    let hit = first.intersection_point_cfg(second, geom);
    debug!(
        det = twod::orient::wedge(&first.vector(), &second.vector()),
        "direction determinant"
    );
    vec![
        match hit {
            Some(p) => format!("intersection: {p}"),
            None => "intersection: none".to_string(),
        },
        format!("parallel: {}", first.parallel_to_cfg(second, geom)),
        format!("perpendicular: {}", first.perpendicular_to_cfg(second, geom)),
        format!("angle: {:?}", first.angle_between(second).to_degrees()),
    ]
}

fn closest_report(p: Point, line: &Line, geom: GeomCfg) -> Vec<String> {
    info!(%p, start = %line.start, end = %line.end, "closest");
    let q = line.closest_point_on_line(p);
    let distance = line.distance_to_point(p);
    debug!(%q, distance, "projection");
    vec![
        format!("closest: {q}"),
        format!("distance: {distance:?}"),
        format!("on segment: {}", line.contains_point_cfg(p, geom)),
    ]
}

fn rect_report(rect: &Rect, point: Option<Point>) -> Vec<String> {
    info!(%rect, "rect");
    let vertices = rect
        .vertices()
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let mut out = vec![
        format!("vertices: {vertices}"),
        format!("sides: {:?}", rect.sides()),
        format!("perimeter: {:?}", rect.perimeter()),
        format!("area: {:?}", rect.area()),
        format!("center: {}", rect.center()),
    ];
    if let Some(p) = point {
        let inside = rect.contains_point(p);
        debug!(%p, inside, "containment");
        out.push(format!("contains {p}: {inside}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn run_args(args: &[&str]) -> Result<Vec<String>> {
        let cmd = Cmd::try_parse_from(std::iter::once("twod").chain(args.iter().copied()))?;
        run(&cmd)
    }

    #[test]
    fn command_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn flags_build_tolerances() {
        let cmd = Cmd::try_parse_from(["twod", "-vv", "point", "1,1", "--eps-det", "0.5"]).unwrap();
        assert_eq!(cmd.log_level(), Level::DEBUG);
        let geom = cmd.geom_cfg();
        assert_eq!(geom.eps_det, 0.5);
        assert_eq!(geom.eps_angle, cfg::EPS_ANGLE);
        assert_eq!(geom.eps_contains, cfg::EPS_CONTAINS);
    }

    #[test]
    fn point_command() {
        let out = run_args(&["point", "x=-3,y=4"]).unwrap();
        assert_eq!(out[0], "cartesian: Point(x=-3.0, y=4.0)");
        assert_eq!(out[1], "radius: 5.0");
        assert_eq!(out[4], "quadrant: II");
    }

    #[test]
    fn orient_command() {
        let out = run_args(&["orient", "0,0", "1,0", "0,1"]).unwrap();
        assert_eq!(out, vec!["ccw: 1.0", "winding: ccw"]);
        let out = run_args(&["orient", "0,0", "1,1", "2,2"]).unwrap();
        assert_eq!(out[1], "winding: colinear");
    }

    #[test]
    fn intersect_command() {
        let out = run_args(&["intersect", "0,0", "2,2", "0,2", "2,0"]).unwrap();
        assert_eq!(out[0], "intersection: Point(x=1.0, y=1.0)");
        assert_eq!(out[1], "parallel: false");
        assert_eq!(out[2], "perpendicular: true");
        let out = run_args(&["intersect", "0,0", "1,0", "0,1", "1,1"]).unwrap();
        assert_eq!(out[0], "intersection: none");
        assert_eq!(out[1], "parallel: true");
    }

    #[test]
    fn closest_command_uses_tolerance() {
        let out = run_args(&["closest", "2,3", "0,0", "4,0"]).unwrap();
        assert_eq!(out[0], "closest: Point(x=2.0, y=0.0)");
        assert_eq!(out[1], "distance: 3.0");
        assert_eq!(out[2], "on segment: false");
        let out = run_args(&["closest", "2,3", "0,0", "4,0", "--tolerance", "3"]).unwrap();
        assert_eq!(out[2], "on segment: true");
    }

    #[test]
    fn rect_command() {
        let out = run_args(&["rect", "0,0,2,2", "--point", "1,1"]).unwrap();
        assert_eq!(out[1], "sides: [2.0, 2.0, 2.0, 2.0]");
        assert_eq!(out[2], "perimeter: 8.0");
        assert_eq!(out[3], "area: 4.0");
        assert_eq!(out[4], "center: Point(x=1.0, y=1.0)");
        assert_eq!(out[5], "contains Point(x=1.0, y=1.0): true");
        assert_eq!(run_args(&["rect", "x=0,y=0,w=1,h=1"]).unwrap().len(), 5);
    }

    #[test]
    fn bad_input_is_an_error() {
        assert!(run_args(&["point", "nope"]).is_err());
        assert!(run_args(&["rect", "1,2"]).is_err());
    }
}
