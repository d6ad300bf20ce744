use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use geom2d::{Box2D, Point2D, Ray2D};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod compare;
mod output;
mod scene;

#[derive(Parser)]
#[command(name = "geom2d-cli")]
#[command(about = "Evaluate 2D box and ray queries")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Is a point inside the box spanned by two corners?
    Inside {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        min: Point2D,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        max: Point2D,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Point2D,
    },
    /// Do two boxes overlap (touching counts)?
    Overlap {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        a_min: Point2D,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        a_max: Point2D,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        b_min: Point2D,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        b_max: Point2D,
    },
    /// Does a ray hit the box?
    Ray {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        min: Point2D,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        max: Point2D,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        origin: Point2D,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        direction: Point2D,
        #[arg(long, value_enum, default_value_t = Method::Diagonal)]
        method: Method,
    },
    /// Evaluate every query of a JSON scene file
    Scene {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Count where the diagonal and slab ray methods disagree on random samples
    Compare {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10_000)]
        count: u64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Method {
    Diagonal,
    Slab,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Inside { min, max, point } => inside(min, max, point),
        Action::Overlap {
            a_min,
            a_max,
            b_min,
            b_max,
        } => overlap(a_min, a_max, b_min, b_max),
        Action::Ray {
            min,
            max,
            origin,
            direction,
            method,
        } => ray(min, max, origin, direction, method),
        Action::Scene { input, out } => scene::run(&input, out.as_deref()),
        Action::Compare { seed, count, out } => compare::run(seed, count, out.as_deref()),
    }
}

/// Parse `x,y` into a point. Both coordinates must be finite.
fn parse_point(s: &str) -> std::result::Result<Point2D, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    if !x.is_finite() || !y.is_finite() {
        return Err(format!("coordinates must be finite, got `{s}`"));
    }
    Ok(Point2D::new(x, y))
}

fn inside(min: Point2D, max: Point2D, point: Point2D) -> Result<()> {
    let b = Box2D::new(min, max)?;
    let hit = b.contains(point);
    tracing::info!(%b, %point, hit, "inside");
    let obj = serde_json::json!({
        "box": b.to_string(),
        "point": point.to_string(),
        "inside": hit
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn overlap(a_min: Point2D, a_max: Point2D, b_min: Point2D, b_max: Point2D) -> Result<()> {
    let a = Box2D::new(a_min, a_max)?;
    let b = Box2D::new(b_min, b_max)?;
    let hit = a.intersects(&b);
    tracing::info!(%a, %b, hit, "overlap");
    let obj = serde_json::json!({
        "a": a.to_string(),
        "b": b.to_string(),
        "intersects": hit
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn ray(
    min: Point2D,
    max: Point2D,
    origin: Point2D,
    direction: Point2D,
    method: Method,
) -> Result<()> {
    let b = Box2D::new(min, max)?;
    let r = Ray2D::new(origin, direction)?;
    let hit = match method {
        Method::Diagonal => b.intersects_ray(&r),
        Method::Slab => b.intersects_ray_slab(&r),
    };
    tracing::info!(%b, %r, ?method, hit, "ray");
    let obj = serde_json::json!({
        "box": b.to_string(),
        "ray": r.to_string(),
        "method": format!("{method:?}").to_lowercase(),
        "intersects": hit
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
