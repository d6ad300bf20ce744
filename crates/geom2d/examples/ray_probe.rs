//! Probe a few boxes with rays and print both ray-box methods side by side.
//!
//! Run: `cargo run -p geom2d --example ray_probe`

use geom2d::{Box2D, Point2D, Ray2D};

fn main() -> Result<(), geom2d::GeomError> {
    let boxes = [
        Box2D::new(Point2D::new(0.0, 2.0), Point2D::new(1.0, 3.0))?,
        Box2D::new(Point2D::new(0.0, 2.0), Point2D::new(4.0, 3.0))?,
        Box2D::new(Point2D::new(1.0, -1.0), Point2D::new(3.0, 1.0))?,
    ];
    let rays = [
        Ray2D::from_coords(0.0, 0.0, 1.0, 1.0)?,
        Ray2D::from_coords(0.0, 0.0, 1.0, 0.0)?,
        Ray2D::from_coords(2.0, -5.0, 0.0, 1.0)?,
    ];
    for b in &boxes {
        for r in &rays {
            println!(
                "{b} x {r}: diagonal={} slab={}",
                b.intersects_ray(r),
                b.intersects_ray_slab(r)
            );
        }
    }
    Ok(())
}
