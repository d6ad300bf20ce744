//! 2D primitives for spatial queries in a simple game.
//!
//! - `Point2D`: position or direction, `f32` coordinates, tolerance `EPS`.
//! - `Box2D`: axis-aligned box with corrected corners (min < max on both axes).
//! - `Ray2D`: origin plus unit direction.
//!
//! Queries (`contains`, `intersects`, `intersects_ray`) are pure and total on
//! valid values; all failure modes sit in the constructors and surface as
//! `GeomError`. Constructors log a `tracing` warning before returning an error.

pub mod box2d;
pub mod error;
pub mod intersect;
pub mod point;
pub mod ray2d;
pub mod sample;

pub use box2d::Box2D;
pub use error::{GeomError, Result};
pub use point::{eq_eps, Point2D, EPS};
pub use ray2d::Ray2D;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::sample::{draw_box, draw_point, draw_ray, ReplayToken, SampleCfg};
    pub use crate::{Box2D, GeomError, Point2D, Ray2D, EPS};
    pub use nalgebra::Vector2 as Vec2;
}
