//! Seeded random boxes, rays and points.
//!
//! Purpose
//! - Feed benches and the method comparison in the CLI with reproducible
//!   inputs. A `ReplayToken { seed, index }` identifies one draw, so any single
//!   sample can be regenerated without replaying the ones before it.
//!
//! Model
//! - Ray origins, points and the first box corner are uniform in
//!   `[-extent, extent]`; a non-finite extent falls back to the default.
//! - Box sides are uniform in `[min_side, max_side]`, with `min_side` clamped
//!   well above `EPS` so draws never hit the zero-extent rejection.
//! - Ray directions are uniform on the unit circle.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::box2d::Box2D;
use crate::error::Result;
use crate::point::{Point2D, EPS};
use crate::ray2d::Ray2D;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Half-width of the square that origins and box corners are drawn from.
    pub extent: f32,
    pub min_side: f32,
    pub max_side: f32,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            extent: 10.0,
            min_side: 0.1,
            max_side: 5.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn coord<R: Rng>(rng: &mut R, extent: f32) -> f32 {
    let e = if extent.is_finite() {
        extent.abs()
    } else {
        SampleCfg::default().extent
    };
    rng.gen_range(-e..=e)
}

fn side<R: Rng>(rng: &mut R, cfg: &SampleCfg) -> f32 {
    let lo = cfg.min_side.max(1000.0 * EPS);
    let hi = cfg.max_side.max(lo);
    rng.gen_range(lo..=hi)
}

pub fn draw_point(cfg: SampleCfg, tok: ReplayToken) -> Point2D {
    let mut rng = tok.to_std_rng();
    Point2D::new(coord(&mut rng, cfg.extent), coord(&mut rng, cfg.extent))
}

/// Random box; corners are passed in a random order to exercise correction.
pub fn draw_box(cfg: SampleCfg, tok: ReplayToken) -> Result<Box2D> {
    let mut rng = tok.to_std_rng();
    let a = Point2D::new(coord(&mut rng, cfg.extent), coord(&mut rng, cfg.extent));
    let w = side(&mut rng, &cfg);
    let h = side(&mut rng, &cfg);
    let sx = if rng.gen::<bool>() { w } else { -w };
    let sy = if rng.gen::<bool>() { h } else { -h };
    Box2D::new(a, a + Point2D::new(sx, sy))
}

pub fn draw_ray(cfg: SampleCfg, tok: ReplayToken) -> Result<Ray2D> {
    let mut rng = tok.to_std_rng();
    let origin = Point2D::new(coord(&mut rng, cfg.extent), coord(&mut rng, cfg.extent));
    let theta: f32 = rng.gen::<f32>() * std::f32::consts::TAU;
    Ray2D::new(origin, Point2D::new(theta.cos(), theta.sin()))
}
