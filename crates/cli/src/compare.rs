//! Measure the diagonal ray-box method against the slab reference.

use crate::output;
use anyhow::{Context, Result};
use geom2d::sample::{draw_box, draw_ray, ReplayToken, SampleCfg};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Default, PartialEq, Serialize)]
pub struct Summary {
    pub seed: u64,
    pub count: u64,
    pub both_hit: u64,
    pub both_miss: u64,
    /// Slab hits that the diagonal method misses.
    pub diagonal_misses: u64,
    /// Diagonal hits that the slab test rejects.
    pub diagonal_extra: u64,
    /// First few disagreeing samples, by replay index.
    pub examples: Vec<Divergence>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Divergence {
    pub index: u64,
    pub b: String,
    pub ray: String,
    pub diagonal: bool,
    pub slab: bool,
}

const MAX_EXAMPLES: usize = 16;

pub fn sweep(seed: u64, count: u64, cfg: SampleCfg) -> Result<Summary> {
    let mut s = Summary {
        seed,
        count,
        ..Summary::default()
    };
    for index in 0..count {
        let tok = ReplayToken::new(seed, index);
        let b = draw_box(cfg, tok).with_context(|| format!("box #{index}"))?;
        // Offset the index so box and ray draws come from different streams.
        let r = draw_ray(cfg, ReplayToken::new(seed, index ^ (1 << 63)))
            .with_context(|| format!("ray #{index}"))?;
        let diagonal = b.intersects_ray(&r);
        let slab = b.intersects_ray_slab(&r);
        match (diagonal, slab) {
            (true, true) => s.both_hit += 1,
            (false, false) => s.both_miss += 1,
            (false, true) => s.diagonal_misses += 1,
            (true, false) => s.diagonal_extra += 1,
        }
        if diagonal != slab {
            tracing::debug!(index, %b, %r, diagonal, slab, "ray methods disagree");
            if s.examples.len() < MAX_EXAMPLES {
                s.examples.push(Divergence {
                    index,
                    b: b.to_string(),
                    ray: r.to_string(),
                    diagonal,
                    slab,
                });
            }
        }
    }
    Ok(s)
}

pub fn run(seed: u64, count: u64, out: Option<&Path>) -> Result<()> {
    let s = sweep(seed, count, SampleCfg::default())?;
    tracing::info!(
        seed,
        count,
        both_hit = s.both_hit,
        both_miss = s.both_miss,
        diagonal_misses = s.diagonal_misses,
        diagonal_extra = s.diagonal_extra,
        "compare"
    );
    let json = serde_json::to_string_pretty(&s)?;
    output::emit(&json, out)
}
