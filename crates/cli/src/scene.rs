//! JSON scenes: a list of boxes, rays and points evaluated against each other.

use crate::output;
use anyhow::{Context, Result};
use geom2d::{Box2D, Point2D, Ray2D};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub boxes: Vec<BoxSpec>,
    pub rays: Vec<RaySpec>,
    pub points: Vec<[f32; 2]>,
}

#[derive(Debug, Deserialize)]
pub struct BoxSpec {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

#[derive(Debug, Deserialize)]
pub struct RaySpec {
    pub origin: [f32; 2],
    pub direction: [f32; 2],
}

/// Query results, indexed `[box][point]`, `[box][box]` and `[box][ray]`.
#[derive(Debug, PartialEq, Serialize)]
pub struct Report {
    pub boxes: Vec<String>,
    pub rays: Vec<String>,
    pub contains: Vec<Vec<bool>>,
    pub overlaps: Vec<Vec<bool>>,
    pub ray_hits: Vec<Vec<bool>>,
    pub ray_hits_slab: Vec<Vec<bool>>,
}

/// Build every primitive first; the first invalid one aborts the scene.
pub fn evaluate(scene: &Scene) -> Result<Report> {
    let boxes = scene
        .boxes
        .iter()
        .enumerate()
        .map(|(i, b)| {
            Box2D::new(b.min.into(), b.max.into()).with_context(|| format!("box #{i}"))
        })
        .collect::<Result<Vec<_>>>()?;
    let rays = scene
        .rays
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Ray2D::new(r.origin.into(), r.direction.into()).with_context(|| format!("ray #{i}"))
        })
        .collect::<Result<Vec<_>>>()?;
    let points: Vec<Point2D> = scene.points.iter().map(|&p| p.into()).collect();

    Ok(Report {
        boxes: boxes.iter().map(ToString::to_string).collect(),
        rays: rays.iter().map(ToString::to_string).collect(),
        contains: boxes
            .iter()
            .map(|b| points.iter().map(|&p| b.contains(p)).collect())
            .collect(),
        overlaps: boxes
            .iter()
            .map(|a| boxes.iter().map(|b| a.intersects(b)).collect())
            .collect(),
        ray_hits: boxes
            .iter()
            .map(|b| rays.iter().map(|r| b.intersects_ray(r)).collect())
            .collect(),
        ray_hits_slab: boxes
            .iter()
            .map(|b| rays.iter().map(|r| b.intersects_ray_slab(r)).collect())
            .collect(),
    })
}

pub fn run(input: &Path, out: Option<&Path>) -> Result<()> {
    let raw = fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let scene: Scene =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", input.display()))?;
    tracing::info!(
        input = %input.display(),
        boxes = scene.boxes.len(),
        rays = scene.rays.len(),
        points = scene.points.len(),
        "scene"
    );
    let report = evaluate(&scene)?;
    let json = serde_json::to_string_pretty(&report)?;
    output::emit(&json, out)
}
