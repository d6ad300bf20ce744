//! Half-line with a unit-length direction.

use std::fmt;

use crate::error::{GeomError, Result};
use crate::point::Point2D;

/// Origin plus unit direction. Defaults to `(0,0)` pointing along `+x`.
///
/// Invariant: `direction` is finite and has length 1 (within float tolerance).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray2D {
    origin: Point2D,
    direction: Point2D,
}

impl Default for Ray2D {
    fn default() -> Self {
        Self {
            origin: Point2D::new(0.0, 0.0),
            direction: Point2D::new(1.0, 0.0),
        }
    }
}

impl Ray2D {
    /// Store `origin` as given and normalize `direction`.
    pub fn new(origin: Point2D, direction: Point2D) -> Result<Self> {
        Self::normalized(origin, direction)
    }

    /// `(x1, y1)` is the origin, `(x2, y2)` the raw direction.
    pub fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Result<Self> {
        Self::normalized(Point2D::new(x1, y1), Point2D::new(x2, y2))
    }

    /// Short-list constructor with the same slot rules as `Box2D::from_points`.
    pub fn from_points(points: &[Point2D]) -> Result<Self> {
        let unit = Self::default();
        let mut parts = [unit.origin, unit.direction];
        for (slot, p) in parts.iter_mut().zip(points) {
            *slot = *p;
        }
        Self::normalized(parts[0], parts[1])
    }

    fn normalized(origin: Point2D, direction: Point2D) -> Result<Self> {
        match direction.normalized() {
            Ok(direction) => Ok(Self { origin, direction }),
            Err(err) => {
                tracing::warn!(
                    kind = "degenerate_direction",
                    dx = direction.x(),
                    dy = direction.y(),
                    "ray direction cannot be normalized"
                );
                Err(err)
            }
        }
    }

    #[inline]
    pub fn origin(&self) -> Point2D {
        self.origin
    }
    #[inline]
    pub fn direction(&self) -> Point2D {
        self.direction
    }

    /// `0` → origin, `1` → direction, anything else → `Point2D::default()`.
    pub fn at(&self, index: usize) -> Point2D {
        match index {
            0 => self.origin,
            1 => self.direction,
            _ => Point2D::default(),
        }
    }

    /// `origin + t * direction`.
    #[inline]
    pub fn point_at(&self, t: f32) -> Point2D {
        self.origin + self.direction * t
    }
}

impl TryFrom<(Point2D, Point2D)> for Ray2D {
    type Error = GeomError;
    fn try_from((origin, direction): (Point2D, Point2D)) -> Result<Self> {
        Self::new(origin, direction)
    }
}

impl fmt::Display for Ray2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ray2D {{{}, {}}}", self.origin, self.direction)
    }
}
