//! Axis-aligned box stored as its min/max corners.
//!
//! Invariants (hold for every value of type `Box2D`):
//! - `min.x < max.x` and `min.y < max.y`, strictly.
//! - Corners differ by at least `EPS` on each axis at construction time.
//! - Corners are finite; NaN or infinite input is rejected like zero extent.
//!
//! Every entry point that sets the corners from raw input goes through
//! `Box2D::corrected`. Ray queries live in `intersect`.

use std::fmt;
use std::ops::{Add, AddAssign};

use crate::error::{GeomError, Result};
use crate::point::{eq_eps, Point2D};

/// Axis-aligned rectangle. Defaults to the unit box `(0,0)-(1,1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Box2D {
    min: Point2D,
    max: Point2D,
}

impl Default for Box2D {
    fn default() -> Self {
        Self {
            min: Point2D::new(0.0, 0.0),
            max: Point2D::new(1.0, 1.0),
        }
    }
}

impl Box2D {
    /// Box spanned by two opposite corners given in any order.
    pub fn new(a: Point2D, b: Point2D) -> Result<Self> {
        Self::corrected(a, b)
    }

    /// Short-list constructor: first point is the min corner, second the max
    /// corner. Missing points keep the unit box's corners; extra points are
    /// ignored. The pair is corrected like `new`.
    pub fn from_points(points: &[Point2D]) -> Result<Self> {
        let unit = Self::default();
        let mut corners = [unit.min, unit.max];
        for (slot, p) in corners.iter_mut().zip(points) {
            *slot = *p;
        }
        Self::corrected(corners[0], corners[1])
    }

    /// Replace both corners in place. On failure `self` becomes the unit box.
    pub fn set_corners(&mut self, a: Point2D, b: Point2D) -> Result<()> {
        match Self::corrected(a, b) {
            Ok(fixed) => {
                *self = fixed;
                Ok(())
            }
            Err(err) => {
                *self = Self::default();
                Err(err)
            }
        }
    }

    /// Reject zero-extent input (width first), then sort the corners per axis.
    /// A non-finite coordinate has no usable extent on its axis.
    fn corrected(a: Point2D, b: Point2D) -> Result<Self> {
        if flat(a.x(), b.x()) {
            tracing::warn!(kind = "zero_width", ax = a.x(), bx = b.x(), "box has zero width");
            return Err(GeomError::ZeroWidth);
        }
        if flat(a.y(), b.y()) {
            tracing::warn!(kind = "zero_length", ay = a.y(), by = b.y(), "box has zero length");
            return Err(GeomError::ZeroLength);
        }
        Ok(Self {
            min: Point2D::new(a.x().min(b.x()), a.y().min(b.y())),
            max: Point2D::new(a.x().max(b.x()), a.y().max(b.y())),
        })
    }

    #[inline]
    pub fn min(&self) -> Point2D {
        self.min
    }
    #[inline]
    pub fn max(&self) -> Point2D {
        self.max
    }

    /// `0` → min, `1` → max, anything else → `Point2D::default()`.
    pub fn at(&self, index: usize) -> Point2D {
        match index {
            0 => self.min,
            1 => self.max,
            _ => Point2D::default(),
        }
    }

    /// Width and height as a vector.
    #[inline]
    pub fn size(&self) -> Point2D {
        self.max - self.min
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(
            (self.min.x() + self.max.x()) / 2.0,
            (self.min.y() + self.max.y()) / 2.0,
        )
    }

    /// Closed containment: boundary points are inside.
    #[inline]
    pub fn contains(&self, p: Point2D) -> bool {
        p.x() <= self.max.x()
            && p.y() <= self.max.y()
            && p.x() >= self.min.x()
            && p.y() >= self.min.y()
    }

    /// Separating-axis overlap test; touching edges or corners count.
    pub fn intersects(&self, other: &Box2D) -> bool {
        if self.max.x() < other.min.x() {
            return false;
        }
        if self.min.x() > other.max.x() {
            return false;
        }
        if self.max.y() < other.min.y() {
            return false;
        }
        if self.min.y() > other.max.y() {
            return false;
        }
        true
    }
}

#[inline]
fn flat(a: f32, b: f32) -> bool {
    !a.is_finite() || !b.is_finite() || eq_eps(a, b)
}

impl TryFrom<(Point2D, Point2D)> for Box2D {
    type Error = GeomError;
    fn try_from((a, b): (Point2D, Point2D)) -> Result<Self> {
        Self::new(a, b)
    }
}

// Translation keeps both extents, so the corners are not re-validated.
impl Add<Point2D> for Box2D {
    type Output = Box2D;
    #[inline]
    fn add(self, v: Point2D) -> Self::Output {
        Box2D {
            min: self.min + v,
            max: self.max + v,
        }
    }
}
impl AddAssign<Point2D> for Box2D {
    #[inline]
    fn add_assign(&mut self, v: Point2D) {
        self.min += v;
        self.max += v;
    }
}

impl fmt::Display for Box2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Box2D {{{}, {}}}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point2D {
        Point2D::new(x, y)
    }

    #[test]
    fn default_is_unit_box() {
        let b = Box2D::default();
        assert_eq!(b.min(), p(0.0, 0.0));
        assert_eq!(b.max(), p(1.0, 1.0));
        assert_eq!(Box2D::from_points(&[]).unwrap(), b);
    }

    #[test]
    fn corner_order_does_not_matter() {
        let a = p(1.3, 2.5);
        let b = p(2.0, 3.5);
        let b1 = Box2D::new(a, b).unwrap();
        let b2 = Box2D::new(b, a).unwrap();
        assert_eq!(b1, b2);
        assert_eq!(b1.min(), a);
        assert_eq!(b1.max(), b);

        // Anti-diagonal corners are split per axis.
        let c = Box2D::new(p(3.0, -1.0), p(-2.0, 4.0)).unwrap();
        assert_eq!(c.min(), p(-2.0, -1.0));
        assert_eq!(c.max(), p(3.0, 4.0));
    }

    #[test]
    fn copies_compare_equal() {
        let b = Box2D::new(p(1.3, 2.5), p(2.0, 3.5)).unwrap();
        let c = b;
        assert_eq!(c, b);
        assert_ne!(b, Box2D::new(p(1.3, 2.5), p(2.0, 3.6)).unwrap());
    }

    #[test]
    fn short_list_semantics() {
        let p1 = p(1.3, 2.5);
        let p2 = p(2.0, 3.5);
        let p3 = p(3.3, 4.5);
        let b1 = Box2D::from_points(&[p1, p2, p3]).unwrap();
        assert_eq!(b1.min(), p1);
        assert_eq!(b1.max(), p2);

        // Only `min` is given; the default max (1,1) then becomes the min corner.
        let b2 = Box2D::from_points(&[p1]).unwrap();
        assert_eq!(b2.min(), p(1.0, 1.0));
        assert_eq!(b2.max(), p1);
    }

    #[test]
    fn zero_extent_is_rejected() {
        assert_eq!(
            Box2D::new(p(0.0, 0.0), p(0.0, 0.0)),
            Err(GeomError::ZeroWidth)
        );
        assert_eq!(
            Box2D::new(p(0.0, 0.0), p(1.0, 0.000001)),
            Err(GeomError::ZeroLength)
        );
        assert_eq!(
            Box2D::new(p(2.0, 0.0), p(2.000001, 5.0)),
            Err(GeomError::ZeroWidth)
        );
        assert_eq!(
            Box2D::try_from((p(1.0, 1.0), p(1.0, 1.0))),
            Err(GeomError::ZeroWidth)
        );
        assert_eq!(
            Box2D::from_points(&[p(1.0, 5.0)]),
            Err(GeomError::ZeroWidth)
        );
    }

    #[test]
    fn non_finite_corners_are_rejected() {
        let inf = f32::INFINITY;
        let nan = f32::NAN;
        assert_eq!(
            Box2D::new(p(inf, 0.0), p(inf, 1.0)),
            Err(GeomError::ZeroWidth)
        );
        assert_eq!(
            Box2D::new(p(nan, 0.0), p(1.0, 1.0)),
            Err(GeomError::ZeroWidth)
        );
        assert_eq!(
            Box2D::new(p(-inf, 0.0), p(inf, 1.0)),
            Err(GeomError::ZeroWidth)
        );
        assert_eq!(
            Box2D::new(p(0.0, 0.0), p(1.0, nan)),
            Err(GeomError::ZeroLength)
        );
        assert_eq!(
            Box2D::new(p(0.0, -inf), p(1.0, 2.0)),
            Err(GeomError::ZeroLength)
        );
        let mut b = Box2D::new(p(1.0, 2.0), p(2.0, 3.0)).unwrap();
        assert!(b.set_corners(p(nan, nan), p(1.0, 1.0)).is_err());
        assert_eq!(b, Box2D::default());
    }

    #[test]
    fn failed_set_corners_leaves_unit_box() {
        let mut b = Box2D::new(p(1.0, 2.0), p(2.0, 3.0)).unwrap();
        assert_eq!(
            b.set_corners(p(4.0, 4.0), p(5.0, 4.0)),
            Err(GeomError::ZeroLength)
        );
        assert_eq!(b, Box2D::default());

        b.set_corners(p(2.0, 3.5), p(1.3, 2.5)).unwrap();
        assert_eq!(b, Box2D::new(p(1.3, 2.5), p(2.0, 3.5)).unwrap());
    }

    #[test]
    fn index_accessor_falls_back_to_origin() {
        let p1 = p(1.2, 2.4);
        let p2 = p(1.3, 2.7);
        let b = Box2D::new(p1, p2).unwrap();
        assert_eq!(b.at(0), p1);
        assert_eq!(b.at(1), p2);
        assert_eq!(b.at(2), Point2D::default());
        assert_eq!(b.at(usize::MAX), Point2D::default());
    }

    #[test]
    fn translation_moves_both_corners() {
        let b = Box2D::new(p(0.0, 2.0), p(1.0, 3.0)).unwrap();
        let v = p(2.0, -1.0);
        let moved = b + v;
        assert_eq!(moved.min(), p(2.0, 1.0));
        assert_eq!(moved.max(), p(3.0, 2.0));
        let mut m = b;
        m += v;
        assert_eq!(m, moved);
        assert_eq!(moved + (-v), b);
    }

    #[test]
    fn center_and_size() {
        let b = Box2D::new(p(0.0, 2.0), p(4.0, 3.0)).unwrap();
        assert_eq!(b.center(), p(2.0, 2.5));
        assert_eq!(b.size(), p(4.0, 1.0));
    }

    #[test]
    fn containment_is_inclusive() {
        let b = Box2D::new(p(1.0, 2.0), p(2.0, 3.0)).unwrap();
        assert!(b.contains(p(1.5, 2.5)));
        assert!(b.contains(p(1.0, 2.0)));
        assert!(b.contains(p(2.0, 3.0)));
        assert!(b.contains(p(2.0, 2.2)));
        assert!(!b.contains(p(2.01, 2.5)));
        assert!(!b.contains(p(1.5, 1.99)));
    }

    #[test]
    fn boxes_intersect() {
        let b1 = Box2D::new(p(1.0, 2.0), p(2.0, 3.0)).unwrap();
        let b2 = Box2D::new(p(1.5, 2.5), p(2.5, 3.5)).unwrap();
        let b3 = Box2D::new(p(3.5, 2.5), p(4.5, 3.5)).unwrap();
        assert!(b1.intersects(&b2));
        assert!(b2.intersects(&b1));
        assert!(!b1.intersects(&b3));
        assert!(!b3.intersects(&b1));

        // Shared edge and shared corner both count.
        let edge = Box2D::new(p(2.0, 2.0), p(3.0, 3.0)).unwrap();
        let corner = Box2D::new(p(2.0, 3.0), p(3.0, 4.0)).unwrap();
        assert!(b1.intersects(&edge));
        assert!(b1.intersects(&corner));
        // Separated on y only.
        let below = Box2D::new(p(1.0, 0.0), p(2.0, 1.5)).unwrap();
        assert!(!b1.intersects(&below));
    }

    #[test]
    fn display_format() {
        let b = Box2D::new(p(0.0, 2.0), p(1.0, 3.0)).unwrap();
        assert_eq!(b.to_string(), "Box2D {Point2D {0, 2}, Point2D {1, 3}}");
    }
}
