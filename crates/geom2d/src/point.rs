//! 2D point/vector with `f32` coordinates and the crate-wide tolerance.
//!
//! - `Point2D` doubles as a position and as a direction.
//! - Equality is exact; `eq_eps*` helpers give the near-equality used by
//!   invariant checks in `Box2D` and `Ray2D`.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use nalgebra::Vector2;

use crate::error::{GeomError, Result};

/// Absolute tolerance for every near-equality comparison in the crate.
pub const EPS: f32 = 1e-5;

/// `|a - b| < EPS`.
#[inline]
pub fn eq_eps(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

/// Point or direction in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2D {
    v: Vector2<f32>,
}

impl Default for Point2D {
    fn default() -> Self {
        Self {
            v: Vector2::zeros(),
        }
    }
}

impl Point2D {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            v: Vector2::new(x, y),
        }
    }
    #[inline]
    pub fn x(&self) -> f32 {
        self.v.x
    }
    #[inline]
    pub fn y(&self) -> f32 {
        self.v.y
    }
    #[inline]
    pub fn as_vector(&self) -> Vector2<f32> {
        self.v
    }
    #[inline]
    pub fn eq_eps_x(&self, x: f32) -> bool {
        eq_eps(self.v.x, x)
    }
    #[inline]
    pub fn eq_eps_y(&self, y: f32) -> bool {
        eq_eps(self.v.y, y)
    }
    /// Near-equality on both axes.
    #[inline]
    pub fn eq_eps(&self, other: &Point2D) -> bool {
        self.eq_eps_x(other.x()) && self.eq_eps_y(other.y())
    }
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.v.x.is_finite() && self.v.y.is_finite()
    }
    #[inline]
    pub fn length(&self) -> f32 {
        self.v.norm()
    }
    #[inline]
    pub fn dot(&self, other: &Point2D) -> f32 {
        self.v.dot(&other.v)
    }

    /// Scale to unit length in place. Fails if a coordinate is not finite or
    /// the norm is `<= EPS`; `self` is left untouched in that case.
    ///
    /// The vector is divided by its largest component first so that the norm
    /// of a huge but finite direction does not overflow.
    pub fn normalize(&mut self) -> Result<()> {
        if !self.is_finite() {
            return Err(GeomError::DegenerateDirection);
        }
        let m = self.v.amax();
        if m == 0.0 {
            return Err(GeomError::DegenerateDirection);
        }
        let scaled = self.v / m;
        if m * scaled.norm() <= EPS {
            return Err(GeomError::DegenerateDirection);
        }
        self.v = scaled
            .try_normalize(0.0)
            .ok_or(GeomError::DegenerateDirection)?;
        Ok(())
    }

    pub fn normalized(mut self) -> Result<Self> {
        self.normalize()?;
        Ok(self)
    }
}

impl From<Vector2<f32>> for Point2D {
    fn from(v: Vector2<f32>) -> Self {
        Self { v }
    }
}
impl From<Point2D> for Vector2<f32> {
    fn from(p: Point2D) -> Self {
        p.v
    }
}
impl From<(f32, f32)> for Point2D {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}
impl From<[f32; 2]> for Point2D {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point2D {
    type Output = Point2D;
    #[inline]
    fn add(self, rhs: Point2D) -> Self::Output {
        Point2D { v: self.v + rhs.v }
    }
}
impl AddAssign for Point2D {
    #[inline]
    fn add_assign(&mut self, rhs: Point2D) {
        self.v += rhs.v;
    }
}
impl Sub for Point2D {
    type Output = Point2D;
    #[inline]
    fn sub(self, rhs: Point2D) -> Self::Output {
        Point2D { v: self.v - rhs.v }
    }
}
impl Neg for Point2D {
    type Output = Point2D;
    #[inline]
    fn neg(self) -> Self::Output {
        Point2D { v: -self.v }
    }
}
impl Mul<f32> for Point2D {
    type Output = Point2D;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Point2D { v: self.v * rhs }
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point2D {{{}, {}}}", self.v.x, self.v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_plain_decimals() {
        assert_eq!(Point2D::new(0.0, 2.0).to_string(), "Point2D {0, 2}");
        assert_eq!(Point2D::new(1.5, -3.25).to_string(), "Point2D {1.5, -3.25}");
    }

    #[test]
    fn near_equality_per_axis() {
        let p = Point2D::new(1.0, 2.0);
        assert!(p.eq_eps_x(1.0 + 0.5 * EPS));
        assert!(!p.eq_eps_x(1.0 + 2.0 * EPS));
        assert!(p.eq_eps_y(2.0));
        assert!(!p.eq_eps_y(2.1));
        assert!(p.eq_eps(&Point2D::new(1.000001, 1.999999)));
    }

    #[test]
    fn normalize_unit_and_zero() {
        let mut d = Point2D::new(3.0, 4.0);
        d.normalize().unwrap();
        assert!((d.x() - 0.6).abs() < 1e-6 && (d.y() - 0.8).abs() < 1e-6);

        let mut z = Point2D::new(0.0, 0.0);
        assert_eq!(z.normalize(), Err(GeomError::DegenerateDirection));
        assert_eq!(z, Point2D::default());
        assert_eq!(
            Point2D::new(1e-7, -1e-7).normalized(),
            Err(GeomError::DegenerateDirection)
        );
    }

    #[test]
    fn normalize_rejects_non_finite() {
        for bad in [
            Point2D::new(f32::INFINITY, 0.0),
            Point2D::new(0.0, f32::NEG_INFINITY),
            Point2D::new(f32::NAN, 1.0),
            Point2D::new(f32::INFINITY, f32::INFINITY),
        ] {
            let mut d = bad;
            assert_eq!(d.normalize(), Err(GeomError::DegenerateDirection));
            assert!(!d.is_finite());
        }
        assert!(Point2D::new(1.0, -2.0).is_finite());
    }

    #[test]
    fn normalize_survives_huge_components() {
        let d = Point2D::new(1e30, 1e30).normalized().unwrap();
        assert!(d.is_finite());
        assert!((d.length() - 1.0).abs() < 1e-6);
        assert!((d.x() - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);

        let d = Point2D::new(-3e38, 0.0).normalized().unwrap();
        assert_eq!(d, Point2D::new(-1.0, 0.0));
    }

    #[test]
    fn arithmetic() {
        let a = Point2D::new(1.0, 2.0);
        let b = Point2D::from([0.5, -1.0]);
        assert_eq!(a + b, Point2D::new(1.5, 1.0));
        assert_eq!(a - b, Point2D::new(0.5, 3.0));
        assert_eq!(-a, Point2D::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Point2D::new(2.0, 4.0));
        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        assert_eq!(Vector2::from(a), Vector2::new(1.0, 2.0));
    }
}
