//! Ray-box intersection.
//!
//! - `Box2D::intersects_ray`: diagonal method. The ray is treated as the line
//!   `y = k·x + b` and intersected with the box diagonals; a candidate inside
//!   the box is then checked against the ray's forward direction.
//! - `Box2D::intersects_ray_slab`: standard slab test on the half-line, kept as
//!   a reference to measure the diagonal method against.
//!
//! Known divergences of the diagonal method (slab says hit, diagonal says miss):
//! - Vertical rays (`direction.x == 0`): the slope is infinite and every
//!   candidate is NaN.
//! - Rays whose origin has `x ≈ 0` and whose direction has `y == 0`: the
//!   forward test falls back to the y axis, where the product is zero.

use crate::box2d::Box2D;
use crate::point::{eq_eps, Point2D};
use crate::ray2d::Ray2D;

impl Box2D {
    /// Does the half-line `ray` touch the box (boundary or interior)?
    ///
    /// The fallback order (diagonal 1, then diagonal 2, then miss) matters for
    /// rays parallel to a diagonal and must not be reordered.
    pub fn intersects_ray(&self, ray: &Ray2D) -> bool {
        let origin = ray.origin();
        let dir = ray.direction();
        if self.contains(origin) {
            return true;
        }

        let k_ray = dir.y() / dir.x();
        let b_ray = origin.y() - k_ray * origin.x();
        let (lo, hi) = (self.min(), self.max());
        let k_dia1 = (hi.y() - lo.y()) / (hi.x() - lo.x());
        let k_dia2 = -k_dia1;
        let b_dia1 = hi.y() - k_dia1 * hi.x();
        let b_dia2 = hi.y() - k_dia2 * lo.x();

        let cross = |k_dia: f32, b_dia: f32| {
            let x = -(b_ray - b_dia) / (k_ray - k_dia);
            Point2D::new(x, k_ray * x + b_ray)
        };

        let hit = if !eq_eps(k_ray, k_dia1) {
            let p = cross(k_dia1, b_dia1);
            if self.contains(p) {
                p
            } else if !eq_eps(k_ray, k_dia2) {
                cross(k_dia2, b_dia2)
            } else {
                return false;
            }
        } else {
            cross(k_dia2, b_dia2)
        };
        if !self.contains(hit) {
            return false;
        }

        if !origin.eq_eps_x(0.0) {
            (hit.x() - origin.x()) * dir.x() > 0.0
        } else {
            (hit.y() - origin.y()) * dir.y() > 0.0
        }
    }

    /// Slab test: clip the parameter interval `[0, ∞)` against both axis slabs.
    pub fn intersects_ray_slab(&self, ray: &Ray2D) -> bool {
        let origin = ray.origin();
        let dir = ray.direction();
        let axes = [
            (origin.x(), dir.x(), self.min().x(), self.max().x()),
            (origin.y(), dir.y(), self.min().y(), self.max().y()),
        ];
        let mut t_near = 0.0f32;
        let mut t_far = f32::INFINITY;
        for (o, d, lo, hi) in axes {
            if d == 0.0 {
                if o < lo || o > hi {
                    return false;
                }
                continue;
            }
            let inv = 1.0 / d;
            let (mut t0, mut t1) = ((lo - o) * inv, (hi - o) * inv);
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_near = t_near.max(t0);
            t_far = t_far.min(t1);
            if t_near > t_far {
                return false;
            }
        }
        true
    }
}
