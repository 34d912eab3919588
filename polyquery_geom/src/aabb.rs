// Copyright 2025 the Polyquery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding box with min/max accumulation and pruning tests.

use kurbo::{Point, Rect, Vec2};

use crate::distance::distance_squared;

/// Axis-aligned bounding box in 2D.
///
/// A box starts as [`Aabb::EMPTY`], which has `min > max` on both axes, so it contains no
/// point and every coordinate added to it strictly widens it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum x
    pub min_x: f64,
    /// Minimum y
    pub min_y: f64,
    /// Maximum x
    pub max_x: f64,
    /// Maximum y
    pub max_y: f64,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Aabb {
    /// The empty box `(+inf, +inf, -inf, -inf)`.
    pub const EMPTY: Self = Self {
        min_x: f64::INFINITY,
        min_y: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    /// Create a new AABB from min/max corners.
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest box enclosing every point, computed in a single pass.
    ///
    /// Returns [`Aabb::EMPTY`] for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut bbox = Self::EMPTY;
        for p in points {
            bbox.add_point(p);
        }
        bbox
    }

    /// Widen the box so it contains `p`.
    pub fn add_point(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// The union of two boxes. The empty box is the identity.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Return true if the box has received no data (or is inverted).
    pub fn is_empty(&self) -> bool {
        self.max_x < self.min_x || self.max_y < self.min_y
    }

    /// Whether the closed box contains the point.
    pub fn contains_point(&self, p: Point) -> bool {
        self.min_x <= p.x && p.x <= self.max_x && self.min_y <= p.y && p.y <= self.max_y
    }

    /// Whether `other` lies entirely inside this box (edges included).
    pub fn encloses(&self, other: &Self) -> bool {
        other.is_empty()
            || (self.min_x <= other.min_x
                && other.max_x <= self.max_x
                && self.min_y <= other.min_y
                && other.max_y <= self.max_y)
    }

    /// Per-axis gap from the box to `p`: zero on an axis where `p` is within `[min, max]`,
    /// otherwise the signed distance past the nearer side.
    fn gap(&self, p: Point) -> Vec2 {
        let dx = if p.x < self.min_x {
            p.x - self.min_x
        } else if p.x > self.max_x {
            p.x - self.max_x
        } else {
            0.0
        };
        let dy = if p.y < self.min_y {
            p.y - self.min_y
        } else if p.y > self.max_y {
            p.y - self.max_y
        } else {
            0.0
        };
        Vec2::new(dx, dy)
    }

    /// Squared distance from `p` to the nearest point of the box, `0` inside or on it.
    ///
    /// This is a lower bound on the squared distance from `p` to anything inside the box,
    /// which is what makes it safe to prune with.
    pub fn distance_sq_to(&self, p: Point) -> f64 {
        let gap = self.gap(p);
        distance_squared(gap.x, gap.y)
    }

    /// Euclidean distance from `p` to the nearest point of the box.
    pub fn distance_to(&self, p: Point) -> f64 {
        self.gap(p).hypot()
    }

    /// Whether a ray cast from `p` towards `+x` cannot cross anything inside the box.
    ///
    /// Only three sides matter: the ray starts at `p` and runs right, so `min_x` is
    /// irrelevant.
    pub fn excludes_ray_from(&self, p: Point) -> bool {
        p.x > self.max_x || p.y > self.max_y || p.y < self.min_y
    }

    /// Convert to a Kurbo rectangle. Only meaningful for non-empty boxes.
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

impl From<Rect> for Aabb {
    fn from(r: Rect) -> Self {
        let r = r.abs();
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_box_contains_nothing() {
        let b = Aabb::EMPTY;
        assert!(b.is_empty());
        assert!(!b.contains_point(Point::ZERO));
        assert_eq!(b.distance_sq_to(Point::ZERO), f64::INFINITY);
        assert!(b.excludes_ray_from(Point::new(-1e300, 0.0)));
    }

    #[test]
    fn add_point_widens() {
        let mut b = Aabb::EMPTY;
        b.add_point(Point::new(1.0, 2.0));
        assert_eq!(b, Aabb::new(1.0, 2.0, 1.0, 2.0));
        assert!(!b.is_empty());
        b.add_point(Point::new(-1.0, 5.0));
        assert_eq!(b, Aabb::new(-1.0, 2.0, 1.0, 5.0));
    }

    #[test]
    fn union_with_empty_is_identity() {
        let b = Aabb::new(0.0, 0.0, 2.0, 3.0);
        assert_eq!(b.union(&Aabb::EMPTY), b);
        assert_eq!(Aabb::EMPTY.union(&b), b);
    }

    #[test]
    fn distance_sq_covers_all_nine_regions() {
        let b = Aabb::new(0.0, 0.0, 2.0, 2.0);
        // Inside and on the boundary.
        assert_eq!(b.distance_sq_to(Point::new(1.0, 1.0)), 0.0);
        assert_eq!(b.distance_sq_to(Point::new(2.0, 0.0)), 0.0);
        // Sides.
        assert_eq!(b.distance_sq_to(Point::new(-3.0, 1.0)), 9.0);
        assert_eq!(b.distance_sq_to(Point::new(5.0, 1.0)), 9.0);
        assert_eq!(b.distance_sq_to(Point::new(1.0, -2.0)), 4.0);
        assert_eq!(b.distance_sq_to(Point::new(1.0, 4.0)), 4.0);
        // Corners.
        assert_eq!(b.distance_sq_to(Point::new(-3.0, -4.0)), 25.0);
        assert_eq!(b.distance_sq_to(Point::new(5.0, 6.0)), 25.0);
        assert_eq!(b.distance_sq_to(Point::new(-1.0, 3.0)), 2.0);
        assert_eq!(b.distance_sq_to(Point::new(3.0, -1.0)), 2.0);
        assert_eq!(b.distance_to(Point::new(5.0, 6.0)), 5.0);
        assert_eq!(b.distance_to(Point::new(1.0, 1.0)), 0.0);
    }

    #[test]
    fn ray_exclusion_ignores_min_x() {
        let b = Aabb::new(0.0, 0.0, 2.0, 2.0);
        // Far to the left but within the y band: the ray can still hit the box.
        assert!(!b.excludes_ray_from(Point::new(-100.0, 1.0)));
        assert!(!b.excludes_ray_from(Point::new(2.0, 2.0)));
        assert!(b.excludes_ray_from(Point::new(2.5, 1.0)));
        assert!(b.excludes_ray_from(Point::new(1.0, 2.5)));
        assert!(b.excludes_ray_from(Point::new(1.0, -0.5)));
    }

    #[test]
    fn encloses_and_rect_conversion() {
        let outer = Aabb::from(Rect::new(4.0, 4.0, 0.0, 0.0));
        assert_eq!(outer, Aabb::new(0.0, 0.0, 4.0, 4.0));
        assert!(outer.encloses(&Aabb::new(1.0, 1.0, 2.0, 2.0)));
        assert!(outer.encloses(&Aabb::EMPTY));
        assert!(!outer.encloses(&Aabb::new(1.0, 1.0, 5.0, 2.0)));
        assert_eq!(outer.to_rect(), Rect::new(0.0, 0.0, 4.0, 4.0));
    }
}
