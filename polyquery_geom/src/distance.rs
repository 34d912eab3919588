// Copyright 2025 the Polyquery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distance primitives.

use kurbo::{ParamCurve, ParamCurveNearest, Point};

use crate::types::Edge;

/// Squared Euclidean length of `(dx, dy)`.
///
/// Distance comparisons on hot paths use squared values, which order the same way as
/// true distances and avoid square roots.
#[inline]
pub fn distance_squared(dx: f64, dy: f64) -> f64 {
    dx * dx + dy * dy
}

/// Squared distance from `p` to the closest point of `edge`.
pub fn point_to_segment_distance_sq(p: Point, edge: &Edge) -> f64 {
    let (a, b) = (edge.p1.pos, edge.p2.pos);
    if a == b {
        return distance_squared(p.x - a.x, p.y - a.y);
    }
    edge.line().nearest(p, 0.0).distance_sq
}

/// Euclidean distance from `p` to the closest point of `edge`.
///
/// The projection of `p` is clamped to the segment, so points beyond either end
/// measure to that endpoint. Zero when `p` lies on the segment.
pub fn point_to_segment_distance(p: Point, edge: &Edge) -> f64 {
    let (a, b) = (edge.p1.pos, edge.p2.pos);
    if a == b {
        return p.distance(a);
    }
    let line = edge.line();
    let nearest = line.nearest(p, 0.0);
    p.distance(line.eval(nearest.t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vertex;

    fn edge(x1: f64, y1: f64, x2: f64, y2: f64) -> Edge {
        Edge::new(Vertex::new(x1, y1, 0), Vertex::new(x2, y2, 1))
    }

    fn close(a: f64, b: f64) -> bool {
        let diff = a - b;
        -1e-12 < diff && diff < 1e-12
    }

    #[test]
    fn squared_distance() {
        assert_eq!(distance_squared(3.0, 4.0), 25.0);
        assert_eq!(distance_squared(-3.0, -4.0), 25.0);
    }

    #[test]
    fn perpendicular_foot_inside_segment() {
        let e = edge(0.0, 0.0, 4.0, 0.0);
        assert!(close(point_to_segment_distance(Point::new(2.0, 3.0), &e), 3.0));
        assert!(close(point_to_segment_distance_sq(Point::new(2.0, -3.0), &e), 9.0));
    }

    #[test]
    fn projection_clamps_to_endpoints() {
        let e = edge(0.0, 0.0, 4.0, 0.0);
        assert!(close(point_to_segment_distance(Point::new(-3.0, 4.0), &e), 5.0));
        assert!(close(point_to_segment_distance(Point::new(7.0, 4.0), &e), 5.0));
    }

    #[test]
    fn on_segment_is_zero() {
        let e = edge(0.0, 0.0, 2.0, 2.0);
        assert!(close(point_to_segment_distance(Point::new(1.0, 1.0), &e), 0.0));
        assert!(close(point_to_segment_distance(Point::new(2.0, 2.0), &e), 0.0));
    }

    #[test]
    fn degenerate_segment_is_point_distance() {
        let e = edge(1.0, 1.0, 1.0, 1.0);
        assert!(close(point_to_segment_distance(Point::new(4.0, 5.0), &e), 5.0));
        assert!(close(point_to_segment_distance_sq(Point::new(4.0, 5.0), &e), 25.0));
    }
}
