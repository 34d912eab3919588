// Copyright 2025 the Polyquery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crossing primitives: ray casting and winding number.
//!
//! ## Boundary convention
//!
//! Both tests use the same half-open rule in `y` (an edge spans `min_y <= y < max_y`),
//! and a point exactly on an edge is neither a crossing nor a winding contribution of
//! that edge.
//! For a counter-clockwise unit square this makes points on the bottom and left edges
//! contained and points on the top and right edges not contained.

use kurbo::Point;

use crate::types::Edge;

/// Twice the signed area of the triangle `(a, b, p)`.
///
/// Positive when `p` lies left of the directed line `a → b`, negative when right, zero
/// when the three points are collinear.
#[inline]
pub fn is_left(a: Point, b: Point, p: Point) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}

/// Whether a ray cast from `p` towards `+x` crosses `edge`.
///
/// An edge is counted when its endpoints lie on opposite sides of the horizontal line
/// through `p` (one strictly above, one at or below) and the crossing lies strictly to
/// the right of `p`. Horizontal edges never cross.
pub fn crosses(p: Point, edge: &Edge) -> bool {
    let (a, b) = (edge.p1.pos, edge.p2.pos);
    if (a.y > p.y) == (b.y > p.y) {
        return false;
    }
    let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
    p.x < x_cross
}

/// Signed winding contribution of the directed edge `a → b` around `p`.
///
/// `+1` for an upward crossing with `p` strictly left of the edge, `-1` for a downward
/// crossing with `p` strictly right of it, `0` otherwise.
#[inline]
pub fn winding_contribution(p: Point, a: Point, b: Point) -> i32 {
    if a.y <= p.y {
        if b.y > p.y && is_left(a, b, p) > 0.0 {
            return 1;
        }
    } else if b.y <= p.y && is_left(a, b, p) < 0.0 {
        return -1;
    }
    0
}

/// Winding number of the closed ring `ring` around `p`.
///
/// The ring is not explicitly closed: the edge from the last point back to the first is
/// included. Rings with fewer than two points have winding number `0`.
pub fn winding_number(p: Point, ring: &[Point]) -> i32 {
    let Some(&last) = ring.last() else {
        return 0;
    };
    let mut wn = 0;
    let mut prev = last;
    for &next in ring {
        wn += winding_contribution(p, prev, next);
        prev = next;
    }
    wn
}
