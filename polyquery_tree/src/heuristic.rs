// Copyright 2025 the Polyquery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Heuristic cost functions for [`Node::nearest_vertex_distance_custom`](crate::Node::nearest_vertex_distance_custom).

/// A monotone lower-bound cost of covering a Euclidean distance.
///
/// The custom-distance query scores a vertex `v` seen from `p` as
/// `cost(|p - v|) + v.h` and prunes a subtree when
/// `cost(box distance) + h_min` already exceeds the best score. That pruning is sound
/// only when:
///
/// - `cost` is non-decreasing in `distance`, and
/// - `cost` never overestimates (it is admissible), and
/// - every node's `h_min` is at most the `h` of every vertex below it. Trees assembled
///   with [`Node::add_child_edge`](crate::Node::add_child_edge) and
///   [`Node::add_child_node`](crate::Node::add_child_node) (or with
///   [`TreeBuilder`](crate::TreeBuilder)) maintain this; use
///   [`Node::check_invariants`](crate::Node::check_invariants) to verify a tree.
///
/// Any `Fn(f64) -> f64` is a heuristic.
pub trait Heuristic {
    /// Lower-bound cost of covering `distance`.
    fn cost(&self, distance: f64) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(f64) -> f64 + ?Sized,
{
    #[inline]
    fn cost(&self, distance: f64) -> f64 {
        self(distance)
    }
}

/// The identity heuristic: cost equals distance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Heuristic for Euclidean {
    #[inline]
    fn cost(&self, distance: f64) -> f64 {
        distance
    }
}

/// Distance divided by a maximum speed, e.g. a travel-time lower bound.
///
/// The speed must be positive for the cost to be non-decreasing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TravelTime {
    /// Maximum speed; larger speeds give smaller (weaker) bounds.
    pub max_speed: f64,
}

impl Heuristic for TravelTime {
    #[inline]
    fn cost(&self, distance: f64) -> f64 {
        distance / self.max_speed
    }
}
