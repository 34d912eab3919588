// Copyright 2025 the Polyquery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A built tree with single-point and batch queries.

use alloc::vec::Vec;

use kurbo::Point;

use crate::heuristic::Heuristic;
use crate::node::Node;

/// Result of a nearest-vertex query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NearestVertex {
    /// Source index of the nearest vertex.
    pub index: usize,
    /// Squared distance from the query point to it.
    pub distance_sq: f64,
}

/// A finished tree over polygon edges.
///
/// This wraps a root [`Node`] and runs each query from an unbounded start. Batch queries
/// map over the query points independently; with the `rayon` feature they run in
/// parallel.
#[derive(Clone, Debug)]
pub struct EdgeTree {
    root: Node,
}

impl EdgeTree {
    /// Wrap an assembled root node.
    pub fn from_root(root: Node) -> Self {
        Self { root }
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Unwrap the root node.
    pub fn into_root(self) -> Node {
        self.root
    }

    /// Distance from `p` to the nearest edge (`+inf` for an empty tree).
    pub fn distance_to_edges(&self, p: Point) -> f64 {
        self.root.nearest_edge_distance(f64::INFINITY, p)
    }

    /// Nearest vertex to `p`, or `None` for an empty tree.
    pub fn nearest_vertex(&self, p: Point) -> Option<NearestVertex> {
        let (index, distance_sq) = self.root.nearest_vertex_distance(None, f64::INFINITY, p);
        index.map(|index| NearestVertex { index, distance_sq })
    }

    /// Smallest `heuristic(|p - v|) + v.h` over all vertices.
    pub fn custom_distance<H>(&self, p: Point, heuristic: &H) -> f64
    where
        H: Heuristic + ?Sized,
    {
        self.root
            .nearest_vertex_distance_custom(f64::INFINITY, p, heuristic)
    }

    /// Ray-crossing containment: true when a `+x` ray from `p` crosses an odd number of
    /// edges.
    ///
    /// Meaningful when the tree holds closed rings.
    pub fn contains_point(&self, p: Point) -> bool {
        self.root.count_ray_crossings(0, p) % 2 == 1
    }

    /// [`EdgeTree::distance_to_edges`] for every point.
    pub fn distances_to_edges(&self, points: &[Point]) -> Vec<f64> {
        log::trace!("distances_to_edges: {} points", points.len());
        map_points(points, |p| self.distance_to_edges(p))
    }

    /// [`EdgeTree::nearest_vertex`] for every point.
    pub fn nearest_vertices(&self, points: &[Point]) -> Vec<Option<NearestVertex>> {
        log::trace!("nearest_vertices: {} points", points.len());
        map_points(points, |p| self.nearest_vertex(p))
    }

    /// [`EdgeTree::custom_distance`] for every point.
    pub fn custom_distances<H>(&self, points: &[Point], heuristic: &H) -> Vec<f64>
    where
        H: Heuristic + Sync + ?Sized,
    {
        log::trace!("custom_distances: {} points", points.len());
        map_points(points, |p| self.custom_distance(p, heuristic))
    }

    /// [`EdgeTree::contains_point`] for every point.
    pub fn contains_points(&self, points: &[Point]) -> Vec<bool> {
        log::trace!("contains_points: {} points", points.len());
        map_points(points, |p| self.contains_point(p))
    }
}

#[cfg(feature = "rayon")]
fn map_points<R, F>(points: &[Point], f: F) -> Vec<R>
where
    R: Send,
    F: Fn(Point) -> R + Sync + Send,
{
    use rayon::prelude::*;
    points.par_iter().map(|&p| f(p)).collect()
}

#[cfg(not(feature = "rayon"))]
fn map_points<R, F>(points: &[Point], f: F) -> Vec<R>
where
    F: Fn(Point) -> R,
{
    points.iter().map(|&p| f(p)).collect()
}
