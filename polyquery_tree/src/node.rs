// Copyright 2025 the Polyquery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree node: insertion primitives and branch-and-bound queries.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;
use polyquery_geom::{Aabb, Edge, crosses, distance_squared, point_to_segment_distance};

use crate::error::{ChildKind, TreeError};
use crate::heuristic::Heuristic;

#[derive(Clone)]
enum Kind {
    Empty,
    Internal(Vec<Node>),
    Leaf(Vec<Edge>),
}

/// A node of the bounding-box tree over polygon edges.
///
/// A node is either internal (it owns child nodes) or a leaf (it owns edges); the two
/// kinds are never mixed. Each node caches the union box of everything below it and
/// `h_min`, the smallest heuristic cost `h` of any vertex below it.
///
/// Trees are assembled bottom-up with [`Node::add_child_edge`] and
/// [`Node::add_child_node`] (or the [`Node::leaf`] / [`Node::internal`] shorthands) and are
/// read-only afterwards. All queries take `&self` and can run concurrently.
///
/// Every query takes a starting bound (or accumulator) and returns an improved one, so a
/// forest can be searched by threading the result of one root into the next.
#[derive(Clone)]
pub struct Node {
    bbox: Aabb,
    h_min: f64,
    kind: Kind,
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (kind, children) = match &self.kind {
            Kind::Empty => ("empty", 0),
            Kind::Internal(nodes) => ("internal", nodes.len()),
            Kind::Leaf(edges) => ("leaf", edges.len()),
        };
        f.debug_struct("Node")
            .field("bbox", &self.bbox)
            .field("h_min", &self.h_min)
            .field("kind", &kind)
            .field("children", &children)
            .finish_non_exhaustive()
    }
}

impl Node {
    /// Create an empty node with an empty box and `h_min = +inf`.
    ///
    /// An empty node is only a starting point: a well-formed tree contains none.
    pub const fn new() -> Self {
        Self {
            bbox: Aabb::EMPTY,
            h_min: f64::INFINITY,
            kind: Kind::Empty,
        }
    }

    /// Create a leaf holding `edges` in order.
    pub fn leaf(edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut node = Self::new();
        let mut list = Vec::new();
        for edge in edges {
            node.absorb_edge(&edge);
            list.push(edge);
        }
        if !list.is_empty() {
            node.kind = Kind::Leaf(list);
        }
        node
    }

    /// Create an internal node holding `children` in order.
    pub fn internal(children: impl IntoIterator<Item = Self>) -> Self {
        let mut node = Self::new();
        let mut list = Vec::new();
        for child in children {
            node.absorb_node(&child);
            list.push(child);
        }
        if !list.is_empty() {
            node.kind = Kind::Internal(list);
        }
        node
    }

    /// Append a child node, widening this node's box and lowering its `h_min`.
    ///
    /// Fails with [`TreeError::MixedChildren`] (leaving the node unchanged) if this node
    /// is a leaf.
    pub fn add_child_node(&mut self, child: Self) -> Result<(), TreeError> {
        let (bbox, h_min) = (child.bbox, child.h_min);
        match &mut self.kind {
            Kind::Leaf(_) => {
                return Err(TreeError::MixedChildren {
                    held: ChildKind::Edge,
                    found: ChildKind::Node,
                });
            }
            Kind::Internal(nodes) => nodes.push(child),
            Kind::Empty => self.kind = Kind::Internal(vec![child]),
        }
        self.bbox = self.bbox.union(&bbox);
        self.h_min = self.h_min.min(h_min);
        Ok(())
    }

    /// Append a child edge, widening this node's box by both endpoints and lowering its
    /// `h_min` to the smaller endpoint cost.
    ///
    /// Fails with [`TreeError::MixedChildren`] (leaving the node unchanged) if this node
    /// is internal.
    pub fn add_child_edge(&mut self, edge: Edge) -> Result<(), TreeError> {
        match &mut self.kind {
            Kind::Internal(_) => {
                return Err(TreeError::MixedChildren {
                    held: ChildKind::Node,
                    found: ChildKind::Edge,
                });
            }
            Kind::Leaf(edges) => edges.push(edge),
            Kind::Empty => self.kind = Kind::Leaf(vec![edge]),
        }
        self.absorb_edge(&edge);
        Ok(())
    }

    fn absorb_edge(&mut self, edge: &Edge) {
        self.bbox.add_point(edge.p1.pos);
        self.bbox.add_point(edge.p2.pos);
        self.h_min = self.h_min.min(edge.p1.h).min(edge.p2.h);
    }

    fn absorb_node(&mut self, child: &Self) {
        self.bbox = self.bbox.union(&child.bbox);
        self.h_min = self.h_min.min(child.h_min);
    }

    // --- queries ---

    /// Smallest Euclidean distance from `p` to any edge below this node, or `d` if none
    /// is closer.
    ///
    /// Subtrees whose box is already farther than `d` are skipped. Start with
    /// `d = f64::INFINITY` for an unbounded search.
    pub fn nearest_edge_distance(&self, d: f64, p: Point) -> f64 {
        // `d` is a true distance; the box bound is squared.
        if self.bbox.distance_sq_to(p) > d * d {
            return d;
        }
        match &self.kind {
            Kind::Internal(nodes) => nodes
                .iter()
                .fold(d, |d, child| child.nearest_edge_distance(d, p)),
            Kind::Leaf(edges) => edges
                .iter()
                .fold(d, |d, edge| d.min(point_to_segment_distance(p, edge))),
            Kind::Empty => d,
        }
    }

    /// Nearest vertex below this node by squared distance.
    ///
    /// `best` and `d_sq` are the current best vertex index and its squared distance; the
    /// result replaces them only with a strictly closer vertex. Both endpoints of every
    /// edge are compared in insertion order, so among equidistant vertices the one
    /// inserted first wins.
    ///
    /// Start with `(None, f64::INFINITY)` for an unbounded search.
    pub fn nearest_vertex_distance(
        &self,
        best: Option<usize>,
        d_sq: f64,
        p: Point,
    ) -> (Option<usize>, f64) {
        if self.bbox.distance_sq_to(p) > d_sq {
            return (best, d_sq);
        }
        match &self.kind {
            Kind::Internal(nodes) => nodes.iter().fold((best, d_sq), |(best, d_sq), child| {
                let (index, d_child) = child.nearest_vertex_distance(best, d_sq, p);
                if d_child < d_sq {
                    (index, d_child)
                } else {
                    (best, d_sq)
                }
            }),
            Kind::Leaf(edges) => edges
                .iter()
                .flat_map(|edge| [edge.p1, edge.p2])
                .fold((best, d_sq), |(best, d_sq), v| {
                    let dv = distance_squared(v.pos.x - p.x, v.pos.y - p.y);
                    if dv < d_sq {
                        (Some(v.index), dv)
                    } else {
                        (best, d_sq)
                    }
                }),
            Kind::Empty => (best, d_sq),
        }
    }

    /// Smallest `heuristic(|p - v|) + v.h` over the vertices `v` below this node, or `d`
    /// if nothing scores lower.
    ///
    /// Subtrees are skipped when `heuristic(box distance) + h_min > d`. See [`Heuristic`]
    /// for the conditions under which this pruning never discards the optimum.
    pub fn nearest_vertex_distance_custom<H>(&self, d: f64, p: Point, heuristic: &H) -> f64
    where
        H: Heuristic + ?Sized,
    {
        let bound = heuristic.cost(self.bbox.distance_to(p)) + self.h_min;
        if bound > d {
            return d;
        }
        match &self.kind {
            Kind::Internal(nodes) => nodes.iter().fold(d, |d, child| {
                d.min(child.nearest_vertex_distance_custom(d, p, heuristic))
            }),
            Kind::Leaf(edges) => edges
                .iter()
                .flat_map(|edge| [edge.p1, edge.p2])
                .fold(d, |d, v| d.min(heuristic.cost(p.distance(v.pos)) + v.h)),
            Kind::Empty => d,
        }
    }

    /// Add to `n` the number of edges below this node crossed by a ray cast from `p`
    /// towards `+x`.
    ///
    /// For a closed polygon an odd total means `p` is inside.
    pub fn count_ray_crossings(&self, n: usize, p: Point) -> usize {
        if self.bbox.excludes_ray_from(p) {
            return n;
        }
        match &self.kind {
            Kind::Internal(nodes) => nodes
                .iter()
                .fold(n, |n, child| child.count_ray_crossings(n, p)),
            Kind::Leaf(edges) => n + edges.iter().filter(|edge| crosses(p, edge)).count(),
            Kind::Empty => n,
        }
    }

    // --- inspection ---

    /// Union box of everything below this node.
    pub fn bbox(&self) -> Aabb {
        self.bbox
    }

    /// Smallest heuristic cost of any vertex below this node (`+inf` when empty).
    pub fn h_min(&self) -> f64 {
        self.h_min
    }

    /// True if this node holds edges.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, Kind::Leaf(_))
    }

    /// True if this node holds child nodes.
    pub fn is_internal(&self) -> bool {
        matches!(self.kind, Kind::Internal(_))
    }

    /// True if nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        matches!(self.kind, Kind::Empty)
    }

    /// Child nodes (empty for leaves).
    pub fn children(&self) -> &[Self] {
        match &self.kind {
            Kind::Internal(nodes) => nodes,
            _ => &[],
        }
    }

    /// Child edges (empty for internal nodes).
    pub fn edges(&self) -> &[Edge] {
        match &self.kind {
            Kind::Leaf(edges) => edges,
            _ => &[],
        }
    }

    /// Number of edges in the subtree.
    pub fn edge_count(&self) -> usize {
        match &self.kind {
            Kind::Empty => 0,
            Kind::Internal(nodes) => nodes.iter().map(Self::edge_count).sum(),
            Kind::Leaf(edges) => edges.len(),
        }
    }

    /// Number of levels in the subtree; a leaf has depth 1 and an empty node 0.
    pub fn depth(&self) -> usize {
        match &self.kind {
            Kind::Empty => 0,
            Kind::Internal(nodes) => 1 + nodes.iter().map(Self::depth).max().unwrap_or(0),
            Kind::Leaf(_) => 1,
        }
    }

    /// Every edge of the subtree in depth-first insertion order.
    pub fn all_edges(&self) -> Vec<Edge> {
        let mut out = Vec::with_capacity(self.edge_count());
        self.collect_edges(&mut out);
        out
    }

    fn collect_edges(&self, out: &mut Vec<Edge>) {
        match &self.kind {
            Kind::Empty => {}
            Kind::Internal(nodes) => nodes.iter().for_each(|child| child.collect_edges(out)),
            Kind::Leaf(edges) => out.extend_from_slice(edges),
        }
    }

    /// Verify the structural invariants the queries rely on.
    ///
    /// Checks, for every node of the subtree, that it is not empty, that its box encloses
    /// each child, and that its `h_min` does not exceed any child's cost. Trees assembled
    /// only through this type's constructors and insertion methods always pass; the check
    /// is for trees whose heuristic costs come from outside.
    pub fn check_invariants(&self) -> Result<(), TreeError> {
        self.check_at(0)
    }

    fn check_at(&self, depth: usize) -> Result<(), TreeError> {
        match &self.kind {
            Kind::Empty => Err(TreeError::EmptyNode { depth }),
            Kind::Internal(nodes) => {
                for child in nodes {
                    if !self.bbox.encloses(&child.bbox) {
                        return Err(TreeError::BoxDoesNotEnclose {
                            depth,
                            kind: ChildKind::Node,
                        });
                    }
                    if child.h_min < self.h_min {
                        return Err(TreeError::InvalidHeuristicBound {
                            depth,
                            h_min: self.h_min,
                            h: child.h_min,
                        });
                    }
                    child.check_at(depth + 1)?;
                }
                Ok(())
            }
            Kind::Leaf(edges) => {
                for edge in edges {
                    if !self.bbox.encloses(&edge.bbox()) {
                        return Err(TreeError::BoxDoesNotEnclose {
                            depth,
                            kind: ChildKind::Edge,
                        });
                    }
                    if edge.h_min() < self.h_min {
                        return Err(TreeError::InvalidHeuristicBound {
                            depth,
                            h_min: self.h_min,
                            h: edge.h_min(),
                        });
                    }
                }
                Ok(())
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn set_h_min_for_test(&mut self, h_min: f64) {
        self.h_min = h_min;
    }
}
