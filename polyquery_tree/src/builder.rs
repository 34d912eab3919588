// Copyright 2025 the Polyquery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bottom-up tree assembly from edge lists.

use alloc::vec::Vec;
use core::cmp::Ordering;

use kurbo::Point;
use polyquery_geom::{Edge, Vertex};

use crate::error::TreeError;
use crate::node::Node;
use crate::tree::EdgeTree;

/// Vertices for `points`, indexed from `index_offset` with zero heuristic cost.
pub fn indexed_vertices(points: impl IntoIterator<Item = Point>, index_offset: usize) -> Vec<Vertex> {
    points
        .into_iter()
        .enumerate()
        .map(|(i, p)| Vertex::new(p.x, p.y, index_offset + i))
        .collect()
}

/// Edges of the closed ring through `vertices`, including the wrap edge from the last
/// vertex back to the first.
///
/// A single vertex yields one degenerate edge so it stays queryable.
pub fn polygon_edges(vertices: &[Vertex]) -> Vec<Edge> {
    let n = vertices.len();
    (0..n)
        .map(|i| Edge::new(vertices[i], vertices[(i + 1) % n]))
        .collect()
}

/// Edges of the open chain through `vertices`.
///
/// A single vertex yields one degenerate edge so it stays queryable.
pub fn polyline_edges(vertices: &[Vertex]) -> Vec<Edge> {
    match vertices {
        [] => Vec::new(),
        [only] => alloc::vec![Edge::new(*only, *only)],
        _ => vertices
            .windows(2)
            .map(|pair| Edge::new(pair[0], pair[1]))
            .collect(),
    }
}

/// How the builder orders items before packing them into nodes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Grouping {
    /// Keep input order: consecutive edges (and nodes) share a parent.
    ///
    /// Polygon edges are spatially coherent in ring order, so this is a good default and
    /// keeps nearest-vertex tie-breaks tied to input order.
    #[default]
    Sequential,
    /// Sort-tile-recursive packing: sort by centroid `x`, cut into vertical slices, sort
    /// each slice by centroid `y`, then pack.
    Str,
}

/// Packs edges into leaves and leaves into parents until one root remains.
///
/// Only [`Node::leaf`] and [`Node::internal`] are used to assemble nodes, so every box
/// encloses its subtree and every `h_min` is a valid lower bound of the vertex costs below
/// it.
#[derive(Clone, Debug)]
pub struct TreeBuilder {
    max_children: usize,
    grouping: Grouping,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self {
            max_children: 4,
            grouping: Grouping::Sequential,
        }
    }
}

impl TreeBuilder {
    /// Builder with fan-out 4 and [`Grouping::Sequential`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of children per node (at least 2).
    #[must_use]
    pub fn with_max_children(mut self, max_children: usize) -> Self {
        self.max_children = max_children.max(2);
        self
    }

    /// Set the grouping strategy.
    #[must_use]
    pub fn with_grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = grouping;
        self
    }

    /// Maximum number of children per node.
    pub fn max_children(&self) -> usize {
        self.max_children
    }

    /// Grouping strategy.
    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    /// Pack `edges` into leaves of at most `max_children` edges each.
    pub fn group_edges(&self, mut edges: Vec<Edge>) -> Vec<Node> {
        if self.grouping == Grouping::Str {
            str_order(&mut edges, self.max_children, |e| e.line().midpoint());
        }
        edges
            .chunks(self.max_children)
            .map(|chunk| Node::leaf(chunk.iter().copied()))
            .collect()
    }

    /// Pack `nodes` into parents of at most `max_children` nodes each.
    pub fn group_nodes(&self, mut nodes: Vec<Node>) -> Vec<Node> {
        if self.grouping == Grouping::Str {
            str_order(&mut nodes, self.max_children, |n| n.bbox().to_rect().center());
        }
        let mut parents = Vec::with_capacity(nodes.len().div_ceil(self.max_children));
        let mut iter = nodes.into_iter().peekable();
        while iter.peek().is_some() {
            parents.push(Node::internal(iter.by_ref().take(self.max_children)));
        }
        parents
    }

    /// Build a tree over one edge list.
    pub fn build(&self, edges: Vec<Edge>) -> Result<EdgeTree, TreeError> {
        self.build_rings([edges])
    }

    /// Build a tree over several edge lists (one per polygon or polyline).
    ///
    /// Leaves never mix edges of different lists; the leaves of all lists are then packed
    /// together.
    pub fn build_rings(
        &self,
        rings: impl IntoIterator<Item = Vec<Edge>>,
    ) -> Result<EdgeTree, TreeError> {
        let mut level: Vec<Node> = Vec::new();
        for ring in rings {
            level.extend(self.group_edges(ring));
        }
        if level.is_empty() {
            log::error!("refusing to build an edge tree without edges");
            return Err(TreeError::NoEdges);
        }
        while level.len() > 1 {
            level = self.group_nodes(level);
        }
        let root = level.pop().ok_or(TreeError::NoEdges)?;
        log::debug!(
            "built edge tree: {} edges, depth {}, fan-out {}, {:?} grouping",
            root.edge_count(),
            root.depth(),
            self.max_children,
            self.grouping
        );
        Ok(EdgeTree::from_root(root))
    }
}

/// Reorder `items` for sort-tile-recursive packing into groups of `max_children`.
fn str_order<T>(items: &mut [T], max_children: usize, centroid: impl Fn(&T) -> Point) {
    let n = items.len();
    if n <= max_children {
        return;
    }
    let groups = n.div_ceil(max_children);
    let mut slices = 1_usize;
    while slices * slices < groups {
        slices += 1;
    }
    items.sort_by(|a, b| {
        centroid(a)
            .x
            .partial_cmp(&centroid(b).x)
            .unwrap_or(Ordering::Equal)
    });
    // Whole groups per slice so no group straddles two slices.
    let slice_len = groups.div_ceil(slices) * max_children;
    for slice in items.chunks_mut(slice_len) {
        slice.sort_by(|a, b| {
            centroid(a)
                .y
                .partial_cmp(&centroid(b).y)
                .unwrap_or(Ordering::Equal)
        });
    }
}
