// Copyright 2025 the Polyquery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertex and edge value types.

use kurbo::{Line, Point};

use crate::aabb::Aabb;

/// A polygon or polyline vertex.
///
/// Besides its position a vertex remembers where it came from (`index`, reported by
/// nearest-vertex queries) and carries a precomputed heuristic cost `h` that only the
/// custom-distance query reads.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    /// Position of the vertex.
    pub pos: Point,
    /// Position of the vertex in its source sequence.
    pub index: usize,
    /// Admissible heuristic cost at this vertex.
    pub h: f64,
}

impl Vertex {
    /// Create a vertex with a zero heuristic cost.
    pub const fn new(x: f64, y: f64, index: usize) -> Self {
        Self {
            pos: Point::new(x, y),
            index,
            h: 0.0,
        }
    }

    /// Return a copy of this vertex with heuristic cost `h`.
    #[must_use]
    pub const fn with_h(mut self, h: f64) -> Self {
        self.h = h;
        self
    }
}

/// One polygon or polyline segment.
///
/// Order matters only for [`crosses`](crate::crosses): distance queries treat the edge
/// as undirected.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    /// Start vertex.
    pub p1: Vertex,
    /// End vertex.
    pub p2: Vertex,
}

impl Edge {
    /// Create an edge from `p1` to `p2`.
    pub const fn new(p1: Vertex, p2: Vertex) -> Self {
        Self { p1, p2 }
    }

    /// The segment as a Kurbo line.
    pub fn line(&self) -> Line {
        Line::new(self.p1.pos, self.p2.pos)
    }

    /// Bounding box of both endpoints.
    pub fn bbox(&self) -> Aabb {
        let mut bbox = Aabb::EMPTY;
        bbox.add_point(self.p1.pos);
        bbox.add_point(self.p2.pos);
        bbox
    }

    /// Smallest heuristic cost of the two endpoints.
    pub fn h_min(&self) -> f64 {
        self.p1.h.min(self.p2.h)
    }
}
