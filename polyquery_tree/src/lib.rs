// Copyright 2025 the Polyquery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polyquery Tree: a static bounding-box tree over polygon edges.
//!
//! The tree answers nearest-feature queries by branch and bound: every node caches the box
//! of its subtree, and a subtree is skipped as soon as its box provably cannot beat the
//! best answer found so far.
//!
//! - [`Node::nearest_edge_distance`]: distance to the nearest edge.
//! - [`Node::nearest_vertex_distance`]: nearest vertex (index and squared distance), with
//!   a deterministic first-inserted-wins tie-break.
//! - [`Node::nearest_vertex_distance_custom`]: smallest `heuristic(distance) + h` over
//!   vertices, for an admissible [`Heuristic`] and per-vertex costs `h`.
//! - [`Node::count_ray_crossings`]: edges crossed by a `+x` ray; odd means inside.
//!
//! Trees are assembled bottom-up with [`Node::add_child_edge`] and [`Node::add_child_node`],
//! or with [`TreeBuilder`], which packs edges into leaves and leaves into parents. A node
//! holds either edges or child nodes, never both; mixing is rejected with
//! [`TreeError::MixedChildren`]. Once built, a tree is read-only and can be queried from
//! many threads at once. [`EdgeTree`] wraps a finished root with unbounded single-point
//! queries and batch versions that run on rayon when the `rayon` feature is enabled.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use polyquery_tree::{TreeBuilder, indexed_vertices, polygon_edges};
//!
//! let square = indexed_vertices(
//!     [
//!         Point::new(0.0, 0.0),
//!         Point::new(1.0, 0.0),
//!         Point::new(1.0, 1.0),
//!         Point::new(0.0, 1.0),
//!     ],
//!     0,
//! );
//! let tree = TreeBuilder::new().build(polygon_edges(&square)).unwrap();
//!
//! assert_eq!(tree.distance_to_edges(Point::new(0.5, 0.25)), 0.25);
//! assert_eq!(tree.nearest_vertex(Point::new(1.2, 1.1)).unwrap().index, 2);
//! assert!(tree.contains_point(Point::new(0.5, 0.5)));
//! assert!(!tree.contains_point(Point::new(1.5, 0.5)));
//! ```
//!
//! Assembling nodes by hand:
//!
//! ```rust
//! use kurbo::Point;
//! use polyquery_geom::{Edge, Vertex};
//! use polyquery_tree::{Node, TreeError};
//!
//! let mut leaf = Node::new();
//! leaf.add_child_edge(Edge::new(Vertex::new(0.0, 0.0, 0), Vertex::new(4.0, 0.0, 1)))?;
//!
//! let mut root = Node::new();
//! root.add_child_node(leaf)?;
//! assert!(root.add_child_edge(Edge::new(Vertex::new(0.0, 1.0, 2), Vertex::new(1.0, 1.0, 3))).is_err());
//!
//! let d = root.nearest_edge_distance(f64::INFINITY, Point::new(2.0, 3.0));
//! assert_eq!(d, 3.0);
//! # Ok::<(), TreeError>(())
//! ```
//!
//! ## Heuristic bounds
//!
//! The custom-distance query is only as sound as its inputs: the heuristic must be
//! non-decreasing and admissible, and `h_min` must bound every vertex cost below a node.
//! The insertion methods maintain the latter; [`Node::check_invariants`] verifies it.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod builder;
mod error;
mod heuristic;
mod node;
mod tree;

pub use builder::{Grouping, TreeBuilder, indexed_vertices, polygon_edges, polyline_edges};
pub use error::{ChildKind, TreeError};
pub use heuristic::{Euclidean, Heuristic, TravelTime};
pub use node::Node;
pub use tree::{EdgeTree, NearestVertex};
