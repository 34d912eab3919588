// Copyright 2025 the Polyquery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge tree basics.
//!
//! Assemble a small tree by hand, run the four queries, and check the structure.
//!
//! Run:
//! - `cargo run -p polyquery_demos --example tree_basics`

use kurbo::Point;
use polyquery_tree::{Node, indexed_vertices, polygon_edges};

fn main() {
    // Two squares side by side, one leaf each.
    let left = indexed_vertices(
        [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ],
        0,
    );
    let right = indexed_vertices(
        [
            Point::new(4.0, 0.0),
            Point::new(6.0, 0.0),
            Point::new(6.0, 2.0),
            Point::new(4.0, 2.0),
        ],
        4,
    );

    let mut root = Node::new();
    for ring in [&left, &right] {
        let mut leaf = Node::new();
        for edge in polygon_edges(ring) {
            leaf.add_child_edge(edge).unwrap();
        }
        root.add_child_node(leaf).unwrap();
    }
    root.check_invariants().unwrap();
    println!(
        "root box: {:?}, depth {}, {} edges",
        root.bbox(),
        root.depth(),
        root.edge_count()
    );

    let p = Point::new(3.0, 1.5);
    let d = root.nearest_edge_distance(f64::INFINITY, p);
    println!("distance to nearest edge from {p:?}: {d}");
    assert_eq!(d, 1.0);

    let (index, d_sq) = root.nearest_vertex_distance(None, f64::INFINITY, p);
    println!("nearest vertex: {index:?} at squared distance {d_sq}");
    // (2, 2) and (4, 2) tie; the first inserted wins.
    assert_eq!(index, Some(2));

    let crossings = root.count_ray_crossings(0, Point::new(1.0, 1.0));
    println!("ray from (1, 1) crosses {crossings} edges");
    assert_eq!(crossings % 2, 1);

    // Mixing edges into a node that holds nodes is rejected.
    let err = root.add_child_edge(polygon_edges(&left)[0]).unwrap_err();
    println!("rejected: {err}");
}
