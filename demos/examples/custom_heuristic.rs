// Copyright 2025 the Polyquery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Custom distance with per-vertex costs.
//!
//! Vertices carry a cost-to-go `h`; the query finds the vertex minimizing travel time to
//! it plus its cost, pruning with the travel time to each box plus the box's `h_min`.
//!
//! Run:
//! - `cargo run -p polyquery_demos --example custom_heuristic`

use kurbo::Point;
use polyquery_tree::{Euclidean, TravelTime, TreeBuilder, indexed_vertices, polyline_edges};

fn main() {
    // A road along the x axis; cost-to-go falls toward the east end.
    let mut road = indexed_vertices((0..=10).map(|i| Point::new(i as f64 * 10.0, 0.0)), 0);
    for v in &mut road {
        v.h = (100.0 - v.pos.x) / 5.0;
    }
    let tree = TreeBuilder::new().build(polyline_edges(&road)).unwrap();
    tree.root().check_invariants().unwrap();

    let p = Point::new(12.0, 30.0);
    let walk = TravelTime { max_speed: 1.0 };
    let drive = TravelTime { max_speed: 10.0 };
    println!("walking: {}", tree.custom_distance(p, &walk));
    println!("driving: {}", tree.custom_distance(p, &drive));
    println!("plain distance plus cost: {}", tree.custom_distance(p, &Euclidean));

    // Any non-decreasing closure works too.
    let squared_penalty = |d: f64| d * d / 100.0;
    let cost = tree.custom_distance(p, &squared_penalty);
    println!("squared penalty: {cost}");

    let batch = tree.custom_distances(&[p, Point::new(95.0, 5.0)], &walk);
    println!("batch: {batch:?}");
}
