// Copyright 2025 the Polyquery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translated blocks workload.
//!
//! Five copies of a concave block, translated along x, are packed four edges per leaf and
//! four nodes per parent. A large batch of random points is then run through the
//! edge-distance, nearest-vertex, and containment queries, and timed.
//!
//! Run:
//! - `cargo run --release -p polyquery_demos --example translated_blocks`

use std::time::Instant;

use kurbo::Point;
use polyquery_polygon::PolygonContext;
use polyquery_tree::{TreeBuilder, indexed_vertices, polygon_edges};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        let v = self.next_u64() >> 11;
        lo + (hi - lo) * (v as f64) / ((1u64 << 53) as f64)
    }
}

const BLOCK: [(f64, f64); 5] = [(0.0, 0.0), (2.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.0, 2.0)];

fn main() {
    let num_blocks = 5;
    let offset = 5.0;
    let num_points = 1_000_000;

    let rings: Vec<Vec<Point>> = (0..num_blocks)
        .map(|i| {
            BLOCK
                .iter()
                .map(|&(x, y)| Point::new(x + i as f64 * offset, y))
                .collect()
        })
        .collect();

    let tree = TreeBuilder::new()
        .with_max_children(4)
        .build_rings(rings.iter().enumerate().map(|(i, ring)| {
            polygon_edges(&indexed_vertices(ring.iter().copied(), i * BLOCK.len()))
        }))
        .unwrap();
    let mut ctx = PolygonContext::new();
    for ring in &rings {
        ctx.add_polygon(ring).unwrap();
    }

    let (x_min, x_max) = (-1.0, (num_blocks - 1) as f64 * offset + 2.0);
    let (y_min, y_max) = (-1.0, 2.0);
    let mut rng = Rng::new(0x5EED_0F_B10C5);
    let points: Vec<Point> = (0..num_points)
        .map(|_| Point::new(rng.range(x_min, x_max), rng.range(y_min, y_max)))
        .collect();

    let start = Instant::now();
    let distances = tree.distances_to_edges(&points);
    let nearest = tree.nearest_vertices(&points);
    let parity = tree.contains_points(&points);
    println!("tree queries: {:?}", start.elapsed());

    let start = Instant::now();
    let winding = ctx.contains_points(&points).unwrap();
    println!("context containment: {:?}", start.elapsed());

    let inside = parity.iter().filter(|&&b| b).count();
    let agree = parity.iter().zip(&winding).filter(|(a, b)| a == b).count();
    let mean = distances.iter().sum::<f64>() / distances.len() as f64;
    println!(
        "{inside} of {num_points} points inside, parity and winding agree on {agree}, \
         mean edge distance {mean:.4}, {} vertex hits",
        nearest.iter().flatten().count()
    );
}
