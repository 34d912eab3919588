// Copyright 2025 the Polyquery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
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
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Axis-aligned concave blocks on a grid, as in a tiled map.
fn gen_blocks(n: usize, pitch: f64) -> Vec<Vec<Point>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * pitch;
            let y0 = y as f64 * pitch;
            out.push(vec![
                Point::new(x0, y0),
                Point::new(x0 + 2.0, y0),
                Point::new(x0 + 1.0, y0 + 1.0),
                Point::new(x0 + 2.0, y0 + 2.0),
                Point::new(x0, y0 + 2.0),
            ]);
        }
    }
    out
}

fn gen_queries(count: usize, extent: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * extent, rng.next_f64() * extent))
        .collect()
}

fn bench_containment(c: &mut Criterion) {
    let mut group = c.benchmark_group("containment");
    for &n in &[16usize, 64] {
        let blocks = gen_blocks(n, 5.0);
        let extent = n as f64 * 5.0;
        let queries = gen_queries(10_000, extent);
        group.throughput(Throughput::Elements(queries.len() as u64));

        let mut ctx = PolygonContext::new();
        for ring in &blocks {
            ctx.add_polygon(ring).unwrap();
        }
        group.bench_function(format!("context_winding_grid{n}"), |b| {
            b.iter(|| black_box(ctx.contains_points(&queries).unwrap()))
        });

        let x: Vec<f64> = queries.iter().map(|p| p.x).collect();
        let y: Vec<f64> = queries.iter().map(|p| p.y).collect();
        let mut out = vec![false; queries.len()];
        group.bench_function(format!("context_winding_xy_grid{n}"), |b| {
            b.iter(|| {
                ctx.contains_points_xy(&x, &y, &mut out).unwrap();
                black_box(&out);
            })
        });

        let mut offset = 0;
        let rings = blocks.iter().map(|ring| {
            let edges = polygon_edges(&indexed_vertices(ring.iter().copied(), offset));
            offset += ring.len();
            edges
        });
        let tree = TreeBuilder::new().build_rings(rings).unwrap();
        group.bench_function(format!("tree_ray_parity_grid{n}"), |b| {
            b.iter(|| black_box(tree.contains_points(&queries)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_containment);
criterion_main!(benches);
