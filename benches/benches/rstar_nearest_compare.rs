// Copyright 2025 the Polyquery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use polyquery_tree::{Grouping, TreeBuilder, indexed_vertices, polyline_edges};

use rstar::RTree;

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        // Serpentine order so consecutive points are neighbors.
        for i in 0..n {
            let x = if y % 2 == 0 { i } else { n - 1 - i };
            out.push(Point::new(x as f64 * cell, y as f64 * cell));
        }
    }
    out
}

fn bench_nearest_vertex_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_vertex_compare");
    for &n in &[64usize, 128] {
        let points = gen_grid_points(n, 10.0);
        let queries: Vec<Point> = (0..256)
            .map(|i| Point::new(3.3 + i as f64 * 2.47, 7.1 + i as f64 * 1.93))
            .collect();
        group.throughput(Throughput::Elements(queries.len() as u64));

        group.bench_function(format!("polyquery_build_n{n}"), |b| {
            b.iter_batched(
                || polyline_edges(&indexed_vertices(points.iter().copied(), 0)),
                |edges| {
                    black_box(
                        TreeBuilder::new()
                            .with_grouping(Grouping::Str)
                            .build(edges),
                    )
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_n{n}"), |b| {
            b.iter_batched(
                || points.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
                |coords| black_box(RTree::bulk_load(coords)),
                BatchSize::SmallInput,
            )
        });

        let tree = TreeBuilder::new()
            .with_grouping(Grouping::Str)
            .build(polyline_edges(&indexed_vertices(points.iter().copied(), 0)))
            .unwrap();
        group.bench_function(format!("polyquery_query_n{n}"), |b| {
            b.iter(|| {
                for &q in &queries {
                    black_box(tree.nearest_vertex(q));
                }
            })
        });

        let rtree = RTree::bulk_load(points.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>());
        group.bench_function(format!("rstar_query_n{n}"), |b| {
            b.iter(|| {
                for &q in &queries {
                    black_box(rtree.nearest_neighbor(&[q.x, q.y]));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_nearest_vertex_compare);
criterion_main!(benches);
