// Copyright 2025 the Polyquery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use polyquery_geom::{Edge, point_to_segment_distance};
use polyquery_tree::{EdgeTree, Grouping, TravelTime, TreeBuilder, indexed_vertices, polygon_edges};

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

/// Star-shaped rings scattered over a square, one edge list per ring.
fn gen_rings(count: usize, vertices: usize, extent: f64) -> Vec<Vec<Edge>> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut offset = 0;
    (0..count)
        .map(|_| {
            let cx = rng.next_f64() * extent;
            let cy = rng.next_f64() * extent;
            let ring: Vec<Point> = (0..vertices)
                .map(|i| {
                    let a = i as f64 / vertices as f64 * std::f64::consts::TAU;
                    let r = 5.0 + rng.next_f64() * 10.0;
                    Point::new(cx + r * a.cos(), cy + r * a.sin())
                })
                .collect();
            let mut verts = indexed_vertices(ring, offset);
            for v in &mut verts {
                v.h = rng.next_f64() * 100.0;
            }
            offset += vertices;
            polygon_edges(&verts)
        })
        .collect()
}

fn gen_queries(count: usize, extent: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * extent, rng.next_f64() * extent))
        .collect()
}

fn build(rings: &[Vec<Edge>], grouping: Grouping) -> EdgeTree {
    TreeBuilder::new()
        .with_grouping(grouping)
        .build_rings(rings.iter().cloned())
        .unwrap()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[64usize, 512] {
        let rings = gen_rings(n, 16, 2000.0);
        group.throughput(Throughput::Elements((n * 16) as u64));
        for (name, grouping) in [("sequential", Grouping::Sequential), ("str", Grouping::Str)] {
            group.bench_function(format!("{name}_rings{n}"), |b| {
                b.iter_batched(
                    || rings.clone(),
                    |rings| black_box(TreeBuilder::new().with_grouping(grouping).build_rings(rings)),
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");
    let queries = gen_queries(256, 2000.0);
    group.throughput(Throughput::Elements(queries.len() as u64));
    for &n in &[64usize, 512] {
        let rings = gen_rings(n, 16, 2000.0);
        let all: Vec<Edge> = rings.iter().flatten().copied().collect();
        for (name, grouping) in [("sequential", Grouping::Sequential), ("str", Grouping::Str)] {
            let tree = build(&rings, grouping);
            group.bench_function(format!("edge_distance_{name}_rings{n}"), |b| {
                b.iter(|| {
                    for &p in &queries {
                        black_box(tree.distance_to_edges(p));
                    }
                })
            });
            group.bench_function(format!("nearest_vertex_{name}_rings{n}"), |b| {
                b.iter(|| {
                    for &p in &queries {
                        black_box(tree.nearest_vertex(p));
                    }
                })
            });
            group.bench_function(format!("travel_time_{name}_rings{n}"), |b| {
                let heuristic = TravelTime { max_speed: 2.0 };
                b.iter(|| {
                    for &p in &queries {
                        black_box(tree.custom_distance(p, &heuristic));
                    }
                })
            });
            group.bench_function(format!("ray_parity_{name}_rings{n}"), |b| {
                b.iter(|| {
                    for &p in &queries {
                        black_box(tree.contains_point(p));
                    }
                })
            });
        }
        group.bench_function(format!("edge_distance_brute_force_rings{n}"), |b| {
            b.iter(|| {
                for &p in &queries {
                    let d = all
                        .iter()
                        .map(|e| point_to_segment_distance(p, e))
                        .fold(f64::INFINITY, f64::min);
                    black_box(d);
                }
            })
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let rings = gen_rings(512, 16, 2000.0);
    let tree = build(&rings, Grouping::Str);
    for &q in &[1_000usize, 10_000] {
        let queries = gen_queries(q, 2000.0);
        group.throughput(Throughput::Elements(q as u64));
        group.bench_function(format!("distances_to_edges_q{q}"), |b| {
            b.iter(|| black_box(tree.distances_to_edges(&queries)))
        });
        group.bench_function(format!("nearest_vertices_q{q}"), |b| {
            b.iter(|| black_box(tree.nearest_vertices(&queries)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_queries, bench_batch);
criterion_main!(benches);
