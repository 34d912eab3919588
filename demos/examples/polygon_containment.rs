// Copyright 2025 the Polyquery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygon context basics.
//!
//! Add polygons, test a batch of points with winding numbers, and tear the context down.
//!
//! Run:
//! - `cargo run -p polyquery_demos --example polygon_containment`

use kurbo::Point;
use polyquery_polygon::{ContextError, PolygonContext};

fn main() {
    let mut ctx = PolygonContext::new();
    ctx.add_polygon(&[
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 4.0),
        Point::new(0.0, 4.0),
    ])
    .unwrap();
    // A bow tie given as coordinate arrays; its two lobes wind in opposite directions.
    ctx.add_polygon_xy(&[10.0, 14.0, 10.0, 14.0], &[0.0, 4.0, 4.0, 0.0])
        .unwrap();
    println!("{ctx:?}");

    let queries = [
        Point::new(2.0, 2.0),
        Point::new(5.0, 2.0),
        Point::new(12.0, 1.0),
        Point::new(12.0, 3.0),
    ];
    let inside = ctx.contains_points(&queries).unwrap();
    for (p, inside) in queries.iter().zip(&inside) {
        println!("{p:?}: {}", if *inside { "inside" } else { "outside" });
    }
    assert_eq!(inside, vec![true, false, true, true]);

    ctx.destroy();
    assert_eq!(ctx.contains_points(&queries), Err(ContextError::Uninitialized));
    println!("destroyed context refuses queries");
}
