// Copyright 2025 the Polyquery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polyquery Geom: the shared leaves of the Polyquery workspace.
//!
//! This crate holds the small value types and pure functions that both query engines
//! (`polyquery_tree` and `polyquery_polygon`) are built on:
//!
//! - [`Vertex`] and [`Edge`]: polygon vertices carrying a source index and a heuristic cost.
//! - [`Aabb`]: an axis-aligned bounding box that starts empty and widens as points are added,
//!   with the two pruning tests used by the queries ([`Aabb::distance_sq_to`] and
//!   [`Aabb::excludes_ray_from`]).
//! - Distance primitives: [`distance_squared`] and [`point_to_segment_distance`].
//! - Crossing primitives: [`crosses`] for ray casting and [`winding_number`] for containment.
//!
//! Query points are plain [`kurbo::Point`]s.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use polyquery_geom::{Aabb, winding_number};
//!
//! let square = [
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ];
//! let bbox = Aabb::from_points(square.iter().copied());
//! assert_eq!(bbox, Aabb::new(0.0, 0.0, 1.0, 1.0));
//!
//! assert_eq!(winding_number(Point::new(0.5, 0.5), &square), 1);
//! assert_eq!(winding_number(Point::new(2.0, 2.0), &square), 0);
//! ```
//!
//! ## Float semantics
//!
//! Coordinates are not validated. NaN inputs produce degenerate results (a NaN
//! coordinate is never inside a box and never crosses an edge) rather than panics.
//!
//! This crate is `no_std` and uses Kurbo's `std` or `libm` feature for square roots.

#![no_std]

mod aabb;
mod crossing;
mod distance;
mod types;

pub use aabb::Aabb;
pub use crossing::{crosses, is_left, winding_contribution, winding_number};
pub use distance::{distance_squared, point_to_segment_distance, point_to_segment_distance_sq};
pub use types::{Edge, Vertex};
