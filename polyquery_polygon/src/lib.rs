// Copyright 2025 the Polyquery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polyquery Polygon: bulk point-in-polygon tests over a set of independent polygons.
//!
//! A [`PolygonContext`] stores polygons as vertex rings, each with a cached bounding box.
//! [`PolygonContext::contains_points`] reports, for every query point, whether at least
//! one polygon contains it. Each polygon is rejected cheaply by its box first and only
//! then tested with the winding-number rule, so self-overlapping and concave polygons are
//! handled and nested polygons do not cancel each other out.
//!
//! Points on a polygon's boundary follow a half-open convention: for a counter-clockwise
//! unit square the bottom and left edges count as inside, the top and right edges as
//! outside. Callers needing a robust boundary classification should not rely on either.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use polyquery_polygon::PolygonContext;
//!
//! let mut ctx = PolygonContext::new();
//! ctx.add_polygon(&[
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ])?;
//!
//! let inside = ctx.contains_points(&[Point::new(0.5, 0.5), Point::new(2.0, 2.0)])?;
//! assert_eq!(inside, vec![true, false]);
//!
//! ctx.destroy();
//! assert!(ctx.contains_point(Point::new(0.5, 0.5)).is_err());
//! # Ok::<(), polyquery_polygon::ContextError>(())
//! ```
//!
//! With the default `rayon` feature, query points are evaluated in parallel.

mod context;
mod error;

pub use context::PolygonContext;
pub use error::{ContextError, Result};
pub use polyquery_geom::Aabb;
