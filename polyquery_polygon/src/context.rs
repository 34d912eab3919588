// Copyright 2025 the Polyquery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The polygon context: storage, lifecycle, and bulk containment.

use kurbo::Point;
use polyquery_geom::{Aabb, winding_number};

use crate::error::{ContextError, Result};

/// A flat collection of independent polygons with one bounding box each.
///
/// Polygons are rings given by their vertices; the closing edge from the last vertex
/// back to the first is implied. The context is append-only: polygons are added with
/// [`PolygonContext::add_polygon`] and never modified or removed, until
/// [`PolygonContext::destroy`] releases everything. After that every operation returns
/// [`ContextError::Uninitialized`].
///
/// Containment queries take `&self`, so any number of them can run at once.
#[derive(Clone)]
pub struct PolygonContext {
    polygons: Vec<Vec<Point>>,
    bounding_boxes: Vec<Aabb>,
    initialized: bool,
}

impl Default for PolygonContext {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for PolygonContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let vertices: usize = self.polygons.iter().map(Vec::len).sum();
        f.debug_struct("PolygonContext")
            .field("polygons", &self.polygons.len())
            .field("vertices", &vertices)
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}

impl PolygonContext {
    /// Create an empty context, ready for use.
    pub fn new() -> Self {
        Self {
            polygons: Vec::new(),
            bounding_boxes: Vec::new(),
            initialized: true,
        }
    }

    /// Release all polygons and boxes and mark the context unusable.
    ///
    /// Destroying twice is harmless.
    pub fn destroy(&mut self) {
        log::debug!("destroying polygon context with {} polygons", self.polygons.len());
        self.polygons.clear();
        self.bounding_boxes.clear();
        self.initialized = false;
    }

    /// False once [`PolygonContext::destroy`] has been called.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.initialized {
            Ok(())
        } else {
            log::error!("operation invoked on a destroyed polygon context");
            Err(ContextError::Uninitialized)
        }
    }

    /// Append a polygon and return its position.
    ///
    /// The points are copied and their bounding box is computed in the same pass. No
    /// validation happens: polygons with fewer than three points are accepted and simply
    /// never contain anything.
    pub fn add_polygon(&mut self, points: &[Point]) -> Result<usize> {
        self.ensure_initialized()?;
        let bbox = Aabb::from_points(points.iter().copied());
        self.push(points.to_vec(), bbox)
    }

    /// Append a polygon given as parallel coordinate arrays.
    pub fn add_polygon_xy(&mut self, x: &[f64], y: &[f64]) -> Result<usize> {
        self.ensure_initialized()?;
        check_lengths(x, y)?;
        let mut bbox = Aabb::EMPTY;
        let ring = x
            .iter()
            .zip(y)
            .map(|(&x, &y)| {
                let p = Point::new(x, y);
                bbox.add_point(p);
                p
            })
            .collect();
        self.push(ring, bbox)
    }

    fn push(&mut self, ring: Vec<Point>, bbox: Aabb) -> Result<usize> {
        let index = self.polygons.len();
        log::debug!("adding polygon {index} with {} points", ring.len());
        self.polygons.push(ring);
        self.bounding_boxes.push(bbox);
        Ok(index)
    }

    /// Number of polygons.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// True if no polygon has been added.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Vertices of polygon `index`.
    pub fn polygon(&self, index: usize) -> Option<&[Point]> {
        self.polygons.get(index).map(Vec::as_slice)
    }

    /// Bounding box of polygon `index`.
    pub fn bounding_box(&self, index: usize) -> Option<Aabb> {
        self.bounding_boxes.get(index).copied()
    }

    /// Polygons with their bounding boxes, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&[Point], Aabb)> + '_ {
        self.polygons
            .iter()
            .map(Vec::as_slice)
            .zip(self.bounding_boxes.iter().copied())
    }

    /// Whether any polygon contains `p` (non-zero winding number).
    pub fn contains_point(&self, p: Point) -> Result<bool> {
        self.ensure_initialized()?;
        Ok(self.contains(p))
    }

    /// Containment of every query point, in order.
    ///
    /// Each point is tested against the polygons in insertion order: a polygon whose box
    /// does not contain the point is skipped, otherwise its winding number decides, and
    /// the first containing polygon ends the search for that point. Points are
    /// independent and are processed in parallel with the `rayon` feature.
    pub fn contains_points(&self, points: &[Point]) -> Result<Vec<bool>> {
        self.ensure_initialized()?;
        log::trace!(
            "contains_points: {} points against {} polygons",
            points.len(),
            self.polygons.len()
        );
        Ok(self.map_points(points))
    }

    /// Containment for parallel coordinate arrays, written into a caller-sized `out`.
    ///
    /// `out` is reset to `false` before any polygon is tested.
    pub fn contains_points_xy(&self, x: &[f64], y: &[f64], out: &mut [bool]) -> Result<()> {
        self.ensure_initialized()?;
        check_lengths(x, y)?;
        if out.len() != x.len() {
            log::error!(
                "containment output has {} slots for {} points",
                out.len(),
                x.len()
            );
            return Err(ContextError::OutputLengthMismatch {
                expected: x.len(),
                actual: out.len(),
            });
        }
        out.fill(false);
        self.fill_xy(x, y, out);
        Ok(())
    }

    fn contains(&self, p: Point) -> bool {
        self.polygons
            .iter()
            .zip(&self.bounding_boxes)
            .any(|(ring, bbox)| bbox.contains_point(p) && winding_number(p, ring) != 0)
    }

    #[cfg(feature = "rayon")]
    fn map_points(&self, points: &[Point]) -> Vec<bool> {
        use rayon::prelude::*;
        points.par_iter().map(|&p| self.contains(p)).collect()
    }

    #[cfg(not(feature = "rayon"))]
    fn map_points(&self, points: &[Point]) -> Vec<bool> {
        points.iter().map(|&p| self.contains(p)).collect()
    }

    #[cfg(feature = "rayon")]
    fn fill_xy(&self, x: &[f64], y: &[f64], out: &mut [bool]) {
        use rayon::prelude::*;
        out.par_iter_mut().enumerate().for_each(|(i, slot)| {
            if self.contains(Point::new(x[i], y[i])) {
                *slot = true;
            }
        });
    }

    #[cfg(not(feature = "rayon"))]
    fn fill_xy(&self, x: &[f64], y: &[f64], out: &mut [bool]) {
        for (i, slot) in out.iter_mut().enumerate() {
            if self.contains(Point::new(x[i], y[i])) {
                *slot = true;
            }
        }
    }
}

fn check_lengths(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() == y.len() {
        Ok(())
    } else {
        log::error!("coordinate arrays differ in length: {} vs {}", x.len(), y.len());
        Err(ContextError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        })
    }
}
