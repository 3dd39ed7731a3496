// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boolean union of traced polygons into one polygon-with-holes
//!
//! Raw per-pixel contours from adjacent wall segments routinely double-trace
//! shared boundaries; the union collapses them into a single
//! non-self-intersecting exterior-plus-holes representation suitable for
//! extrusion.

use crate::types::{MergedPolygon, TracedPolygon};
use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;
use nalgebra::Point2;

/// Rings with absolute area below this are considered degenerate
const MIN_RING_AREA: f64 = 1e-10;

/// Cross-product threshold for collinear point removal
const COLLINEAR_EPSILON: f64 = 1e-9;

/// Union all traced polygons of one component into a single merged polygon
///
/// Float coordinates in, float coordinates out; no snapping beyond f64
/// precision. If the union produces several disjoint shapes the one with the
/// largest exterior area is kept. Returns `None` when no usable (non
/// degenerate) polygon remains.
pub fn union_polygons(polygons: &[TracedPolygon]) -> Option<MergedPolygon> {
    let valid: Vec<&TracedPolygon> = polygons
        .iter()
        .filter(|p| is_valid_ring(&p.outer))
        .collect();

    let (first, rest) = valid.split_first()?;

    if rest.is_empty() {
        return Some(normalize(first.outer.clone(), first.holes.clone()));
    }

    // Union one polygon at a time. Folding keeps every input filled under the
    // even-odd rule; flattening all clips into one region would cancel areas
    // covered by an even number of overlapping inputs.
    let mut shapes = Vec::new();
    let mut acc = polygon_paths(first);
    for polygon in rest {
        shapes = acc.overlay(&polygon_paths(polygon), OverlayRule::Union, FillRule::EvenOdd);
        acc = shapes.iter().flat_map(|shape| shape.iter().cloned()).collect();
    }

    largest_shape(&shapes).map(|shape| {
        let exterior = path_to_ring(&shape[0]);
        let holes = shape.iter().skip(1).map(|path| path_to_ring(path)).collect();
        normalize(exterior, holes)
    })
}

/// Compute the signed area of a ring
/// Positive = counter-clockwise, negative = clockwise
pub fn signed_area(ring: &[Point2<f64>]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }

    let n = ring.len();
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += ring[i].x * ring[j].y;
        area -= ring[j].x * ring[i].y;
    }
    area * 0.5
}

/// Ensure counter-clockwise winding (positive signed area)
pub fn ensure_ccw(ring: &[Point2<f64>]) -> Vec<Point2<f64>> {
    if signed_area(ring) < 0.0 {
        ring.iter().rev().cloned().collect()
    } else {
        ring.to_vec()
    }
}

/// Ensure clockwise winding (for hole rings)
pub fn ensure_cw(ring: &[Point2<f64>]) -> Vec<Point2<f64>> {
    if signed_area(ring) > 0.0 {
        ring.iter().rev().cloned().collect()
    } else {
        ring.to_vec()
    }
}

/// Remove consecutive duplicates and collinear points from a ring
pub fn simplify_ring(ring: &[Point2<f64>]) -> Vec<Point2<f64>> {
    if ring.len() <= 3 {
        return ring.to_vec();
    }

    let n = ring.len();
    let mut result = Vec::with_capacity(n);

    for i in 0..n {
        let prev = &ring[(i + n - 1) % n];
        let curr = &ring[i];
        let next = &ring[(i + 1) % n];

        if (curr.x - prev.x).abs() < f64::EPSILON && (curr.y - prev.y).abs() < f64::EPSILON {
            continue;
        }

        let cross = (curr.x - prev.x) * (next.y - prev.y) - (curr.y - prev.y) * (next.x - prev.x);
        if cross.abs() > COLLINEAR_EPSILON {
            result.push(*curr);
        }
    }

    if result.len() < 3 {
        return ring.to_vec();
    }
    result
}

/// A ring is usable when it has at least 3 points and non-negligible area
pub fn is_valid_ring(ring: &[Point2<f64>]) -> bool {
    ring.len() >= 3 && signed_area(ring).abs() > MIN_RING_AREA
}

/// Normalize a merged shape: simplify rings, drop degenerates, enforce
/// counter-clockwise exterior and clockwise holes
fn normalize(exterior: Vec<Point2<f64>>, holes: Vec<Vec<Point2<f64>>>) -> MergedPolygon {
    let exterior = ensure_ccw(&simplify_ring(&exterior));
    let holes = holes
        .iter()
        .map(|hole| simplify_ring(hole))
        .filter(|hole| is_valid_ring(hole))
        .map(|hole| ensure_cw(&hole))
        .collect();

    MergedPolygon { exterior, holes }
}

fn polygon_paths(polygon: &TracedPolygon) -> Vec<Vec<[f64; 2]>> {
    let mut paths = Vec::with_capacity(1 + polygon.holes.len());
    paths.push(ring_to_path(&polygon.outer));
    for hole in &polygon.holes {
        if hole.len() >= 3 {
            paths.push(ring_to_path(hole));
        }
    }
    paths
}

fn ring_to_path(ring: &[Point2<f64>]) -> Vec<[f64; 2]> {
    ring.iter().map(|p| [p.x, p.y]).collect()
}

fn path_to_ring(path: &[[f64; 2]]) -> Vec<Point2<f64>> {
    path.iter().map(|p| Point2::new(p[0], p[1])).collect()
}

/// Pick the shape with the largest exterior area from an overlay result
///
/// i_overlay returns a list of shapes; each shape is a list of contours where
/// the first is the outer boundary and the rest are holes.
fn largest_shape(shapes: &[Vec<Vec<[f64; 2]>>]) -> Option<&Vec<Vec<[f64; 2]>>> {
    shapes
        .iter()
        .filter(|shape| !shape.is_empty())
        .max_by(|a, b| {
            let area_a = signed_area(&path_to_ring(&a[0])).abs();
            let area_b = signed_area(&path_to_ring(&b[0])).abs();
            area_a.partial_cmp(&area_b).unwrap_or(std::cmp::Ordering::Equal)
        })
}
