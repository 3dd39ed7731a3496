// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boundary contour tracing with outer/hole hierarchy

use crate::segment::Component;
use crate::types::TracedPolygon;
use imageproc::contours::{find_contours, BorderType, Contour};
use nalgebra::Point2;

/// Trace the boundary rings of a component mask
///
/// Every outer border becomes one [`TracedPolygon`]; hole borders are
/// attached to the outer ring they are directly nested in. The hierarchy is
/// two-level: hole-in-hole nesting inside a single component cannot occur,
/// since the component is one connected region.
///
/// An empty result means the component has no well-formed closed boundary
/// and should be skipped.
pub fn trace_component(component: &Component) -> Vec<TracedPolygon> {
    let contours: Vec<Contour<i32>> = find_contours(&component.mask);

    let mut polygons = Vec::new();
    for (idx, contour) in contours.iter().enumerate() {
        if contour.border_type != BorderType::Outer {
            continue;
        }

        let holes = contours
            .iter()
            .filter(|c| c.border_type == BorderType::Hole && c.parent == Some(idx))
            .map(|c| contour_points(c))
            .collect();

        polygons.push(TracedPolygon {
            outer: contour_points(contour),
            holes,
        });
    }

    polygons
}

fn contour_points(contour: &Contour<i32>) -> Vec<Point2<f64>> {
    contour
        .points
        .iter()
        .map(|p| Point2::new(p.x as f64, p.y as f64))
        .collect()
}
