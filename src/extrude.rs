// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Extrusion of merged polygons into vertical wall meshes
//!
//! Each boundary edge becomes one vertical quad (4 vertices, 2 triangles).
//! Ring orientation is normalized here by signed-area check before any
//! triangle is emitted, so winding consistency never depends on the
//! orientation convention of the upstream contour tracer.

use crate::merge::{ensure_ccw, ensure_cw};
use crate::types::{ConvertConfig, MergedPolygon, WallPart};
use nalgebra::{Point2, Point3};

/// Triangle winding for a ring's wall quads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RingWinding {
    /// Outward-facing quads: triangles (0,1,2) and (2,3,0)
    Exterior,
    /// Reversed, inward-facing quads: triangles (0,2,1) and (0,3,2)
    Hole,
}

/// Extrude one merged polygon into a wall part
///
/// The exterior ring is walked counter-clockwise with outward winding; every
/// hole ring is walked clockwise with reversed winding so its wall faces the
/// opposite direction. `cm_per_pixel` scales X/Y; the extrusion height is
/// scaled only when `scale_height` is set.
///
/// Returns `None` when the exterior has fewer than 3 points.
pub fn extrude_walls(merged: &MergedPolygon, config: &ConvertConfig) -> Option<WallPart> {
    if merged.exterior.len() < 3 {
        return None;
    }

    let height = if config.scale_height {
        config.wall_height * config.cm_per_pixel
    } else {
        config.wall_height
    };

    let edge_count: usize = merged.exterior.len()
        + merged
            .holes
            .iter()
            .filter(|h| h.len() >= 3)
            .map(|h| h.len())
            .sum::<usize>();
    let mut part = WallPart::with_capacity(edge_count);

    let exterior = ensure_ccw(&merged.exterior);
    extrude_ring(
        &mut part,
        &exterior,
        height,
        config.cm_per_pixel,
        RingWinding::Exterior,
    );

    for hole in &merged.holes {
        if hole.len() < 3 {
            continue;
        }
        let hole = ensure_cw(hole);
        extrude_ring(&mut part, &hole, height, config.cm_per_pixel, RingWinding::Hole);
    }

    Some(part)
}

/// Emit one quad per boundary edge of a closed ring
///
/// The vertex offset advances by 4 per edge so faces always index into the
/// part's own vertex list.
fn extrude_ring(
    part: &mut WallPart,
    ring: &[Point2<f64>],
    height: f64,
    scale: f64,
    winding: RingWinding,
) {
    let n = ring.len();
    for j in 0..n {
        let p0 = &ring[j];
        let p1 = &ring[(j + 1) % n];

        let offset = part.vertices.len() as u32;
        part.vertices.push(Point3::new(p0.x * scale, p0.y * scale, 0.0));
        part.vertices.push(Point3::new(p1.x * scale, p1.y * scale, 0.0));
        part.vertices.push(Point3::new(p1.x * scale, p1.y * scale, height));
        part.vertices.push(Point3::new(p0.x * scale, p0.y * scale, height));

        match winding {
            RingWinding::Exterior => {
                part.faces.push([offset, offset + 1, offset + 2]);
                part.faces.push([offset + 2, offset + 3, offset]);
            }
            RingWinding::Hole => {
                part.faces.push([offset, offset + 2, offset + 1]);
                part.faces.push([offset, offset + 3, offset + 2]);
            }
        }
    }
}
