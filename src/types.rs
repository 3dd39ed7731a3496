// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types: configuration and geometric data model

use nalgebra::{Point2, Point3};
use serde::{Deserialize, Serialize};

/// Tuning parameters for the conversion pipeline
///
/// Defaults reproduce the reference behavior: 1 cm per pixel, 200 cm wall
/// height, Canny thresholds 50/150, a 2-pixel thickening kernel and two
/// closing passes to bridge gaps in traced wall outlines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Scale factor from pixel coordinates to output units
    pub cm_per_pixel: f64,
    /// Extrusion height in output units
    pub wall_height: f64,
    /// Apply `cm_per_pixel` to the extrusion height as well (off by default;
    /// X/Y are always scaled)
    pub scale_height: bool,
    /// Diameter in pixels of the disc kernel used to thicken edges into wall
    /// bands; the dilation radius is half this, with a one-pixel minimum
    pub wall_thickness: u8,
    /// Components with fewer pixels than this are dropped as noise
    pub min_component_area: u32,
    /// Canny low threshold
    pub canny_low: f32,
    /// Canny high threshold
    pub canny_high: f32,
    /// Number of morphological closing passes applied to the edge bands
    pub closing_iterations: u8,
    /// File-name prefix for the output archive (`<prefix>_<hash>.zip`)
    pub archive_prefix: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            cm_per_pixel: 1.0,
            wall_height: 200.0,
            scale_height: false,
            wall_thickness: 2,
            min_component_area: 20,
            canny_low: 50.0,
            canny_high: 150.0,
            closing_iterations: 2,
            archive_prefix: "map_walls".to_string(),
        }
    }
}

/// A closed boundary traced from a component mask: one outer ring plus the
/// hole rings directly nested inside it
///
/// Rings are ordered point sequences in pixel coordinates; the last point
/// implicitly connects back to the first. Nesting is two-level only: holes
/// never contain further outer rings of the same polygon.
#[derive(Debug, Clone)]
pub struct TracedPolygon {
    pub outer: Vec<Point2<f64>>,
    pub holes: Vec<Vec<Point2<f64>>>,
}

/// The boolean union of all traced polygons of one component
///
/// Exactly one exterior ring (counter-clockwise, positive signed area) and
/// zero or more hole rings (clockwise). Every ring has at least 3 distinct
/// vertices; degenerate rings are filtered during merging.
#[derive(Debug, Clone)]
pub struct MergedPolygon {
    pub exterior: Vec<Point2<f64>>,
    pub holes: Vec<Vec<Point2<f64>>>,
}

/// Extruded wall geometry for a single component
///
/// Each boundary edge contributes one vertical quad: 4 vertices and 2
/// triangles. Face indices are 0-based and always reference this part's own
/// vertex list; parts never share vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct WallPart {
    pub vertices: Vec<Point3<f64>>,
    pub faces: Vec<[u32; 3]>,
}

impl WallPart {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    pub fn with_capacity(edge_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(edge_count * 4),
            faces: Vec::with_capacity(edge_count * 2),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl Default for WallPart {
    fn default() -> Self {
        Self::new()
    }
}
