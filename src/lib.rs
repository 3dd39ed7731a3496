// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor plan image to extruded 3D wall meshes
//!
//! This crate provides a complete pipeline for:
//! 1. Building a binary wall mask from a raster floor plan (Canny edges
//!    thickened and closed into solid bands)
//! 2. Segmenting the mask into connected wall components
//! 3. Tracing each component's outer and hole boundary contours
//! 4. Merging overlapping contours via 2D boolean union
//! 5. Extruding each boundary ring into a vertical wall mesh
//! 6. Packaging per-component OBJ documents into a content-addressed zip
//!    archive with an idempotent build cache
//!
//! # Usage
//!
//! ```rust,ignore
//! use floorplan_walls::{convert_floor_plan, ConvertConfig, FsStore};
//!
//! let bytes = std::fs::read("floorplan.png")?;
//! let store = FsStore::new("static", "mcp_temp", "map_walls")?;
//! let archive_path = convert_floor_plan(&bytes, &ConvertConfig::default(), &store)?;
//! println!("walls archived at {}", archive_path.display());
//! ```

pub mod contour;
pub mod error;
pub mod extrude;
pub mod image_ops;
pub mod mask;
pub mod merge;
pub mod obj;
pub mod pipeline;
pub mod segment;
pub mod store;
pub mod types;

// Re-export commonly used types and functions
pub use contour::trace_component;
pub use error::{Error, Result};
pub use extrude::extrude_walls;
pub use mask::build_wall_mask;
pub use merge::union_polygons;
pub use obj::serialize_obj;
pub use pipeline::{convert_floor_plan, extract_wall_parts};
pub use segment::{label_components, Component};
pub use store::{encode_archive, ArtifactStore, CacheKey, FsStore};
pub use types::{ConvertConfig, MergedPolygon, TracedPolygon, WallPart};
