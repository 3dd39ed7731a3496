// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wavefront OBJ serialization of wall parts

use crate::types::WallPart;

/// Render a wall part as a self-contained OBJ document
///
/// One `v x y z` line per vertex with 4 decimal digits, then one `f a b c`
/// line per triangle. Face references are 1-indexed per the OBJ convention.
pub fn serialize_obj(part: &WallPart) -> String {
    let mut out = String::with_capacity(part.vertex_count() * 32 + part.triangle_count() * 16);

    for v in &part.vertices {
        out.push_str(&format!("v {:.4} {:.4} {:.4}\n", v.x, v.y, v.z));
    }
    for face in &part.faces {
        out.push_str(&format!("f {} {} {}\n", face[0] + 1, face[1] + 1, face[2] + 1));
    }

    out
}
