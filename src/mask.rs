// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall mask construction: edges → bands → closed bands

use crate::image_ops::{canny_edges, dilate_disc, morphological_close};
use crate::types::ConvertConfig;
use image::{DynamicImage, GrayImage};

/// Build a binary wall mask from a decoded color image
///
/// The mask has the same dimensions as the input; 255 marks wall pixels,
/// 0 marks background. Thin Canny edges are thickened into bands by a disc
/// dilation whose diameter is `wall_thickness` (radius half that, at least
/// one pixel), then closed to bridge small gaps so wall cross-sections come
/// out as solid regions.
pub fn build_wall_mask(image: &DynamicImage, config: &ConvertConfig) -> GrayImage {
    let gray = image.to_luma8();
    let edges = canny_edges(&gray, config.canny_low, config.canny_high);
    let radius = u8::max(config.wall_thickness / 2, 1);
    let bands = dilate_disc(&edges, radius);
    morphological_close(&bands, 1, config.closing_iterations)
}
