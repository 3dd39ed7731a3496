// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connected component segmentation of the wall mask

use image::{GrayImage, Luma};
use imageproc::region_labelling::{connected_components, Connectivity};
use rustc_hash::FxHashMap;

/// One labeled wall region of the mask
///
/// `mask` has the full image dimensions with 255 on this component's pixels
/// only, so downstream contour tracing keeps original pixel coordinates.
#[derive(Debug, Clone)]
pub struct Component {
    pub label: u32,
    pub mask: GrayImage,
    pub pixel_count: u32,
}

/// Label 8-connected foreground regions and drop those below `min_area`
///
/// Label 0 is background and never emitted. Components are returned in
/// ascending label order, which is the raster-scan discovery order of the
/// labeling pass — stable for a fixed mask.
pub fn label_components(mask: &GrayImage, min_area: u32) -> Vec<Component> {
    let labeled = connected_components(mask, Connectivity::Eight, Luma([0u8]));

    let mut counts: FxHashMap<u32, u32> = FxHashMap::default();
    for pixel in labeled.pixels() {
        let label = pixel.0[0];
        if label > 0 {
            *counts.entry(label).or_insert(0) += 1;
        }
    }

    let mut surviving: Vec<u32> = counts
        .iter()
        .filter(|(_, &count)| count >= min_area)
        .map(|(&label, _)| label)
        .collect();
    surviving.sort_unstable();

    let index_of: FxHashMap<u32, usize> = surviving
        .iter()
        .enumerate()
        .map(|(idx, &label)| (label, idx))
        .collect();

    let mut components: Vec<Component> = surviving
        .iter()
        .map(|&label| Component {
            label,
            mask: GrayImage::new(mask.width(), mask.height()),
            pixel_count: counts[&label],
        })
        .collect();

    for (x, y, pixel) in labeled.enumerate_pixels() {
        if let Some(&idx) = index_of.get(&pixel.0[0]) {
            components[idx].mask.put_pixel(x, y, Luma([255]));
        }
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_with_blobs() -> GrayImage {
        let mut mask = GrayImage::new(40, 20);
        // Blob A: 6x5 = 30 pixels
        for x in 2..8 {
            for y in 2..7 {
                mask.put_pixel(x, y, Luma([255]));
            }
        }
        // Blob B: 3x3 = 9 pixels (below the default threshold of 20)
        for x in 20..23 {
            for y in 10..13 {
                mask.put_pixel(x, y, Luma([255]));
            }
        }
        mask
    }

    #[test]
    fn test_small_components_are_dropped() {
        let components = label_components(&mask_with_blobs(), 20);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].pixel_count, 30);
    }

    #[test]
    fn test_all_components_survive_with_low_threshold() {
        let components = label_components(&mask_with_blobs(), 1);
        assert_eq!(components.len(), 2);
        // Ascending label order
        assert!(components[0].label < components[1].label);
    }

    #[test]
    fn test_component_mask_isolates_pixels() {
        let components = label_components(&mask_with_blobs(), 1);
        let first = &components[0];
        // The first blob's pixels are present
        assert_eq!(first.mask.get_pixel(3, 3).0[0], 255);
        // The second blob's pixels are not
        assert_eq!(first.mask.get_pixel(21, 11).0[0], 0);
    }

    #[test]
    fn test_empty_mask_yields_no_components() {
        let mask = GrayImage::new(16, 16);
        assert!(label_components(&mask, 1).is_empty());
    }

    #[test]
    fn test_diagonal_pixels_connect_with_eight_connectivity() {
        let mut mask = GrayImage::new(8, 8);
        mask.put_pixel(1, 1, Luma([255]));
        mask.put_pixel(2, 2, Luma([255]));
        mask.put_pixel(3, 3, Luma([255]));
        let components = label_components(&mask, 1);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].pixel_count, 3);
    }
}
