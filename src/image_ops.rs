// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Image processing primitives for wall mask construction

use image::GrayImage;
use imageproc::distance_transform::Norm;

/// Apply Canny edge detection
pub fn canny_edges(image: &GrayImage, low_threshold: f32, high_threshold: f32) -> GrayImage {
    imageproc::edges::canny(image, low_threshold, high_threshold)
}

/// Morphological dilation with a disc (elliptical) structuring element
pub fn dilate_disc(image: &GrayImage, radius: u8) -> GrayImage {
    imageproc::morphology::dilate(image, Norm::L2, radius)
}

/// Morphological dilation with a square structuring element
pub fn dilate_square(image: &GrayImage, radius: u8) -> GrayImage {
    imageproc::morphology::dilate(image, Norm::LInf, radius)
}

/// Morphological erosion with a square structuring element
pub fn erode_square(image: &GrayImage, radius: u8) -> GrayImage {
    imageproc::morphology::erode(image, Norm::LInf, radius)
}

/// Morphological closing with a square structuring element, repeated
///
/// All dilation passes run before all erosion passes, so `iterations` passes
/// bridge gaps up to roughly `2 * radius * iterations` pixels wide while
/// restoring the original band width afterwards.
pub fn morphological_close(image: &GrayImage, radius: u8, iterations: u8) -> GrayImage {
    let mut result = image.clone();
    for _ in 0..iterations {
        result = dilate_square(&result, radius);
    }
    for _ in 0..iterations {
        result = erode_square(&result, radius);
    }
    result
}

/// Count foreground (non-zero) pixels
pub fn count_nonzero(image: &GrayImage) -> u32 {
    image.pixels().filter(|p| p.0[0] > 0).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_count_nonzero() {
        let mut img = GrayImage::new(4, 4);
        img.put_pixel(1, 1, Luma([255]));
        img.put_pixel(2, 3, Luma([255]));
        assert_eq!(count_nonzero(&img), 2);
    }

    #[test]
    fn test_close_bridges_small_gap() {
        // Two horizontal segments separated by a 2px gap
        let mut img = GrayImage::new(20, 5);
        for x in 2..8 {
            img.put_pixel(x, 2, Luma([255]));
        }
        for x in 10..16 {
            img.put_pixel(x, 2, Luma([255]));
        }

        let closed = morphological_close(&img, 1, 2);

        // The gap at x=8..10 must be filled
        assert_eq!(closed.get_pixel(8, 2).0[0], 255);
        assert_eq!(closed.get_pixel(9, 2).0[0], 255);
    }

    #[test]
    fn test_close_preserves_empty_image() {
        let img = GrayImage::new(10, 10);
        let closed = morphological_close(&img, 1, 2);
        assert_eq!(count_nonzero(&closed), 0);
    }
}
