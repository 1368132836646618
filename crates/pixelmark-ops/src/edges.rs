// SPDX-License-Identifier: MIT
//
// Edge detection — Sobel gradient magnitude and Canny, via imageproc.

use image::{GrayImage, Luma};
use imageproc::edges::canny;
use imageproc::gradients::{horizontal_sobel, vertical_sobel};

/// Sobel gradient magnitude of a grayscale image, saturated into u8 range.
///
/// Magnitude is `sqrt(gx^2 + gy^2)`; values above 255 saturate rather than
/// being rescaled, matching the sibling implementations of this harness.
pub fn sobel(input: &GrayImage) -> GrayImage {
    let gx = horizontal_sobel(input);
    let gy = vertical_sobel(input);

    GrayImage::from_fn(input.width(), input.height(), |x, y| {
        let dx = f64::from(gx.get_pixel(x, y).0[0]);
        let dy = f64::from(gy.get_pixel(x, y).0[0]);
        let magnitude = (dx * dx + dy * dy).sqrt();
        Luma([magnitude.min(255.0) as u8])
    })
}

/// Canny edge detection with the given hysteresis thresholds.
pub fn canny_edges(input: &GrayImage, low: f32, high: f32) -> GrayImage {
    canny(input, low, high)
}
