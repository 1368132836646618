// SPDX-License-Identifier: MIT
//
// Rotation — lossless 90-degree fast path and arbitrary-angle rotation onto
// an expanded canvas.

use image::{Rgb, RgbImage};
use imageproc::geometric_transformations::{warp_into, Interpolation, Projection};

/// Rotate 90 degrees clockwise (lossless, dimensions swap).
pub fn rotate90(input: &RgbImage) -> RgbImage {
    image::imageops::rotate90(input)
}

/// Rotate by an arbitrary angle (degrees, clockwise) with bilinear
/// interpolation, expanding the canvas so no source pixel is cropped.
/// Uncovered corners are filled with black.
pub fn rotate_expand(input: &RgbImage, degrees: f32) -> RgbImage {
    let (w, h) = input.dimensions();
    let theta = degrees.to_radians();
    let (sin_t, cos_t) = (theta.sin().abs(), theta.cos().abs());

    // Bounding box of the rotated rectangle.
    let new_w = (w as f32 * cos_t + h as f32 * sin_t).ceil() as u32;
    let new_h = (w as f32 * sin_t + h as f32 * cos_t).ceil() as u32;

    // Map the source centre onto the new canvas centre, rotating about it.
    let projection = Projection::translate(new_w as f32 / 2.0, new_h as f32 / 2.0)
        * Projection::rotate(theta)
        * Projection::translate(-(w as f32) / 2.0, -(h as f32) / 2.0);

    let mut out = RgbImage::new(new_w, new_h);
    warp_into(
        input,
        &projection,
        Interpolation::Bilinear,
        Rgb([0u8, 0, 0]),
        &mut out,
    );
    out
}
