// SPDX-License-Identifier: MIT
//
// Point operations — color inversion and grayscale conversion.

use image::{GrayImage, RgbImage};

/// Invert every channel of every pixel via the `image` crate's built-in.
pub fn invert(input: &RgbImage) -> RgbImage {
    let mut out = input.clone();
    image::imageops::colorops::invert(&mut out);
    out
}

/// Invert every channel with an explicit per-pixel loop.
///
/// Deliberately kept alongside [`invert`] so the harness can compare the
/// library routine against the obvious hand-written version.
pub fn invert_manual(input: &RgbImage) -> RgbImage {
    let mut out = input.clone();
    for pixel in out.pixels_mut() {
        pixel.0[0] = 255 - pixel.0[0];
        pixel.0[1] = 255 - pixel.0[1];
        pixel.0[2] = 255 - pixel.0[2];
    }
    out
}

/// Convert a color image to grayscale (luma).
pub fn grayscale(input: &RgbImage) -> GrayImage {
    image::imageops::grayscale(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn gradient_image(w: u32, h: u32) -> RgbImage {
        RgbImage::from_fn(w, h, |x, y| {
            Rgb([(x * 7 % 256) as u8, (y * 11 % 256) as u8, ((x + y) % 256) as u8])
        })
    }

    #[test]
    fn invert_builtin_and_manual_agree() {
        let img = gradient_image(16, 12);
        assert_eq!(invert(&img), invert_manual(&img));
    }

    #[test]
    fn invert_is_an_involution() {
        let img = gradient_image(8, 8);
        assert_eq!(invert(&invert(&img)), img);
    }

    #[test]
    fn invert_does_not_mutate_its_input() {
        let img = gradient_image(8, 8);
        let copy = img.clone();
        let _ = invert(&img);
        let _ = invert_manual(&img);
        assert_eq!(img, copy);
    }

    #[test]
    fn grayscale_has_one_channel_and_same_dimensions() {
        let img = gradient_image(20, 10);
        let gray = grayscale(&img);
        assert_eq!(gray.dimensions(), (20, 10));
    }
}
