// SPDX-License-Identifier: MIT
//
// Gaussian blur, delegating to imageproc.

use image::RgbImage;
use imageproc::filter::gaussian_blur_f32;

/// Blur a color image with a Gaussian kernel of the given standard deviation.
pub fn gaussian_blur(input: &RgbImage, sigma: f32) -> RgbImage {
    gaussian_blur_f32(input, sigma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn blur_preserves_dimensions() {
        let img = RgbImage::from_pixel(24, 16, Rgb([90, 120, 200]));
        let blurred = gaussian_blur(&img, 1.0);
        assert_eq!(blurred.dimensions(), (24, 16));
    }

    #[test]
    fn blur_of_uniform_image_stays_uniform() {
        let img = RgbImage::from_pixel(16, 16, Rgb([127, 127, 127]));
        let blurred = gaussian_blur(&img, 1.0);
        let center = blurred.get_pixel(8, 8);
        // Away from rounding, a constant image convolved with a normalised
        // kernel is unchanged.
        for c in 0..3 {
            assert!((center.0[c] as i16 - 127).abs() <= 1);
        }
    }
}
