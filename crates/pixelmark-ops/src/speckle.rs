// SPDX-License-Identifier: MIT
//
// Lee speckle filter — adaptive local-statistics despeckling, the one
// hand-written kernel in the benchmark suite.

use image::{GrayImage, Luma};

/// Adaptive Lee speckle filter over a single-channel 8-bit image.
///
/// A classic SAR/remote-sensing despeckling filter: each output pixel blends
/// the local window mean with the original value, weighted by how much the
/// window's variance stands out against the global image variance. Flat
/// regions collapse toward the local mean; detailed regions are preserved.
///
/// The per-pixel window rescan is O(W·H·R²) on purpose — the harness
/// measures the cost of the naive kernel, so no separable or sliding-window
/// optimisation is applied.
#[derive(Debug, Clone, Copy)]
pub struct LeeFilter {
    radius: u32,
}

impl LeeFilter {
    /// Default half-window radius (3 gives the classic 7x7 window).
    pub const DEFAULT_RADIUS: u32 = 3;

    /// Create a filter with the given half-window radius.
    pub fn new(radius: u32) -> Self {
        Self { radius }
    }

    /// Half-window radius in pixels.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Apply the filter, returning a freshly allocated output image.
    ///
    /// Windows are clamped at the image borders (border windows are smaller,
    /// never reflected or padded). Local and global variances are population
    /// variances (divide by N). All intermediate arithmetic is f64; the
    /// result is rounded with [`f64::round`] (ties away from zero) and
    /// clamped to [0, 255].
    ///
    /// A perfectly flat input (zero global variance) is returned unchanged;
    /// the blend weight would otherwise be 0/0. The input must be non-empty.
    pub fn apply(&self, input: &GrayImage) -> GrayImage {
        let (w, h) = input.dimensions();
        let data = input.as_raw();
        let pixel_count = (w as u64 * h as u64) as f64;

        let mut sum = 0.0f64;
        let mut sum_sq = 0.0f64;
        for &v in data.iter() {
            let v = f64::from(v);
            sum += v;
            sum_sq += v * v;
        }
        let global_mean = sum / pixel_count;
        let global_var = sum_sq / pixel_count - global_mean * global_mean;

        if global_var == 0.0 {
            return input.clone();
        }

        let r = i64::from(self.radius);
        let mut out = GrayImage::new(w, h);

        for y in 0..h {
            let y0 = (i64::from(y) - r).max(0) as u32;
            let y1 = (i64::from(y) + r + 1).min(i64::from(h)) as u32;

            for x in 0..w {
                let x0 = (i64::from(x) - r).max(0) as u32;
                let x1 = (i64::from(x) + r + 1).min(i64::from(w)) as u32;

                let mut local_sum = 0.0f64;
                let mut local_sq = 0.0f64;
                let mut count = 0u32;

                for wy in y0..y1 {
                    let row = (wy * w) as usize;
                    for wx in x0..x1 {
                        let v = f64::from(data[row + wx as usize]);
                        local_sum += v;
                        local_sq += v * v;
                        count += 1;
                    }
                }

                let n = f64::from(count);
                let local_mean = local_sum / n;
                let local_var = local_sq / n - local_mean * local_mean;
                let weight = local_var / (local_var + global_var);

                let centre = f64::from(data[(y * w + x) as usize]);
                let val = local_mean + weight * (centre - local_mean);
                out.put_pixel(x, y, Luma([val.round().clamp(0.0, 255.0) as u8]));
            }
        }

        out
    }
}

impl Default for LeeFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RADIUS)
    }
}
