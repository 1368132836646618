// SPDX-License-Identifier: MIT
//
// Benchmark registry — the ordered table of measured operations.

use image::{DynamicImage, GrayImage, RgbImage};
use pixelmark_core::{InputKind, OpParams};
use pixelmark_ops as ops;
use pixelmark_ops::speckle::LeeFilter;

/// The source images, loaded and derived once per run and shared read-only
/// across all benchmarks.
pub struct SourceImages {
    /// The 3-channel image as decoded.
    pub color: RgbImage,
    /// Grayscale derivative of `color`.
    pub gray: GrayImage,
}

impl SourceImages {
    /// Decode-independent constructor: derives the grayscale input from the
    /// color image.
    pub fn new(color: RgbImage) -> Self {
        let gray = ops::grayscale(&color);
        Self { color, gray }
    }
}

/// Fixed enumeration of the operations the harness measures. Each kind is
/// bound to one pure transform; there is no dispatch beyond this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    /// Library color inversion.
    Invert,
    /// Hand-rolled per-channel inversion loop.
    InvertManual,
    /// Color-to-luma conversion.
    Grayscale,
    /// Gaussian blur.
    Blur,
    /// Sobel gradient magnitude.
    Sobel,
    /// Canny edge detection.
    Canny,
    /// Lossless 90-degree rotation.
    Rotate90,
    /// Arbitrary-angle rotation onto an expanded canvas.
    RotateArbitrary,
    /// Hand-written Lee speckle filter.
    Lee,
}

impl OpKind {
    /// Which input variant this operation consumes.
    pub fn input_kind(self) -> InputKind {
        match self {
            OpKind::Invert
            | OpKind::InvertManual
            | OpKind::Grayscale
            | OpKind::Blur
            | OpKind::Rotate90
            | OpKind::RotateArbitrary => InputKind::Color,
            OpKind::Sobel | OpKind::Canny | OpKind::Lee => InputKind::Grayscale,
        }
    }

    /// Run the transform once, producing a freshly allocated output image.
    /// This call is exactly what the trial loop brackets with the clock.
    pub fn execute(self, src: &SourceImages, params: &OpParams) -> DynamicImage {
        match self {
            OpKind::Invert => DynamicImage::ImageRgb8(ops::invert(&src.color)),
            OpKind::InvertManual => DynamicImage::ImageRgb8(ops::invert_manual(&src.color)),
            OpKind::Grayscale => DynamicImage::ImageLuma8(ops::grayscale(&src.color)),
            OpKind::Blur => {
                DynamicImage::ImageRgb8(ops::gaussian_blur(&src.color, params.blur_sigma))
            }
            OpKind::Sobel => DynamicImage::ImageLuma8(ops::sobel(&src.gray)),
            OpKind::Canny => DynamicImage::ImageLuma8(ops::canny_edges(
                &src.gray,
                params.canny_low,
                params.canny_high,
            )),
            OpKind::Rotate90 => DynamicImage::ImageRgb8(ops::rotate90(&src.color)),
            OpKind::RotateArbitrary => {
                DynamicImage::ImageRgb8(ops::rotate_expand(&src.color, params.rotate_degrees))
            }
            OpKind::Lee => {
                DynamicImage::ImageLuma8(LeeFilter::new(params.lee_radius).apply(&src.gray))
            }
        }
    }
}

/// One registered benchmark: identity plus the operation it measures.
#[derive(Debug, Clone, Copy)]
pub struct Benchmark {
    /// Logical operation identifier, shared across language implementations.
    pub task: &'static str,
    /// Output-artifact identifier (filename stem).
    pub slug: &'static str,
    /// Human-readable description for the structured report.
    pub description: &'static str,
    /// Input variant consumed by the transform.
    pub input: InputKind,
    /// The bound operation.
    pub op: OpKind,
}

/// The benchmark table, in declaration (execution) order.
pub fn registry() -> Vec<Benchmark> {
    fn entry(task: &'static str, slug: &'static str, description: &'static str, op: OpKind) -> Benchmark {
        Benchmark {
            task,
            slug,
            description,
            input: op.input_kind(),
            op,
        }
    }

    vec![
        entry(
            "invert",
            "rs-invert",
            "image::imageops::colorops::invert on a fresh clone",
            OpKind::Invert,
        ),
        entry(
            "invert",
            "rs-invert-manual",
            "hand-rolled per-channel 255 - v loop",
            OpKind::InvertManual,
        ),
        entry(
            "grayscale",
            "rs-grayscale",
            "image::imageops::grayscale",
            OpKind::Grayscale,
        ),
        entry(
            "blur",
            "rs-blur",
            "imageproc gaussian_blur_f32, sigma 1.0",
            OpKind::Blur,
        ),
        entry(
            "edge_detect_sobel",
            "rs-sobel",
            "imageproc Sobel gradients, magnitude clamped to u8",
            OpKind::Sobel,
        ),
        entry(
            "edge_detect_canny",
            "rs-canny",
            "imageproc canny, thresholds 50/150",
            OpKind::Canny,
        ),
        entry(
            "rotate_90",
            "rs-rotate90",
            "image::imageops::rotate90",
            OpKind::Rotate90,
        ),
        entry(
            "rotate_arbitrary",
            "rs-rotate45",
            "45-degree bilinear rotation onto an expanded canvas",
            OpKind::RotateArbitrary,
        ),
        entry(
            "lee_filter",
            "rs-lee",
            "hand-written Lee speckle filter, 7x7 window",
            OpKind::Lee,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::collections::HashSet;

    fn small_sources() -> SourceImages {
        let color = RgbImage::from_fn(16, 12, |x, y| {
            Rgb([(x * 16) as u8, (y * 20) as u8, ((x + y) * 8) as u8])
        });
        SourceImages::new(color)
    }

    #[test]
    fn slugs_are_unique() {
        let regs = registry();
        let slugs: HashSet<_> = regs.iter().map(|b| b.slug).collect();
        assert_eq!(slugs.len(), regs.len());
    }

    #[test]
    fn declaration_order_is_stable() {
        let tasks: Vec<_> = registry().iter().map(|b| b.task).collect();
        assert_eq!(
            tasks,
            vec![
                "invert",
                "invert",
                "grayscale",
                "blur",
                "edge_detect_sobel",
                "edge_detect_canny",
                "rotate_90",
                "rotate_arbitrary",
                "lee_filter",
            ]
        );
    }

    #[test]
    fn input_kind_matches_table() {
        for bench in registry() {
            assert_eq!(bench.input, bench.op.input_kind(), "{}", bench.slug);
        }
    }

    #[test]
    fn every_op_executes_on_a_small_image() {
        let src = small_sources();
        let params = OpParams::default();
        for bench in registry() {
            let out = bench.op.execute(&src, &params);
            assert!(out.width() > 0 && out.height() > 0, "{}", bench.slug);
        }
    }

    #[test]
    fn rotate90_output_swaps_dimensions() {
        let src = small_sources();
        let out = OpKind::Rotate90.execute(&src, &OpParams::default());
        assert_eq!((out.width(), out.height()), (12, 16));
    }

    #[test]
    fn grayscale_ops_consume_the_derived_input() {
        let src = small_sources();
        let out = OpKind::Lee.execute(&src, &OpParams::default());
        assert_eq!((out.width(), out.height()), src.gray.dimensions());
    }
}
