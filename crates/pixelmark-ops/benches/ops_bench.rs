// SPDX-License-Identifier: MIT
//
// Criterion benchmarks for the pixelmark-ops transforms. These exist for
// kernel development; the cross-language numbers come from the `pixelmark`
// binary itself.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{GrayImage, Luma, Rgb, RgbImage};

use pixelmark_ops::{gaussian_blur, sobel, LeeFilter};

/// Deterministic pseudo-noise grayscale image (LCG seeded, no rand dep).
fn noisy_gray(w: u32, h: u32) -> GrayImage {
    let mut state = 0x2545_f491u32;
    GrayImage::from_fn(w, h, |_, _| {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        Luma([(state >> 24) as u8])
    })
}

/// Benchmark the hand-written Lee filter on a 128x128 noisy image with the
/// default 7x7 window. This is the only kernel the suite implements itself,
/// so it is the one worth profiling in isolation.
fn bench_lee_filter(c: &mut Criterion) {
    let img = noisy_gray(128, 128);
    let filter = LeeFilter::default();

    c.bench_function("lee_filter (128x128, r=3)", |b| {
        b.iter(|| black_box(filter.apply(black_box(&img))));
    });
}

fn bench_sobel(c: &mut Criterion) {
    let img = noisy_gray(128, 128);

    c.bench_function("sobel (128x128)", |b| {
        b.iter(|| black_box(sobel(black_box(&img))));
    });
}

fn bench_gaussian_blur(c: &mut Criterion) {
    let img = RgbImage::from_pixel(128, 128, Rgb([120, 90, 60]));

    c.bench_function("gaussian_blur (128x128, sigma=1.0)", |b| {
        b.iter(|| black_box(gaussian_blur(black_box(&img), 1.0)));
    });
}

criterion_group!(benches, bench_lee_filter, bench_sobel, bench_gaussian_blur);
criterion_main!(benches);
