// SPDX-License-Identifier: MIT
//
// pixelmark-ops — Image transforms measured by the pixelmark harness.
//
// Every transform takes a borrowed input and returns a freshly allocated
// output buffer; inputs are never mutated in place, so the driver can reuse
// the same source image across trials and benchmarks. With the exception of
// the hand-written Lee speckle filter, the transforms delegate to the
// `image` and `imageproc` crates — measuring their cost is the point.

pub mod blur;
pub mod edges;
pub mod point;
pub mod rotate;
pub mod speckle;

pub use blur::gaussian_blur;
pub use edges::{canny_edges, sobel};
pub use point::{grayscale, invert, invert_manual};
pub use rotate::{rotate90, rotate_expand};
pub use speckle::LeeFilter;
