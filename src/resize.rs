//! `resize`
//!
//! Exact-size scaling of icon images.

use image::{imageops, RgbaImage};

/// Scales an image to exactly `width` × `height` pixels using Lanczos
/// resampling. The aspect ratio is not preserved; callers pass explicit
/// square targets throughout the pipeline.
///
/// # Arguments
/// * `image`: The image to scale.
/// * `width`: Target width in pixels, must be non-zero.
/// * `height`: Target height in pixels, must be non-zero.
///
/// # Returns
/// A new image of exactly the requested size.
pub fn resize_to(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    imageops::resize(image, width, height, imageops::FilterType::Lanczos3)
}
