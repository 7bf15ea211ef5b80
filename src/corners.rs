//! `corners`
//!
//! Cuts circular arcs out of an icon's corners by rebuilding its alpha
//! channel.

use image::{imageops, GrayImage, Luma, RgbaImage};

/// Alpha value of a fully opaque pixel.
const OPAQUE: u8 = 255;

/// Computes the corner radius in pixels for an image of the given width,
/// truncating toward zero.
///
/// # Arguments
/// * `width`: Width of the image in pixels.
/// * `fraction`: Fraction of the width to cut away at each corner, expected
///   to be in `0.0..=0.5` so that opposite arcs cannot overlap.
///
/// # Returns
/// The radius in pixels.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn corner_radius_px(width: u32, fraction: f32) -> u32 {
    (width as f32 * fraction) as u32
}

/// Replaces the alpha channel of `image` so that its four corners are cut
/// away by circular arcs of `radius` pixels, leaving everything else fully
/// opaque. Any transparency the image had before is discarded.
///
/// The four corner regions are the four quadrants of a single rendered
/// circle, pasted over an otherwise opaque full-size alpha layer.
///
/// # Arguments
/// * `image`: The image to modify in place.
/// * `radius`: Corner radius in pixels. A radius of zero leaves every pixel
///   opaque. Keeping the radius at or below half the smaller image
///   dimension is the caller's responsibility.
pub fn round_corners(image: &mut RgbaImage, radius: u32) {
    let (width, height) = image.dimensions();
    debug_assert!(
        radius * 2 <= width && radius * 2 <= height,
        "corner arcs must not overlap"
    );

    let mut alpha = GrayImage::from_pixel(width, height, Luma([OPAQUE]));

    if radius > 0 {
        let circle = circle_mask(radius);
        let quadrant =
            |x: u32, y: u32| imageops::crop_imm(&circle, x, y, radius, radius).to_image();

        imageops::replace(&mut alpha, &quadrant(0, 0), 0, 0);
        imageops::replace(&mut alpha, &quadrant(radius, 0), i64::from(width - radius), 0);
        imageops::replace(&mut alpha, &quadrant(0, radius), 0, i64::from(height - radius));
        imageops::replace(
            &mut alpha,
            &quadrant(radius, radius),
            i64::from(width - radius),
            i64::from(height - radius),
        );
    }

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        pixel.0[3] = alpha.get_pixel(x, y).0[0];
    }
}

/// Renders a filled circle of the given radius into a new single-channel
/// mask of size `2r` × `2r`: 255 inside the circle, 0 outside. Membership
/// is decided at pixel centres.
///
/// # Arguments
/// * `radius`: Radius of the circle in pixels, non-zero.
///
/// # Returns
/// The mask image.
#[allow(clippy::cast_precision_loss)]
fn circle_mask(radius: u32) -> GrayImage {
    let centre = radius as f32;

    GrayImage::from_fn(radius * 2, radius * 2, |x, y| {
        let dx = x as f32 + 0.5 - centre;
        let dy = y as f32 + 0.5 - centre;

        if dx * dx + dy * dy <= centre * centre {
            Luma([OPAQUE])
        } else {
            Luma([0])
        }
    })
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    #[test]
    fn test_corner_radius_px() {
        assert_eq!(corner_radius_px(64, 0.2), 12, "64px at 20%");
        assert_eq!(corner_radius_px(100, 0.2), 20, "100px at 20%");
        assert_eq!(corner_radius_px(512, 0.2), 102, "512px at 20%");
        assert_eq!(corner_radius_px(0, 0.2), 0, "zero width");
        assert_eq!(corner_radius_px(64, 0.0), 0, "zero fraction");
    }

    #[test]
    fn test_circle_mask_extremes() {
        let mask = circle_mask(12);
        assert_eq!(mask.dimensions(), (24, 24), "mask is 2r x 2r");

        // The extreme corners are further than r from the centre.
        assert_eq!(mask.get_pixel(0, 0).0[0], 0, "top-left of mask");
        assert_eq!(mask.get_pixel(23, 23).0[0], 0, "bottom-right of mask");

        // The centre pixels sit within the circle.
        assert_eq!(mask.get_pixel(11, 11).0[0], 255, "centre of mask");
        assert_eq!(mask.get_pixel(12, 12).0[0], 255, "centre of mask");

        // The midpoint of each edge touches the circle.
        assert_eq!(mask.get_pixel(11, 0).0[0], 255, "top edge midpoint");
        assert_eq!(mask.get_pixel(0, 12).0[0], 255, "left edge midpoint");
    }

    #[test]
    fn test_round_corners_cuts_corners_and_keeps_centre() {
        let mut image = RgbaImage::from_pixel(64, 64, Rgba([200, 10, 10, 255]));
        round_corners(&mut image, 12);

        for (x, y) in [(0, 0), (63, 0), (0, 63), (63, 63)] {
            assert_eq!(
                image.get_pixel(x, y).0[3],
                0,
                "extreme corner ({x}, {y}) is transparent"
            );
        }

        assert_eq!(image.get_pixel(32, 32).0[3], 255, "centre stays opaque");

        // Edge midpoints are between the arcs and stay opaque.
        assert_eq!(image.get_pixel(32, 0).0[3], 255, "top edge midpoint");
        assert_eq!(image.get_pixel(0, 32).0[3], 255, "left edge midpoint");

        // Colour channels are untouched.
        assert_eq!(
            &image.get_pixel(0, 0).0[..3],
            &[200, 10, 10],
            "colour channels are left alone"
        );
    }

    #[test]
    fn test_round_corners_zero_radius_is_fully_opaque() {
        let mut image = RgbaImage::from_pixel(16, 16, Rgba([1, 2, 3, 255]));
        round_corners(&mut image, 0);

        for pixel in image.pixels() {
            assert_eq!(pixel.0[3], 255, "no arcs are cut at radius zero");
        }
    }

    #[test]
    fn test_round_corners_replaces_existing_alpha() {
        let mut image = RgbaImage::from_pixel(64, 64, Rgba([5, 5, 5, 0]));
        round_corners(&mut image, 12);

        assert_eq!(
            image.get_pixel(32, 32).0[3],
            255,
            "previously transparent centre becomes opaque"
        );
    }
}
