//! `ico`
//!
//! Encodes the Windows ICO variant of the icon.

use std::{fs::File, io::BufWriter, path::Path};

use image::{
    codecs::ico::{IcoEncoder, IcoFrame},
    ExtendedColorType, RgbaImage,
};

use crate::{resize, IconBuildError};

/// Edge lengths of the frames written into the ICO. The ICO container
/// cannot hold frames larger than 256 pixels.
pub const ICO_FRAME_SIZES_PX: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// Encodes `image` as a multi-frame ICO file, one PNG-compressed square
/// frame per entry of [`ICO_FRAME_SIZES_PX`].
///
/// Frame sizes larger than the source are skipped so that no frame is an
/// upscale; a source smaller than every ladder size is written as a single
/// frame at its own size.
///
/// # Arguments
/// * `image`: The image to encode.
/// * `path`: Where to write the ICO file.
///
/// # Errors
/// [`IconBuildError::FailedToCreateIcoFile`] when the file cannot be
/// created, or [`IconBuildError::FailedToSaveImage`] when encoding fails.
#[allow(clippy::module_name_repetitions)]
pub fn write_ico(image: &RgbaImage, path: &Path) -> Result<(), IconBuildError> {
    let largest = image.width().max(image.height());
    let mut sizes: Vec<u32> = ICO_FRAME_SIZES_PX
        .iter()
        .copied()
        .filter(|size| *size <= largest)
        .collect();
    if sizes.is_empty() {
        sizes.push(largest);
    }

    let mut frames = Vec::with_capacity(sizes.len());
    for size in sizes {
        let resized = resize::resize_to(image, size, size);
        let frame = IcoFrame::as_png(resized.as_raw(), size, size, ExtendedColorType::Rgba8)
            .map_err(IconBuildError::FailedToSaveImage)?;
        frames.push(frame);
    }

    let file = File::create(path).map_err(IconBuildError::FailedToCreateIcoFile)?;
    IcoEncoder::new(BufWriter::new(file))
        .encode_images(&frames)
        .map_err(IconBuildError::FailedToSaveImage)?;

    Ok(())
}
