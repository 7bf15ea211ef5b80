//! `iconsmith`
//!
//! Produces the icon assets for the desktop app from a single square
//! master PNG: the rounded window icon, the tray icon, a Windows ICO and
//! the fixed-size PNG set used by Linux packaging.

pub mod backup;
pub mod corners;
pub mod ico;
pub mod profile;
pub mod resize;

use std::{
    io,
    path::{Path, PathBuf},
};

use image::RgbaImage;

pub use backup::ensure_backup;
pub use corners::{corner_radius_px, round_corners};
pub use profile::IconProfile;
pub use resize::resize_to;

/// Errors that can occur while building icon assets.
#[derive(Debug)]
pub enum IconBuildError {
    /// The source image is missing and there is no backup to fall back to.
    SourceImageMissing(PathBuf),
    /// There was an error while reading an image from disk.
    FailedToLoadImage(image::ImageError),
    /// There was an error while writing an image to disk.
    FailedToSaveImage(image::ImageError),
    /// Failed to create an output directory.
    FailedToCreateDirectory(io::Error),
    /// Failed to rename the source image to its backup path.
    FailedToBackUpSource(io::Error),
    /// Failed to create the ICO output file.
    FailedToCreateIcoFile(io::Error),
    /// Failed to read the profile file.
    FailedToReadProfile(io::Error),
    /// The profile file exists but could not be parsed.
    InvalidProfile(serde_json::Error),
}

/// Regenerates the sized PNG set from the icon in the build tree.
///
/// # Arguments
/// * `profile`: Paths and sizes to generate.
///
/// # Returns
/// The paths of the PNGs that were written, one per configured size.
///
/// # Errors
/// [`IconBuildError::SourceImageMissing`] when the build-tree icon does not
/// exist, otherwise the underlying image or filesystem error. Nothing is
/// written when the source is missing.
pub fn generate_icon_set(profile: &IconProfile) -> Result<Vec<PathBuf>, IconBuildError> {
    let source = load_source_image(&profile.build_icon)?;
    write_sized_icons(&source, profile)
}

/// Regenerates the tray icon from the master icon.
///
/// # Arguments
/// * `profile`: Paths and sizes to generate.
///
/// # Errors
/// [`IconBuildError::SourceImageMissing`] when the master icon does not
/// exist, otherwise the underlying image error.
pub fn generate_tray_icon(profile: &IconProfile) -> Result<(), IconBuildError> {
    let source = load_source_image(&profile.source)?;
    write_tray_icon(&source, profile)
}

/// Rounds the corners of the master icon and regenerates every derived
/// asset from the rounded image.
///
/// On the first run the master is renamed to the backup path and the
/// backup becomes the canonical original; every run reads the backup, so
/// the arcs are always cut into an image that has never been rounded.
///
/// # Arguments
/// * `profile`: Paths, sizes and the corner radius fraction.
///
/// # Errors
/// [`IconBuildError::SourceImageMissing`] when neither the master icon nor
/// its backup exists (nothing is written in that case), otherwise the
/// underlying image or filesystem error.
pub fn round_source_icon(profile: &IconProfile) -> Result<(), IconBuildError> {
    backup::ensure_backup(&profile.source, &profile.backup)?;

    let mut rounded = load_source_image(&profile.backup)?;
    let radius = corners::corner_radius_px(rounded.width(), profile.corner_radius_fraction);
    corners::round_corners(&mut rounded, radius);

    rounded
        .save(&profile.source)
        .map_err(IconBuildError::FailedToSaveImage)?;
    log::info!("Updated {}", profile.source.display());

    write_tray_icon(&rounded, profile)?;

    if let Some(build_dir) = profile.build_icon.parent() {
        std::fs::create_dir_all(build_dir).map_err(IconBuildError::FailedToCreateDirectory)?;
    }
    rounded
        .save(&profile.build_icon)
        .map_err(IconBuildError::FailedToSaveImage)?;
    ico::write_ico(&rounded, &profile.build_ico)?;
    log::info!(
        "Updated {} and {}",
        profile.build_icon.display(),
        profile.build_ico.display()
    );

    write_sized_icons(&rounded, profile)?;

    Ok(())
}

/// Loads an RGBA image, reporting a missing file as
/// [`IconBuildError::SourceImageMissing`] rather than a decode error.
///
/// # Arguments
/// * `path`: The image file to load.
///
/// # Returns
/// The image converted to RGBA8.
///
/// # Errors
/// [`IconBuildError::SourceImageMissing`] when the file does not exist,
/// [`IconBuildError::FailedToLoadImage`] when it cannot be decoded.
fn load_source_image(path: &Path) -> Result<RgbaImage, IconBuildError> {
    if !path.exists() {
        return Err(IconBuildError::SourceImageMissing(path.to_path_buf()));
    }

    let image = image::open(path).map_err(IconBuildError::FailedToLoadImage)?;
    Ok(image.to_rgba8())
}

/// Writes one square PNG per configured size into the sized-icon
/// directory, creating the directory if needed.
///
/// # Arguments
/// * `image`: The image to scale down (or up) to each size.
/// * `profile`: Paths and sizes to generate.
///
/// # Returns
/// The paths of the PNGs that were written.
///
/// # Errors
/// The underlying filesystem or image error.
fn write_sized_icons(
    image: &RgbaImage,
    profile: &IconProfile,
) -> Result<Vec<PathBuf>, IconBuildError> {
    std::fs::create_dir_all(&profile.icons_dir).map_err(IconBuildError::FailedToCreateDirectory)?;

    let mut written = Vec::with_capacity(profile.sizes.len());
    for &size in &profile.sizes {
        let resized = resize::resize_to(image, size, size);
        let path = profile.icons_dir.join(format!("{size}x{size}.png"));
        resized
            .save(&path)
            .map_err(IconBuildError::FailedToSaveImage)?;
        log::info!("Generated {}", path.display());
        written.push(path);
    }

    Ok(written)
}

/// Scales the image to the tray size and writes the tray icon.
///
/// # Arguments
/// * `image`: The image to scale.
/// * `profile`: Paths and sizes to generate.
///
/// # Errors
/// The underlying image error.
fn write_tray_icon(image: &RgbaImage, profile: &IconProfile) -> Result<(), IconBuildError> {
    let tray = resize::resize_to(image, profile.tray_size, profile.tray_size);
    tray.save(&profile.tray)
        .map_err(IconBuildError::FailedToSaveImage)?;
    log::info!("Updated {}", profile.tray.display());

    Ok(())
}
