//! `profile`
//!
//! The record of where the pipeline reads its master image from and where
//! each derived asset is written.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::IconBuildError;

/// Edge lengths, in pixels, of the square PNG set used by Linux packaging.
pub const LINUX_ICON_SIZES_PX: [u32; 7] = [16, 32, 48, 64, 128, 256, 512];

/// Edge length of the tray icon, in pixels.
pub const TRAY_ICON_SIZE_PX: u32 = 24;

/// Fraction of the image width cut away at each corner when rounding.
pub const CORNER_RADIUS_FRACTION: f32 = 0.2;

/// Name of the optional profile file read from the working directory.
pub const PROFILE_FILE_NAME: &str = "icon-profile.json";

/// Paths and sizes of every asset the pipeline produces.
///
/// The defaults describe the layout the app build expects; a profile file
/// only needs to spell out the fields it wants to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconProfile {
    /// The master icon, also the destination of the rounded window icon.
    pub source: PathBuf,
    /// Where the untouched master is kept once rounding has run.
    pub backup: PathBuf,
    /// The tray icon.
    pub tray: PathBuf,
    /// The icon copied into the build tree.
    pub build_icon: PathBuf,
    /// The Windows ICO in the build tree.
    pub build_ico: PathBuf,
    /// Directory receiving the sized PNG set.
    pub icons_dir: PathBuf,
    /// Edge lengths of the sized PNG set.
    pub sizes: Vec<u32>,
    /// Edge length of the tray icon.
    pub tray_size: u32,
    /// Fraction of the image width cut away at each corner.
    pub corner_radius_fraction: f32,
}

impl Default for IconProfile {
    fn default() -> Self {
        IconProfile {
            source: PathBuf::from("icon.png"),
            backup: PathBuf::from("icon-original.png"),
            tray: PathBuf::from("tray-icon.png"),
            build_icon: PathBuf::from("build/icon.png"),
            build_ico: PathBuf::from("build/icon.ico"),
            icons_dir: PathBuf::from("build/icons"),
            sizes: LINUX_ICON_SIZES_PX.to_vec(),
            tray_size: TRAY_ICON_SIZE_PX,
            corner_radius_fraction: CORNER_RADIUS_FRACTION,
        }
    }
}

impl IconProfile {
    /// Reads a profile from `path`, falling back to the defaults when no
    /// such file exists.
    ///
    /// # Arguments
    /// * `path`: The profile file to read.
    ///
    /// # Returns
    /// The parsed profile, or the default profile for a missing file.
    ///
    /// # Errors
    /// [`IconBuildError::FailedToReadProfile`] when the file exists but
    /// cannot be read, or [`IconBuildError::InvalidProfile`] when it is not
    /// valid JSON for a profile.
    pub fn load_or_default(path: &Path) -> Result<Self, IconBuildError> {
        if !path.exists() {
            return Ok(IconProfile::default());
        }

        let bytes = std::fs::read(path).map_err(IconBuildError::FailedToReadProfile)?;
        serde_json::from_slice(&bytes).map_err(IconBuildError::InvalidProfile)
    }
}
