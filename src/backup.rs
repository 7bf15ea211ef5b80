//! `backup`
//!
//! First-run backup of the master icon, so that rounding always starts
//! from an untouched original.

use std::path::Path;

use crate::IconBuildError;

/// Ensures that the canonical original of the master icon exists at
/// `backup`.
///
/// On the first run the file at `source` is renamed to `backup`. On later
/// runs the existing backup is left untouched and remains the source of
/// truth, whatever has since been written over `source`.
///
/// # Arguments
/// * `source`: The master icon as shipped, renamed away on the first run.
/// * `backup`: Where the untouched original lives from then on.
///
/// # Errors
/// [`IconBuildError::SourceImageMissing`] when neither file exists, or
/// [`IconBuildError::FailedToBackUpSource`] when the rename fails.
pub fn ensure_backup(source: &Path, backup: &Path) -> Result<(), IconBuildError> {
    if backup.exists() {
        log::debug!("Backup {} already exists", backup.display());
        return Ok(());
    }

    if source.exists() {
        std::fs::rename(source, backup).map_err(IconBuildError::FailedToBackUpSource)?;
        log::info!("Renamed {} to {}", source.display(), backup.display());
        return Ok(());
    }

    Err(IconBuildError::SourceImageMissing(source.to_path_buf()))
}
