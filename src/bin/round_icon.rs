//! `round_icon`
//!
//! Rounds the corners of the master icon and regenerates every derived
//! asset from the rounded image. The untouched master is kept under a
//! backup name so that re-running never rounds an already-rounded image.

use std::path::Path;

use iconsmith::{profile::PROFILE_FILE_NAME, round_source_icon, IconBuildError, IconProfile};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        match err {
            IconBuildError::SourceImageMissing(path) => {
                log::error!("Error: {} not found", path.display());
            }
            err => log::error!("Failed to round icon: {err:?}"),
        }
        std::process::exit(1);
    }
}

/// Loads the profile, rounds the master icon and regenerates the derived
/// assets.
fn run() -> Result<(), IconBuildError> {
    let profile = IconProfile::load_or_default(Path::new(PROFILE_FILE_NAME))?;
    round_source_icon(&profile)?;

    Ok(())
}
