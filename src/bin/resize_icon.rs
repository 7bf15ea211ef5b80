//! `resize_icon`
//!
//! Regenerates the tray icon from the master icon.

use std::path::Path;

use iconsmith::{generate_tray_icon, profile::PROFILE_FILE_NAME, IconBuildError, IconProfile};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        match err {
            IconBuildError::SourceImageMissing(path) => {
                log::error!("Error: {} not found", path.display());
            }
            err => log::error!("Failed to generate tray icon: {err:?}"),
        }
        std::process::exit(1);
    }
}

/// Loads the profile and writes the tray icon.
fn run() -> Result<(), IconBuildError> {
    let profile = IconProfile::load_or_default(Path::new(PROFILE_FILE_NAME))?;
    generate_tray_icon(&profile)?;

    Ok(())
}
