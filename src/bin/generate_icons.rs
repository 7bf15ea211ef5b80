//! `generate_icons`
//!
//! Regenerates the sized PNG set under the build tree from the icon that
//! has already been copied there.

use std::path::Path;

use iconsmith::{generate_icon_set, profile::PROFILE_FILE_NAME, IconBuildError, IconProfile};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        match err {
            IconBuildError::SourceImageMissing(path) => {
                log::error!("Error: {} not found", path.display());
            }
            err => log::error!("Failed to generate sized icons: {err:?}"),
        }
        std::process::exit(1);
    }
}

/// Loads the profile and writes the sized icon set.
fn run() -> Result<(), IconBuildError> {
    let profile = IconProfile::load_or_default(Path::new(PROFILE_FILE_NAME))?;
    generate_icon_set(&profile)?;

    Ok(())
}
