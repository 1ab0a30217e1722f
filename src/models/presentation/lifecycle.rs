use std::fs;
use std::path::{Path, PathBuf};

use super::catalog;
use super::types::{Presentation, STUB_CONTENTS, validate_name};
use crate::config::AppConfig;
use crate::errors::AppError;

/// Create the template stub and the empty image directory for `name`.
/// Returns the image directory the operator should fill.
pub fn create(config: &AppConfig, name: &str) -> Result<PathBuf, AppError> {
    validate_name(name)?;
    if catalog::exists(&config.presentations_html, name)? {
        return Err(AppError::AlreadyExists(name.to_string()));
    }

    let presentation = Presentation::from_name(name);
    let stub_path = presentation.stub_path(&config.presentations_html);
    let images_path = presentation.images_path(&config.presentations_images);

    fs::create_dir_all(&config.presentations_html)?;
    fs::create_dir_all(&config.presentations_images)?;
    fs::write(&stub_path, STUB_CONTENTS)?;
    fs::create_dir(&images_path)?;

    log::info!("Created presentation '{}' at {}", name, images_path.display());
    Ok(images_path)
}

/// Remove the template stub and the image directory of `name`.
/// The slide status entry is left in place.
pub fn delete(config: &AppConfig, name: &str) -> Result<(), AppError> {
    let presentation = catalog::find(&config.presentations_html, name)?
        .ok_or_else(|| AppError::UnknownPresentation(name.to_string()))?;

    fs::remove_file(presentation.stub_path(&config.presentations_html))?;
    let images_path = presentation.images_path(&config.presentations_images);
    if images_path.exists() {
        fs::remove_dir_all(&images_path)?;
    } else {
        log::warn!("Image directory {} was already gone", images_path.display());
    }

    log::info!("Deleted presentation '{name}'");
    Ok(())
}

/// Operator instructions printed after a successful create.
pub fn setup_instructions(images_path: &Path) -> String {
    format!(
        "Presentation successfully created.\n\
         Add images to present by ordering them numerically by their name, ex:\n\
         1.png, 2.png, 3.png\n\
         in the following folder: '{}'\n\
         The generated template file only registers the presentation. Every \
         presentation is rendered by the built-in presentation.html page, so \
         edits to that file have no effect.",
        images_path.display()
    )
}
