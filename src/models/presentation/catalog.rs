use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use super::types::{Presentation, Slide, parse_slide_number, to_display_name};
use crate::errors::AppError;

/// List display names of every presentation with a template stub.
/// Reads the directory on every call; a missing directory is an empty catalog.
pub fn list_presentations(html_dir: &Path) -> Result<BTreeSet<String>, AppError> {
    let entries = match fs::read_dir(html_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeSet::new()),
        Err(e) => return Err(e.into()),
    };

    let mut names = BTreeSet::new();
    for entry in entries {
        let path = entry?.path();
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if stem.is_empty() || stem.starts_with('.') {
            continue;
        }
        names.insert(to_display_name(stem));
    }
    Ok(names)
}

pub fn exists(html_dir: &Path, name: &str) -> Result<bool, AppError> {
    Ok(list_presentations(html_dir)?.contains(name))
}

/// Find a presentation by display name.
pub fn find(html_dir: &Path, name: &str) -> Result<Option<Presentation>, AppError> {
    if exists(html_dir, name)? {
        Ok(Some(Presentation::from_name(name)))
    } else {
        Ok(None)
    }
}

/// Slides of a presentation in numeric order of their file stems
/// (`1.png, 2.png, 10.png`, never `1, 10, 2`).
pub fn list_slides(images_dir: &Path, presentation: &Presentation) -> Result<Vec<Slide>, AppError> {
    let dir = presentation.images_path(images_dir);
    let mut slides = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        match parse_slide_number(&file_name) {
            Some(number) => slides.push(Slide { number, file_name }),
            None => log::warn!(
                "Ignoring '{}' in {}: slide files must be named by number",
                file_name,
                dir.display()
            ),
        }
    }
    slides.sort_by(|a, b| a.number.cmp(&b.number).then_with(|| a.file_name.cmp(&b.file_name)));
    Ok(slides)
}

/// Recounted on every call so slides added while presenting are picked up.
pub fn count_slides(images_dir: &Path, presentation: &Presentation) -> Result<usize, AppError> {
    Ok(list_slides(images_dir, presentation)?.len())
}
