use std::path::{Path, PathBuf};

use crate::errors::AppError;

/// Extension used for the per-presentation template stub.
pub const STUB_EXTENSION: &str = "html";

/// Contents of a freshly created template stub.
pub const STUB_CONTENTS: &str = r#"{% extends "presentation.html" %}"#;

/// A presentation as known to the catalog.
///
/// `name` is what people see and type (spaces allowed); `slug` is the
/// directory-safe form used on disk and in viewer polling requests.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Presentation {
    pub name: String,
    pub slug: String,
}

impl Presentation {
    pub fn from_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            slug: to_slug(name),
        }
    }

    pub fn from_slug(slug: &str) -> Self {
        Self {
            name: to_display_name(slug),
            slug: slug.to_string(),
        }
    }

    pub fn stub_path(&self, html_dir: &Path) -> PathBuf {
        html_dir.join(format!("{}.{STUB_EXTENSION}", self.slug))
    }

    pub fn images_path(&self, images_dir: &Path) -> PathBuf {
        images_dir.join(&self.slug)
    }
}

/// One slide image, ordered by the number in its file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub number: u64,
    pub file_name: String,
}

pub fn to_slug(name: &str) -> String {
    name.replace(' ', "_")
}

pub fn to_display_name(slug: &str) -> String {
    slug.replace('_', " ")
}

/// Reject names that would not survive the name/slug round trip or that
/// would escape the presentation directories.
pub fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::InvalidName("name is empty".to_string()));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(AppError::InvalidName(format!(
            "'{name}' contains a path separator"
        )));
    }
    if name.contains('_') {
        return Err(AppError::InvalidName(format!(
            "'{name}' contains an underscore; use spaces instead"
        )));
    }
    if name.starts_with('.') {
        return Err(AppError::InvalidName(format!("'{name}' starts with a dot")));
    }
    Ok(())
}

/// Parse a slide file name such as `12.png` into its number.
/// Hidden files and non-numeric stems are not slides.
pub fn parse_slide_number(file_name: &str) -> Option<u64> {
    if file_name.starts_with('.') {
        return None;
    }
    let stem = Path::new(file_name).file_stem()?.to_str()?;
    if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    stem.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_round_trip() {
        let p = Presentation::from_name("Quarterly Review 2024");
        assert_eq!(p.slug, "Quarterly_Review_2024");
        assert_eq!(Presentation::from_slug(&p.slug), p);
    }

    #[test]
    fn paths_use_slug() {
        let p = Presentation::from_name("My Talk");
        assert_eq!(
            p.stub_path(Path::new("templates/presentations")),
            PathBuf::from("templates/presentations/My_Talk.html")
        );
        assert_eq!(
            p.images_path(Path::new("static/images")),
            PathBuf::from("static/images/My_Talk")
        );
    }

    #[test]
    fn slide_numbers() {
        assert_eq!(parse_slide_number("1.png"), Some(1));
        assert_eq!(parse_slide_number("10.jpeg"), Some(10));
        assert_eq!(parse_slide_number("007.png"), Some(7));
        assert_eq!(parse_slide_number("3"), Some(3));
        assert_eq!(parse_slide_number("cover.png"), None);
        assert_eq!(parse_slide_number("-1.png"), None);
        assert_eq!(parse_slide_number(".DS_Store"), None);
    }

    #[test]
    fn name_validation() {
        assert!(validate_name("My Talk").is_ok());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("../etc").is_err());
        assert!(validate_name("a_b").is_err());
        assert!(validate_name(".hidden").is_err());
    }
}
