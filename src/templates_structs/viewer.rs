use askama::Template;

/// Presentation picker shown at `/`.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub presentations: Vec<String>,
}

/// The slide page a viewer watches. `presentation` is the slug the page
/// polls `/status/` with; `refresh_time` is in milliseconds.
#[derive(Template)]
#[template(path = "presentation.html")]
pub struct PresentationTemplate {
    pub title: String,
    pub presentation: String,
    pub slides: Vec<String>,
    pub refresh_time: u64,
}
