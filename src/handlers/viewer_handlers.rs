use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::handlers::see_other;
use crate::models::presentation::{Presentation, catalog};
use crate::models::status::StatusStore;
use crate::templates_structs::{IndexTemplate, PresentationTemplate};

#[derive(Deserialize)]
pub struct PresentationForm {
    pub presentation: Option<String>,
}

/// Presentation picker.
pub async fn index(config: web::Data<AppConfig>) -> Result<HttpResponse, AppError> {
    let presentations = catalog::list_presentations(&config.presentations_html)?
        .into_iter()
        .collect();
    render(IndexTemplate { presentations })
}

/// Render the slide page for the chosen presentation.
/// Unknown or missing presentations go back to the picker.
pub async fn watch(
    config: web::Data<AppConfig>,
    form: web::Form<PresentationForm>,
) -> Result<HttpResponse, AppError> {
    let Some(name) = form.presentation.as_deref() else {
        return Ok(see_other("/"));
    };
    let Some(pres) = catalog::find(&config.presentations_html, name)? else {
        return Ok(see_other("/"));
    };

    let slides = catalog::list_slides(&config.presentations_images, &pres)?
        .into_iter()
        .map(|slide| slide.file_name)
        .collect();

    render(PresentationTemplate {
        title: pres.name,
        presentation: pres.slug,
        slides,
        refresh_time: config.refresh_time_ms(),
    })
}

/// Current slide index as plain text; `"0"` when nothing is recorded.
/// Viewers poll this with the underscore form of the name.
pub async fn status(
    store: web::Data<StatusStore>,
    form: web::Form<PresentationForm>,
) -> Result<HttpResponse, AppError> {
    let Some(slug) = form.presentation.as_deref() else {
        return Ok(see_other("/"));
    };
    let name = Presentation::from_slug(slug).name;
    let index = store.get(&name)?.unwrap_or(0);

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(index.to_string()))
}
