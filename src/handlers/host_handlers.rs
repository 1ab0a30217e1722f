use std::collections::HashMap;

use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::auth::csrf::{self, constant_time_eq};
use crate::auth::session::{HostSession, clear_host, require_host, set_session};
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::handlers::see_other;
use crate::models::presentation::{Presentation, catalog};
use crate::models::status::StatusStore;
use crate::templates_structs::{HostTemplate, LoginTemplate};

#[derive(Deserialize)]
pub struct HostLoginForm {
    pub token: Option<String>,
    pub presentation: Option<String>,
    #[serde(default)]
    pub csrf_token: String,
}

/// The three things a host can do from the control page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerAction {
    Terminate,
    Previous,
    Next,
}

impl ControllerAction {
    /// Pick the action named by the submitted form. `terminate` wins over
    /// `previous`, which wins over `next`.
    pub fn from_form(form: &HashMap<String, String>) -> Option<Self> {
        if form.contains_key("terminate") {
            Some(Self::Terminate)
        } else if form.contains_key("previous") {
            Some(Self::Previous)
        } else if form.contains_key("next") {
            Some(Self::Next)
        } else {
            None
        }
    }
}

/// Login form for strangers, control page for the authorised host.
pub async fn host_page(
    config: web::Data<AppConfig>,
    store: web::Data<StatusStore>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    if let Ok(host) = require_host(&session, &config) {
        if catalog::exists(&config.presentations_html, &host.presentation)? {
            return render_host(&config, &store, &session, &host);
        }
        forget_deleted(&session, &host);
    }

    let presentations = catalog::list_presentations(&config.presentations_html)?
        .into_iter()
        .collect();
    let csrf_token = csrf::get_or_create_token(&session);
    render(LoginTemplate { presentations, csrf_token })
}

/// Log a host in. A wrong token and an unknown presentation look the same
/// to the caller: both go back to the picker.
pub async fn host_login(
    config: web::Data<AppConfig>,
    store: web::Data<StatusStore>,
    session: Session,
    form: web::Form<HostLoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let (Some(token), Some(name)) = (form.token.as_deref(), form.presentation.as_deref()) else {
        return Ok(see_other("/"));
    };
    let token_ok = !config.auth_token.is_empty() && constant_time_eq(token, &config.auth_token);
    if !token_ok || !catalog::exists(&config.presentations_html, name)? {
        log::warn!("Rejected host login for presentation '{name}'");
        return Ok(see_other("/"));
    }

    set_session(&session, name, token)?;
    store.ensure(name)?;
    log::info!("Host logged in to '{name}'");

    let host = HostSession {
        presentation: name.to_string(),
        token: token.to_string(),
    };
    render_host(&config, &store, &session, &host)
}

/// Move the slide pointer of the host's presentation, or end hosting.
pub async fn controller(
    config: web::Data<AppConfig>,
    store: web::Data<StatusStore>,
    session: Session,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let host = require_host(&session, &config)?;
    csrf::validate_csrf(&session, form.get("csrf_token").map(|s| s.as_str()).unwrap_or(""))?;

    let Some(action) = ControllerAction::from_form(&form) else {
        return Ok(see_other("/"));
    };

    let name = host.presentation.as_str();
    if action != ControllerAction::Terminate
        && !catalog::exists(&config.presentations_html, name)?
    {
        forget_deleted(&session, &host);
        return Ok(see_other("/host/"));
    }

    match action {
        ControllerAction::Terminate => {
            store.reset(name)?;
            session.purge();
            log::info!("Host ended '{name}'");
        }
        ControllerAction::Previous => {
            let total = total_slides(&config, name)?;
            let index = store.retreat(name, total)?;
            log::info!("'{name}' moved back to slide {index}");
        }
        ControllerAction::Next => {
            let total = total_slides(&config, name)?;
            let index = store.advance(name, total)?;
            log::info!("'{name}' moved forward to slide {index}");
        }
    }

    Ok(see_other("/host/"))
}

/// The hosted presentation was deleted while the session lived on.
fn forget_deleted(session: &Session, host: &HostSession) {
    log::warn!(
        "Presentation '{}' no longer exists, ending its host session",
        host.presentation
    );
    clear_host(session);
}

fn total_slides(config: &AppConfig, name: &str) -> Result<usize, AppError> {
    catalog::count_slides(&config.presentations_images, &Presentation::from_name(name))
}

fn render_host(
    config: &AppConfig,
    store: &StatusStore,
    session: &Session,
    host: &HostSession,
) -> Result<HttpResponse, AppError> {
    let total_slides = total_slides(config, &host.presentation)?;
    let index = store.get(&host.presentation)?.unwrap_or(0);
    let position = if total_slides == 0 {
        0
    } else {
        index.min(total_slides - 1) + 1
    };

    render(HostTemplate {
        presentation: host.presentation.clone(),
        position,
        total_slides,
        csrf_token: csrf::get_or_create_token(session),
    })
}
