use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Status(serde_json::Error),
    Template(askama::Error),
    Session(String),
    Config(String),
    AlreadyExists(String),
    UnknownPresentation(String),
    InvalidName(String),
    InvalidCsrf,
    NotAuthorized,
    NotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Status(e) => write!(f, "Status file error: {e}"),
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Session(e) => write!(f, "Session error: {e}"),
            AppError::Config(e) => write!(f, "Configuration error: {e}"),
            AppError::AlreadyExists(name) => {
                write!(f, "A presentation named '{name}' already exists")
            }
            AppError::UnknownPresentation(name) => write!(
                f,
                "Presentation '{name}' not found. Make sure you enter the spaces correctly"
            ),
            AppError::InvalidName(reason) => write!(f, "Invalid presentation name: {reason}"),
            AppError::InvalidCsrf => write!(f, "Invalid or missing CSRF token"),
            AppError::NotAuthorized => write!(f, "Not authorized"),
            AppError::NotFound => write!(f, "Not found"),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotAuthorized => HttpResponse::SeeOther()
                .insert_header(("Location", "/host/"))
                .finish(),
            AppError::InvalidCsrf => HttpResponse::Forbidden().body(self.to_string()),
            AppError::NotFound => HttpResponse::NotFound().body("Not Found"),
            AppError::AlreadyExists(_)
            | AppError::UnknownPresentation(_)
            | AppError::InvalidName(_) => HttpResponse::BadRequest().body(self.to_string()),
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Status(e)
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

/// Render an Askama template into a 200 HTML response.
pub fn render(tmpl: impl Template) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
