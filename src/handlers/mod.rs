use actix_web::HttpResponse;

pub mod host_handlers;
pub mod viewer_handlers;

/// 303 redirect used after form posts and for every silent rejection.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}
