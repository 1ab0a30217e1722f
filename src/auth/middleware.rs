use actix_session::SessionExt;
use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    web,
};

use crate::auth::session::is_authorized;
use crate::config::AppConfig;

/// Middleware function that only lets authorised hosts through.
/// Everyone else is sent to the host login page.
pub async fn require_host(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let session = req.get_session();
    let authorized = req
        .app_data::<web::Data<AppConfig>>()
        .is_some_and(|config| is_authorized(&session, config));

    if !authorized {
        log::warn!("Rejected {} {} without a host session", req.method(), req.path());
        let response = HttpResponse::SeeOther()
            .insert_header(("Location", "/host/"))
            .finish();
        return Ok(req.into_response(response).map_into_right_body());
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}
