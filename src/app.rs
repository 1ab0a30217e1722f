use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{cookie::Key, middleware, web};

use crate::auth;
use crate::config::AppConfig;
use crate::handlers::{host_handlers, viewer_handlers};

/// Register every dynamic route. Static files and the 404 fallback are
/// added by the server in `main`.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Viewer routes
        .route("/", web::get().to(viewer_handlers::index))
        .route("/watch/", web::post().to(viewer_handlers::watch))
        .route("/status/", web::post().to(viewer_handlers::status))
        // Host login / control page
        .route("/host/", web::get().to(host_handlers::host_page))
        .route("/host/", web::post().to(host_handlers::host_login))
        // Host actions
        .service(
            web::scope("/controller")
                .wrap(middleware::from_fn(auth::middleware::require_host))
                .route("/", web::post().to(host_handlers::controller)),
        );
}

pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}

/// Headers sent with every response. Images and scripts only load from
/// this origin, so page scripts live under `/static`.
pub fn security_headers() -> middleware::DefaultHeaders {
    middleware::DefaultHeaders::new()
        .add(("Content-Security-Policy", "default-src 'self'; img-src 'self'"))
        .add(("X-Frame-Options", "SAMEORIGIN"))
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("Referrer-Policy", "strict-origin-when-cross-origin"))
}

/// Session key from configuration when long enough, otherwise random.
pub fn session_key(config: &AppConfig) -> Key {
    match config.secret_key.as_deref() {
        Some(val) if val.len() >= 64 => {
            log::info!("Using PODIUM_SECRET_KEY for session cookies");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!(
                "PODIUM_SECRET_KEY too short ({} bytes, need 64+), generating random key",
                val.len()
            );
            Key::generate()
        }
        None => {
            log::warn!("No PODIUM_SECRET_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    }
}
