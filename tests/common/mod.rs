//! Shared test infrastructure for catalog, status-store and route tests.
//!
//! # Fixtures
//! - `setup_test_env()` - temp dirs for stubs, images and the status file,
//!   plus an `AppConfig` pointing at them
//! - `TestEnv::add_presentation()` - stub + numbered slide files
//!
//! # HTTP helpers
//! - `test_app!` - the real routes behind session + header middleware
//! - `open_login!`, `host_login!`, `control!` - host flows with cookies and CSRF

#![allow(dead_code, unused_macros)]

use std::fs;
use std::path::PathBuf;

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::web;
use regex::Regex;
use tempfile::TempDir;

use podium::config::AppConfig;
use podium::models::presentation::{Presentation, STUB_CONTENTS};
use podium::models::status::StatusStore;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const AUTH_TOKEN: &str = "s3cret-host-token";
pub const SESSION_COOKIE: &str = "id";

// ============================================================================
// FILESYSTEM SETUP
// ============================================================================

/// Temp directory plus a config rooted in it. Keep the `TestEnv` alive for
/// as long as the paths are used.
pub struct TestEnv {
    pub dir: TempDir,
    pub config: AppConfig,
}

pub fn setup_test_env() -> TestEnv {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let html = dir.path().join("templates").join("presentations");
    let images = dir.path().join("static").join("images");
    fs::create_dir_all(&html).expect("Failed to create template dir");
    fs::create_dir_all(&images).expect("Failed to create image dir");

    let config = AppConfig {
        auth_token: AUTH_TOKEN.to_string(),
        refresh_time_sec: 0.5,
        presentations_html: html,
        presentations_images: images,
        presentations_cache: dir.path().join("data").join("presentations.json"),
        static_dir: dir.path().join("static"),
        ..AppConfig::default()
    };

    TestEnv { dir, config }
}

impl TestEnv {
    /// Create a presentation on disk with the given slide file names.
    pub fn add_presentation(&self, name: &str, slides: &[&str]) -> PathBuf {
        let pres = Presentation::from_name(name);
        fs::write(pres.stub_path(&self.config.presentations_html), STUB_CONTENTS)
            .expect("Failed to write stub");
        let images = pres.images_path(&self.config.presentations_images);
        fs::create_dir_all(&images).expect("Failed to create slides dir");
        for slide in slides {
            fs::write(images.join(slide), b"img").expect("Failed to write slide");
        }
        images
    }

    /// Numbered slides `1.png ..= n.png`.
    pub fn add_numbered(&self, name: &str, n: usize) -> PathBuf {
        let files: Vec<String> = (1..=n).map(|i| format!("{i}.png")).collect();
        let refs: Vec<&str> = files.iter().map(String::as_str).collect();
        self.add_presentation(name, &refs)
    }

    pub fn store(&self) -> web::Data<StatusStore> {
        web::Data::new(StatusStore::from_config(&self.config))
    }
}

// ============================================================================
// HTTP HELPERS
// ============================================================================

pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
}

pub fn csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).unwrap();
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("No CSRF token in page")
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// URL-encoded body for a form post.
pub fn form_body(pairs: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(pairs).expect("Failed to encode form")
}

/// Build the application service with fresh session keys.
macro_rules! test_app {
    ($env:expr, $store:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(podium::app::session_middleware(
                    actix_web::cookie::Key::generate(),
                ))
                .wrap(podium::app::security_headers())
                .app_data(actix_web::web::Data::new($env.config.clone()))
                .app_data($store.clone())
                .configure(podium::app::routes),
        )
        .await
    };
}

/// GET /host/ as a stranger; yields `(session cookie, csrf token)`.
macro_rules! open_login {
    ($app:expr) => {{
        let req = actix_web::test::TestRequest::get().uri("/host/").to_request();
        let resp = actix_web::test::call_service(&$app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
        let cookie = $crate::common::session_cookie(&resp).expect("No session cookie");
        let body = actix_web::test::read_body(resp).await;
        let csrf = $crate::common::csrf_token(std::str::from_utf8(&body).unwrap());
        (cookie, csrf)
    }};
}

/// Log in as host; yields `(response, session cookie, csrf token)`.
macro_rules! host_login {
    ($app:expr, $presentation:expr, $token:expr) => {{
        let (cookie, csrf) = open_login!($app);
        let req = actix_web::test::TestRequest::post()
            .uri("/host/")
            .cookie(cookie.clone())
            .set_form(&[
                ("presentation", $presentation),
                ("token", $token),
                ("csrf_token", csrf.as_str()),
            ])
            .to_request();
        let resp = actix_web::test::call_service(&$app, req).await;
        let cookie = $crate::common::session_cookie(&resp).unwrap_or(cookie);
        (resp, cookie, csrf)
    }};
}

/// POST one controller action with the host's cookie.
macro_rules! control {
    ($app:expr, $cookie:expr, $csrf:expr, $action:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/controller/")
            .cookie($cookie.clone())
            .insert_header(actix_web::http::header::ContentType::form_url_encoded())
            .set_payload($crate::common::form_body(&[
                ($action, "1"),
                ("csrf_token", $csrf.as_str()),
            ]))
            .to_request();
        actix_web::test::call_service(&$app, req).await
    }};
}
