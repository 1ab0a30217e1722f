use std::path::PathBuf;

use crate::errors::AppError;

/// Immutable application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub auth_token: String,
    pub secret_key: Option<String>,
    pub host: String,
    pub port: u16,
    pub refresh_time_sec: f64,
    pub presentations_html: PathBuf,
    pub presentations_images: PathBuf,
    pub presentations_cache: PathBuf,
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_token: String::new(),
            secret_key: None,
            host: "127.0.0.1".to_string(),
            port: 5000,
            refresh_time_sec: 1.0,
            presentations_html: PathBuf::from("templates/presentations"),
            presentations_images: PathBuf::from("static/images"),
            presentations_cache: PathBuf::from("data/presentations.json"),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl AppConfig {
    /// Build the configuration from `PODIUM_*` environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let port = match lookup("PODIUM_PORT") {
            Some(val) => val
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("PODIUM_PORT '{val}': {e}")))?,
            None => defaults.port,
        };
        let refresh_time_sec = match lookup("PODIUM_REFRESH_TIME_SEC") {
            Some(val) => {
                let secs = val.trim().parse::<f64>().map_err(|e| {
                    AppError::Config(format!("PODIUM_REFRESH_TIME_SEC '{val}': {e}"))
                })?;
                if !secs.is_finite() || secs <= 0.0 {
                    return Err(AppError::Config(format!(
                        "PODIUM_REFRESH_TIME_SEC must be a positive number, got '{val}'"
                    )));
                }
                secs
            }
            None => defaults.refresh_time_sec,
        };

        Ok(Self {
            auth_token: lookup("PODIUM_AUTH_TOKEN").unwrap_or_default(),
            secret_key: lookup("PODIUM_SECRET_KEY").filter(|k| !k.is_empty()),
            host: lookup("PODIUM_HOST").unwrap_or(defaults.host),
            port,
            refresh_time_sec,
            presentations_html: lookup("PODIUM_PRESENTATIONS_HTML")
                .map(PathBuf::from)
                .unwrap_or(defaults.presentations_html),
            presentations_images: lookup("PODIUM_PRESENTATIONS_IMAGES")
                .map(PathBuf::from)
                .unwrap_or(defaults.presentations_images),
            presentations_cache: lookup("PODIUM_PRESENTATIONS_CACHE")
                .map(PathBuf::from)
                .unwrap_or(defaults.presentations_cache),
            static_dir: lookup("PODIUM_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        })
    }

    /// Client-side polling interval in milliseconds.
    pub fn refresh_time_ms(&self) -> u64 {
        (self.refresh_time_sec * 1e3) as u64
    }

    /// The server refuses to start without a shared secret; an empty token
    /// would let any empty login through.
    pub fn require_auth_token(&self) -> Result<(), AppError> {
        if self.auth_token.is_empty() {
            return Err(AppError::Config("PODIUM_AUTH_TOKEN is not set".to_string()));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
