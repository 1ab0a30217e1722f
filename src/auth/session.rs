use actix_session::Session;

use crate::auth::csrf::constant_time_eq;
use crate::config::AppConfig;
use crate::errors::AppError;

const PRESENTATION_KEY: &str = "presentation";
const TOKEN_KEY: &str = "token";

/// What a host's browser session carries after logging in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSession {
    pub presentation: String,
    pub token: String,
}

impl HostSession {
    /// Read the host fields from the session; `None` unless both are present.
    pub fn from_session(session: &Session) -> Option<Self> {
        let presentation = session.get::<String>(PRESENTATION_KEY).unwrap_or(None)?;
        let token = session.get::<String>(TOKEN_KEY).unwrap_or(None)?;
        Some(Self { presentation, token })
    }

    pub fn is_authorized(&self, config: &AppConfig) -> bool {
        !config.auth_token.is_empty() && constant_time_eq(&self.token, &config.auth_token)
    }
}

/// Overwrite the session's presentation and token. The caller has already
/// checked the token.
pub fn set_session(session: &Session, presentation: &str, token: &str) -> Result<(), AppError> {
    session
        .insert(PRESENTATION_KEY, presentation)
        .map_err(|e| AppError::Session(format!("Failed to store presentation: {e}")))?;
    session
        .insert(TOKEN_KEY, token)
        .map_err(|e| AppError::Session(format!("Failed to store token: {e}")))?;
    Ok(())
}

/// Drop the host fields but keep the rest of the session (CSRF token).
pub fn clear_host(session: &Session) {
    session.remove(PRESENTATION_KEY);
    session.remove(TOKEN_KEY);
}

pub fn is_authorized(session: &Session, config: &AppConfig) -> bool {
    HostSession::from_session(session).is_some_and(|host| host.is_authorized(config))
}

/// The authorised host session, or `AppError::NotAuthorized`.
pub fn require_host(session: &Session, config: &AppConfig) -> Result<HostSession, AppError> {
    HostSession::from_session(session)
        .filter(|host| host.is_authorized(config))
        .ok_or(AppError::NotAuthorized)
}
