//! Caller identity: explicit header, then anonymous cookie, then a new id.

use axum::extract::{Request, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use slc_core::config::ServerConfig;
use slc_core::errors::ConfigError;

use crate::state::AppState;

/// Resolved user id, stored in request extensions for the handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(pub String);

/// Where the identity is looked up.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub header: HeaderName,
    pub cookie_name: String,
}

impl IdentityConfig {
    pub fn from_config(config: &ServerConfig) -> Result<Self, ConfigError> {
        let header_raw = config.effective_user_id_header();
        let header = HeaderName::from_bytes(header_raw.trim().as_bytes()).map_err(|e| {
            ConfigError::ValidationFailed {
                field: "server.user_id_header".to_string(),
                message: format!("{header_raw:?} is not a valid header name: {e}"),
            }
        })?;

        let cookie_name = config.effective_anon_cookie_name().trim().to_string();
        let valid_cookie = !cookie_name.is_empty()
            && cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid_cookie {
            return Err(ConfigError::ValidationFailed {
                field: "server.anon_cookie_name".to_string(),
                message: format!("{cookie_name:?} is not a valid cookie name"),
            });
        }

        Ok(Self {
            header,
            cookie_name,
        })
    }
}

/// How the id was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Header(String),
    Cookie(String),
    /// Freshly generated; the response must set the cookie.
    Issued(String),
}

impl Identity {
    pub fn user_id(&self) -> &str {
        match self {
            Self::Header(id) | Self::Cookie(id) | Self::Issued(id) => id,
        }
    }
}

/// Resolve the caller from request headers. Blank values are skipped.
pub fn identify(headers: &HeaderMap, config: &IdentityConfig) -> Identity {
    if let Some(id) = headers
        .get(&config.header)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        return Identity::Header(id.to_string());
    }
    if let Some(id) = cookie_value(headers, &config.cookie_name) {
        return Identity::Cookie(id);
    }
    Identity::Issued(Uuid::new_v4().simple().to_string())
}

/// First non-empty value of cookie `name` across all `Cookie` headers.
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, v)| *k == name && !v.trim().is_empty())
        .map(|(_, v)| v.trim().to_string())
}

/// `Set-Cookie` value for a freshly issued id.
pub fn issue_cookie(name: &str, user_id: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{name}={user_id}; Path=/; HttpOnly; SameSite=Lax"
    ))
    .ok()
}

/// Middleware: attach `UserId` to the request, set the cookie on the way out
/// when a new id was issued.
pub async fn resolve_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let identity = identify(request.headers(), state.identity());
    request
        .extensions_mut()
        .insert(UserId(identity.user_id().to_string()));

    let mut response = next.run(request).await;

    if let Identity::Issued(id) = &identity {
        match issue_cookie(&state.identity().cookie_name, id) {
            Some(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            None => tracing::warn!(user_id = %id, "could not encode identity cookie"),
        }
    }
    response
}
