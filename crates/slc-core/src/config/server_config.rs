//! HTTP transport configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ANON_COOKIE_NAME, DEFAULT_BIND, DEFAULT_USER_ID_HEADER};

/// Configuration for the HTTP transport.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address. Default: `0.0.0.0:8080`.
    pub bind: Option<String>,
    /// Header carrying an explicit user id. Default: `X-User-ID`.
    pub user_id_header: Option<String>,
    /// Cookie carrying the anonymous user id. Default: `slc_uid`.
    pub anon_cookie_name: Option<String>,
}

impl ServerConfig {
    pub fn effective_bind(&self) -> String {
        self.bind.clone().unwrap_or_else(|| DEFAULT_BIND.to_string())
    }

    pub fn effective_user_id_header(&self) -> String {
        self.user_id_header
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_ID_HEADER.to_string())
    }

    pub fn effective_anon_cookie_name(&self) -> String {
        self.anon_cookie_name
            .clone()
            .unwrap_or_else(|| DEFAULT_ANON_COOKIE_NAME.to_string())
    }
}
