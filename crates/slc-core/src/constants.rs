//! Compiled defaults shared across crates.

/// Default listen address for the HTTP transport.
pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

/// Default request header carrying an explicit user id.
pub const DEFAULT_USER_ID_HEADER: &str = "X-User-ID";

/// Default cookie carrying the anonymous user id.
pub const DEFAULT_ANON_COOKIE_NAME: &str = "slc_uid";

/// Default SQLite database file.
pub const DEFAULT_DB_PATH: &str = "slc.db";

/// Default number of pooled read connections.
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

/// Upper bound for pooled read connections.
pub const MAX_READ_POOL_SIZE: usize = 8;

/// Project config file name looked up in the working root.
pub const PROJECT_CONFIG_FILE: &str = "slc.toml";

/// Env var holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "SLC_LOG";
