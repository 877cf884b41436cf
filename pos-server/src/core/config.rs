//! Server configuration
//!
//! All settings can be overridden through environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | WORK_DIR | /var/lib/kams/pos | Working directory (database, logs) |
//! | HTTP_PORT | 3000 | HTTP API port |
//! | IDENTITY_URL | (unset) | Identity provider base URL; unset = static dev provider |
//! | STORE_SESSION_COOKIE | kams_pos_session | Name of the provider-owned session cookie |
//! | ENVIRONMENT | development | development \| staging \| production |

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Base URL of the external identity provider that owns the store session.
    /// When unset the server falls back to the static development provider.
    pub identity_url: Option<String>,
    /// Cookie name under which the provider stores the opaque session token.
    /// The token is never parsed locally, only forwarded for verification.
    pub store_session_cookie: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, using defaults for
    /// anything unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/kams/pos".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            identity_url: std::env::var("IDENTITY_URL").ok().filter(|u| !u.is_empty()),
            store_session_cookie: std::env::var("STORE_SESSION_COOKIE")
                .unwrap_or_else(|_| "kams_pos_session".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override working directory and port, commonly used in tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Directory holding the embedded database files
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
