//! cPanel connection configuration.
//!
//! [`CpanelConfig`] is built once at startup (usually from the
//! environment) and is immutable afterwards. It is a pure value: the
//! base URL and authorization header are derived on demand and no
//! network activity happens here.

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, UapiError};

/// Default cPanel UAPI port (TLS).
pub const DEFAULT_PORT: u16 = 2083;

/// Connection settings for one cPanel account.
#[derive(Clone, Serialize, Deserialize)]
pub struct CpanelConfig {
    /// cPanel account name (the `USERNAME` environment variable).
    pub username: String,

    /// Hostname of the cPanel server, without scheme or port.
    pub hostname: String,

    /// API token for the account. Never logged; the `Debug` impl masks it.
    pub api_token: String,

    /// Port the UAPI listens on. Defaults to 2083.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whether to connect over HTTPS. Defaults to true.
    #[serde(default = "default_ssl")]
    pub ssl: bool,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_ssl() -> bool {
    true
}

impl CpanelConfig {
    /// Create a configuration with the default port and TLS enabled.
    pub fn new(
        username: impl Into<String>,
        hostname: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            hostname: hostname.into(),
            api_token: api_token.into(),
            port: DEFAULT_PORT,
            ssl: true,
        }
    }

    /// Build a configuration from the process environment.
    ///
    /// Required: `USERNAME`, `HOSTNAME`, `CPANEL_API_TOKEN`. A missing or
    /// empty value produces [`UapiError::NotConfigured`] naming the
    /// variable, before any request can be made.
    ///
    /// Optional: `PORT` (unparseable or zero values are ignored with a
    /// warning and the default is kept) and `SSL` (`true`, `1`, `yes`,
    /// `on` enable TLS, case-insensitively; anything else disables it).
    pub fn from_env() -> Result<Self> {
        let username = require_env("USERNAME")?;
        let hostname = require_env("HOSTNAME")?;
        let api_token = require_env("CPANEL_API_TOKEN")?;

        let mut config = Self::new(username, hostname, api_token);

        if let Ok(port) = env::var("PORT") {
            match port.parse::<u16>() {
                Ok(p) if p > 0 => config.port = p,
                _ => warn!(value = %port, "ignoring unusable PORT, keeping default"),
            }
        }

        if let Ok(ssl) = env::var("SSL") {
            config.ssl = parse_bool(&ssl);
        }

        Ok(config)
    }

    /// The base URL for this account, `{scheme}://{hostname}:{port}`.
    pub fn base_url(&self) -> String {
        let scheme = if self.ssl { "https" } else { "http" };
        format!("{}://{}:{}", scheme, self.hostname, self.port)
    }

    /// The `Authorization` header value, `cpanel {username}:{token}`.
    pub fn auth_header(&self) -> String {
        format!("cpanel {}:{}", self.username, self.api_token)
    }
}

fn require_env(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(UapiError::NotConfigured(format!("set {name} env var"))),
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

impl fmt::Debug for CpanelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CpanelConfig")
            .field("username", &self.username)
            .field("hostname", &self.hostname)
            .field("api_token", &"***")
            .field("port", &self.port)
            .field("ssl", &self.ssl)
            .finish()
    }
}
