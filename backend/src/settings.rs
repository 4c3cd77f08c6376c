//! Application configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `TRIPS_*` environment variables and an optional
//! configuration file. Flags override the environment, which overrides the file.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::outbound::upstream::MAX_RETRIES;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Configuration errors surfaced at startup.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("api_url is required (set TRIPS_API_URL or --api-url)")]
    MissingApiUrl,
    #[error("api_url {value:?} is not an absolute http(s) URL: {reason}")]
    InvalidApiUrl { value: String, reason: String },
    #[error("bind_addr {value:?} is not a socket address: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("upstream_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Front-end settings.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRIPS")]
pub struct AppSettings {
    /// Base URL of the upstream travel API.
    pub api_url: Option<String>,
    /// Socket address the HTTP server listens on.
    pub bind_addr: Option<String>,
    /// Deadline for a single upstream attempt.
    pub upstream_timeout_secs: Option<u64>,
    /// Retries after a transport failure; clamped to the client maximum.
    pub upstream_retries: Option<u8>,
    /// Drop the `Secure` attribute from the session cookie (plain-HTTP
    /// development only).
    #[ortho_config(default = false)]
    pub cookie_insecure: bool,
}

impl AppSettings {
    /// Upstream base URL; endpoint paths are resolved against it.
    pub fn api_url(&self) -> Result<Url, SettingsError> {
        let raw = self
            .api_url
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .ok_or(SettingsError::MissingApiUrl)?;
        let invalid = |reason: String| SettingsError::InvalidApiUrl {
            value: raw.to_owned(),
            reason,
        };
        let url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", url.scheme())));
        }
        Ok(url)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse()
            .map_err(|source| SettingsError::InvalidBindAddr {
                value: raw.to_owned(),
                source,
            })
    }

    pub fn upstream_timeout(&self) -> Result<Duration, SettingsError> {
        match self
            .upstream_timeout_secs
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS)
        {
            0 => Err(SettingsError::ZeroTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }

    pub fn upstream_retries(&self) -> u8 {
        self.upstream_retries.unwrap_or(MAX_RETRIES).min(MAX_RETRIES)
    }

    /// Whether the session cookie is marked `Secure`; on unless opted out.
    pub fn cookie_secure(&self) -> bool {
        !self.cookie_insecure
    }
}
