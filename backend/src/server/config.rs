//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use url::Url;

use crate::settings::{AppSettings, SettingsError};

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) api_url: Url,
    pub(crate) upstream_timeout: Duration,
    pub(crate) upstream_retries: u8,
    pub(crate) cookie_secure: bool,
}

impl ServerConfig {
    /// Construct a configuration with default upstream and cookie settings.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, api_url: Url) -> Self {
        Self {
            bind_addr,
            api_url,
            upstream_timeout: Duration::from_secs(10),
            upstream_retries: 1,
            cookie_secure: true,
        }
    }

    /// Validate loaded settings into a server configuration.
    ///
    /// # Errors
    /// Returns [`SettingsError`] when a value cannot be used.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, SettingsError> {
        Ok(Self::new(settings.bind_addr()?, settings.api_url()?)
            .with_upstream_timeout(settings.upstream_timeout()?)
            .with_upstream_retries(settings.upstream_retries())
            .with_cookie_secure(settings.cookie_secure()))
    }

    #[must_use]
    pub fn with_upstream_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_upstream_retries(mut self, retries: u8) -> Self {
        self.upstream_retries = retries;
        self
    }

    /// Toggle the `Secure` attribute on the session cookie.
    ///
    /// Disable only for plain-HTTP local development and tests.
    #[must_use]
    pub fn with_cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = secure;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the upstream base URL.
    #[must_use]
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }
}
