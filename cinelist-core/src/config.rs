//! Centralized configuration for Cinelist.
//!
//! Defaults match the public metadata API. Environment variables and CLI
//! flags layer on top, in that order.

use std::time::Duration;

use url::Url;

use crate::mode::RuntimeMode;
use crate::{CinelistError, Result};

/// Environment variable holding the metadata API access key.
pub const API_KEY_ENV: &str = "OMDB_API_KEY";
/// Environment variable overriding the metadata API base URL.
pub const BASE_URL_ENV: &str = "CINELIST_API_BASE_URL";
/// Environment variable selecting the runtime mode.
pub const MODE_ENV: &str = "CINELIST_MODE";

/// Central configuration for a Cinelist session.
#[derive(Debug, Clone, Default)]
pub struct CinelistConfig {
    pub api: ApiConfig,
    pub display: DisplayConfig,
    pub mode: RuntimeMode,
}

/// Metadata API connection settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL both endpoints are served from
    pub base_url: String,
    /// Access key sent as the `apikey` parameter
    pub api_key: Option<String>,
    /// Plot length requested from the lookup endpoint
    pub plot_mode: PlotMode,
    /// User agent for HTTP requests
    pub user_agent: &'static str,
    /// Per-request timeout (None = wait indefinitely)
    pub request_timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.omdbapi.com/".to_string(),
            api_key: None,
            plot_mode: PlotMode::Short,
            user_agent: concat!("cinelist/", env!("CARGO_PKG_VERSION")),
            request_timeout: None,
        }
    }
}

/// Plot length mode understood by the lookup endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PlotMode {
    #[default]
    Short,
    Full,
}

impl PlotMode {
    /// Value of the `plot` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            PlotMode::Short => "short",
            PlotMode::Full => "full",
        }
    }
}

/// Presentation settings shared by the renderers.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Image shown on cards whose title has no poster
    pub poster_placeholder_url: String,
    /// Start the session in dark theme
    pub start_dark: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            poster_placeholder_url: "https://via.placeholder.com/300x450?text=No+Image"
                .to_string(),
            start_dark: false,
        }
    }
}

impl CinelistConfig {
    /// Creates configuration with process environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides read through `lookup`; unparseable values are ignored.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.api.api_key = Some(key.trim().to_string());
        }

        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.api.base_url = base_url.trim().to_string();
        }

        if let Some(mode) = lookup(MODE_ENV) {
            match mode.parse() {
                Ok(mode) => self.mode = mode,
                Err(reason) => tracing::warn!("Ignoring {MODE_ENV}: {reason}"),
            }
        }

        self
    }

    /// Parsed metadata API base URL.
    ///
    /// # Errors
    ///
    /// - `CinelistError::Configuration` - Base URL is not an absolute http(s) URL
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.api.base_url).map_err(|e| CinelistError::Configuration {
            reason: format!("invalid API base URL '{}': {e}", self.api.base_url),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(CinelistError::Configuration {
                reason: format!("API base URL must use http or https, got '{scheme}'"),
            }),
        }
    }

    /// Checks the settings required by the selected mode.
    ///
    /// # Errors
    ///
    /// - `CinelistError::Configuration` - Production mode without an API key, or an invalid base URL
    pub fn validate(&self) -> Result<()> {
        if self.mode.is_production() {
            if self.api.api_key.is_none() {
                return Err(CinelistError::Configuration {
                    reason: format!(
                        "an API key is required in production mode (set {API_KEY_ENV} or pass --api-key)"
                    ),
                });
            }
            self.base_url()?;
        }
        Ok(())
    }

    /// Configuration for the offline demo catalog.
    pub fn for_development() -> Self {
        Self {
            mode: RuntimeMode::Development,
            ..Default::default()
        }
    }
}
