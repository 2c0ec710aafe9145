//! Server configuration parsed from environment variables.

use dar_ui::net::config::{ApiConfig, DEFAULT_API_BASE_URL};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid DAR_API_BASE_URL (expected http(s) URL or empty for same-origin): {0}")]
    InvalidApiBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Registration backend the rendered pages call from the browser.
    pub api: ApiConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DAR_API_BASE_URL`: default the hosted DAR backend; an empty
    ///   value means same-origin `/api/...` paths
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = std::env::var("PORT").ok();
        let api_base = std::env::var("DAR_API_BASE_URL").ok();
        Self::from_values(port.as_deref(), api_base.as_deref())
    }

    fn from_values(port: Option<&str>, api_base: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
        };
        let api_base = api_base.map_or(DEFAULT_API_BASE_URL, str::trim);
        if !api_base.is_empty() && !api_base.starts_with("http://") && !api_base.starts_with("https://") {
            return Err(ConfigError::InvalidApiBaseUrl(api_base.to_owned()));
        }
        Ok(Self { port, api: ApiConfig::new(api_base) })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
