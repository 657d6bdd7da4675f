//! Centralized configuration for Marquee.
//!
//! All tunable parameters are defined here and handed to the components that
//! need them. Nothing downstream reads the process environment on its own.

use std::fmt;

use crate::mode::RuntimeMode;
use crate::{MarqueeError, Result};

/// Environment variable holding the TMDB access credential.
pub const TMDB_API_KEY_VAR: &str = "TMDB_API_KEY";

/// Central configuration for all Marquee components.
#[derive(Debug, Clone, Default)]
pub struct MarqueeConfig {
    pub tmdb: TmdbConfig,
    pub server: ServerConfig,
    pub mode: RuntimeMode,
}

/// Connection settings for the external movie database.
///
/// A missing API key is not rejected here; the movie client reports it as a
/// configuration error on every call.
#[derive(Clone, PartialEq)]
pub struct TmdbConfig {
    /// TMDB v3 API key
    pub api_key: Option<String>,
    /// Base URL of the TMDB v3 API, without trailing slash
    pub base_url: String,
    /// Locale sent as the `language` parameter on every request
    pub language: String,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.themoviedb.org/3".to_string(),
            language: "ja-JP".to_string(),
        }
    }
}

impl fmt::Debug for TmdbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .finish()
    }
}

/// Inbound HTTP server settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl MarqueeConfig {
    /// Creates configuration from the process environment.
    ///
    /// # Errors
    /// - `MarqueeError::Configuration` - A variable is set but cannot be parsed
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Creates configuration from an arbitrary variable lookup.
    ///
    /// Unset variables keep their defaults. Blank values count as unset.
    ///
    /// # Errors
    /// - `MarqueeError::Configuration` - A variable is set but cannot be parsed
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        config.tmdb.api_key = lookup(TMDB_API_KEY_VAR);

        if let Some(base_url) = lookup("MARQUEE_TMDB_BASE_URL") {
            config.tmdb.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Some(language) = lookup("MARQUEE_LANGUAGE") {
            config.tmdb.language = language;
        }

        if let Some(host) = lookup("MARQUEE_HOST") {
            config.server.host = host;
        }

        if let Some(port) = lookup("MARQUEE_PORT") {
            config.server.port = port.trim().parse().map_err(|_| MarqueeError::Configuration {
                reason: format!("MARQUEE_PORT must be a port number, got '{port}'"),
            })?;
        }

        if let Some(mode) = lookup("MARQUEE_MODE") {
            config.mode = mode
                .parse()
                .map_err(|reason| MarqueeError::Configuration { reason })?;
        }

        Ok(config)
    }

    /// Creates a configuration for offline development against demo data.
    pub fn for_development() -> Self {
        Self {
            mode: RuntimeMode::Development,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_config_values() {
        let config = MarqueeConfig::default();

        assert_eq!(config.tmdb.api_key, None);
        assert_eq!(config.tmdb.base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.tmdb.language, "ja-JP");
        assert_eq!(config.server.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.mode, RuntimeMode::Production);
    }

    #[test]
    fn test_env_override() {
        let config = MarqueeConfig::from_vars(lookup_from(&[
            ("TMDB_API_KEY", "secret"),
            ("MARQUEE_TMDB_BASE_URL", "http://localhost:9000/3/"),
            ("MARQUEE_LANGUAGE", "en-US"),
            ("MARQUEE_HOST", "0.0.0.0"),
            ("MARQUEE_PORT", "8080"),
            ("MARQUEE_MODE", "dev"),
        ]))
        .unwrap();

        assert_eq!(config.tmdb.api_key.as_deref(), Some("secret"));
        assert_eq!(config.tmdb.base_url, "http://localhost:9000/3");
        assert_eq!(config.tmdb.language, "en-US");
        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.mode, RuntimeMode::Development);
    }

    #[test]
    fn test_blank_api_key_is_treated_as_missing() {
        let config = MarqueeConfig::from_vars(lookup_from(&[("TMDB_API_KEY", "   ")])).unwrap();
        assert_eq!(config.tmdb.api_key, None);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = MarqueeConfig::from_vars(lookup_from(&[("MARQUEE_PORT", "eighty")]));
        assert!(matches!(result, Err(MarqueeError::Configuration { .. })));
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        let result = MarqueeConfig::from_vars(lookup_from(&[("MARQUEE_MODE", "staging")]));
        assert!(matches!(result, Err(MarqueeError::Configuration { .. })));
    }

    #[test]
    fn test_debug_output_redacts_api_key() {
        let config =
            MarqueeConfig::from_vars(lookup_from(&[("TMDB_API_KEY", "super-secret-key")])).unwrap();
        let rendered = format!("{config:?}");

        assert!(!rendered.contains("super-secret-key"));
        assert!(rendered.contains("<redacted>"));
    }
}
