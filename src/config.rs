//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants for
//! HTTP cache headers, logging defaults, and default paths. `AppConfig` is the
//! root configuration struct; every section is optional and falls back to the
//! defaults defined here.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Liveness probes must never be answered from an intermediate cache
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

/// API description - changes only on deploy
pub const HTTP_CACHE_DOCS_MAX_AGE: u32 = 60;

pub const CACHE_CONTROL_DOCS: &str = formatcp!("public, max-age={}", HTTP_CACHE_DOCS_MAX_AGE);

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Service title reported in the API description
pub const DEFAULT_SERVICE_TITLE: &str = "Marketing Hub Scrapers";

/// Default log filter when neither the CLI, RUST_LOG, nor the config set one
pub const DEFAULT_LOG_FILTER: &str = formatcp!("{}=info", env!("CARGO_CRATE_NAME"));

/// Default bind host
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Seconds to wait for in-flight connections after a shutdown signal
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 30;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Service identity used for introspection
    #[serde(default)]
    pub service: ServiceConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Grace period for connection draining on shutdown
    #[serde(default = "HttpServerConfig::default_shutdown_grace")]
    pub shutdown_grace_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_grace_seconds: Self::default_shutdown_grace(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    fn default_shutdown_grace() -> u64 {
        DEFAULT_SHUTDOWN_GRACE_SECS
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceConfig {
    /// Human-readable service name. Has no behavioral effect.
    #[serde(default = "ServiceConfig::default_title")]
    pub title: String,
    /// Version string, populated at runtime
    #[serde(skip_deserializing, default = "ServiceConfig::default_version")]
    pub version: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            title: Self::default_title(),
            version: Self::default_version(),
        }
    }
}

impl ServiceConfig {
    fn default_title() -> String {
        DEFAULT_SERVICE_TITLE.to_string()
    }

    fn default_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable
    #[default]
    Text,
    /// Structured, one JSON object per line
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    /// Filter directive, overridden by RUST_LOG and --log-level
    pub filter: Option<String>,
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load an explicitly requested file, or the default location when none
    /// was given. Only the default location may be absent.
    pub fn load_or_default(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::load_if_exists(DEFAULT_CONFIG_PATH),
        }
    }

    /// Load `path` if it exists, otherwise return the built-in defaults.
    pub fn load_if_exists<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No configuration file found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.http.host.trim().is_empty() {
            return Err(ConfigError::Validation("http.host must not be empty".to_string()));
        }
        if self.service.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "service.title must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8000);
        assert_eq!(config.http.shutdown_grace_seconds, 30);
        assert_eq!(config.service.title, "Marketing Hub Scrapers");
        assert_eq!(config.service.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.logging.format, LogFormat::Text);
        assert!(config.logging.filter.is_none());
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml(
            r#"
            [http]
            port = 9090

            [logging]
            format = "json"
            filter = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 9090);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.filter.as_deref(), Some("debug"));
        assert_eq!(config.service.title, DEFAULT_SERVICE_TITLE);
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let err = AppConfig::from_toml("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_title_rejected() {
        let err = AppConfig::from_toml("[service]\ntitle = \"  \"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_empty_host_rejected() {
        let err = AppConfig::from_toml("[http]\nhost = \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_version_not_overridable() {
        let config = AppConfig::from_toml("[service]\nversion = \"9.9.9\"\n").unwrap();
        assert_eq!(config.service.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[service]\ntitle = \"Scrapers Staging\"").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.service.title, "Scrapers Staging");
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = AppConfig::load_or_default(path.to_str()).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_missing_default_location_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join("default.toml");

        let config = AppConfig::load_if_exists(&path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_existing_default_location_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.toml");
        std::fs::write(&path, "[http]\nport = 8081\n").unwrap();

        let config = AppConfig::load_if_exists(&path).unwrap();
        assert_eq!(config.http.port, 8081);
    }

    #[test]
    fn test_default_log_filter_names_crate() {
        assert_eq!(DEFAULT_LOG_FILTER, "marketing_hub_scrapers=info");
    }
}
