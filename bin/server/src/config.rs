//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from `NODEBIRD_`-prefixed environment
//! variables. Nested keys use `__` as separator, e.g.
//! `NODEBIRD_LOGGING__FILTER`.
//!
//! Site options (address, reload port, output names) are not part of this
//! configuration; Leptos reads them from the crate's
//! `[package.metadata.leptos]` table.

use serde::Deserialize;

/// Environment variable prefix for all server settings.
pub const ENV_PREFIX: &str = "NODEBIRD";

/// Server configuration.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Static asset configuration.
    #[serde(default)]
    pub assets: AssetsConfig,
}

/// Logging-related configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

/// Static asset configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Directory served under `/pkg` (the compiled WASM bundle and CSS).
    #[serde(default = "default_assets_dir")]
    pub dir: String,
}

/// Default tracing filter.
pub fn default_log_filter() -> String {
    "info,tower_http=debug".to_string()
}

fn default_assets_dir() -> String {
    "target/site/pkg".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: default_assets_dir(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be deserialized.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    fn from_environment(env: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(env.prefix_separator("_").separator("__").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(vars: &[(&str, &str)]) -> ServerConfig {
        let source = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<config::Map<_, _>>();
        ServerConfig::from_environment(
            config::Environment::with_prefix(ENV_PREFIX).source(Some(source)),
        )
        .expect("config should load")
    }

    #[test]
    fn server_config_has_correct_defaults() {
        assert_eq!(LoggingConfig::default().filter, "info,tower_http=debug");
        assert_eq!(AssetsConfig::default().dir, "target/site/pkg");
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = load(&[]);
        assert_eq!(config.logging.filter, default_log_filter());
        assert_eq!(config.assets.dir, "target/site/pkg");
    }

    #[test]
    fn nested_variables_override_defaults() {
        let config = load(&[
            ("NODEBIRD_LOGGING__FILTER", "debug"),
            ("NODEBIRD_ASSETS__DIR", "/srv/nodebird/pkg"),
        ]);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.assets.dir, "/srv/nodebird/pkg");
    }

    #[test]
    fn unprefixed_variables_are_ignored() {
        let config = load(&[("LOGGING__FILTER", "trace")]);
        assert_eq!(config.logging.filter, default_log_filter());
    }
}
