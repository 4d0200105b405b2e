//! Application configuration from file and environment variables
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. Environment variables (prefixed with WAYPOST_)
//! 2. Config file (config.toml)
//! 3. Default values
//!
//! Secrets like the database password and the session signing key stay in
//! environment variables, not in the config file.

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::RwLock;

/// Global application configuration
pub static APP_CONFIG: Lazy<RwLock<AppConfig>> = Lazy::new(|| {
    RwLock::new(AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config file, using defaults: {}", e);
        AppConfig::default()
    }))
});

/// Site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Waypost".to_string(),
            description: "Community spots, events and collections".to_string(),
            base_url: "http://localhost:8080".to_string(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub site: SiteConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("WAYPOST").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Load configuration from an explicit file path plus the environment.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path))
            .add_source(Environment::with_prefix("WAYPOST").separator("__"))
            .build()?
            .try_deserialize()
    }
}

/// Force the global configuration to load. Call once at startup.
pub fn init() {
    Lazy::force(&APP_CONFIG);
}

/// Returns a snapshot of the current configuration.
pub fn get() -> AppConfig {
    APP_CONFIG
        .read()
        .expect("App config lock poisoned")
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_sane() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.site.name, "Waypost");
    }

    #[test]
    fn loads_partial_file_with_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).expect("Failed to create config file");
        writeln!(file, "[site]\nname = \"Test Site\"\n\n[server]\nport = 9000")
            .expect("Failed to write config file");

        let config = AppConfig::load_from(&path).expect("Failed to load config");
        assert_eq!(config.site.name, "Test Site");
        assert_eq!(config.server.port, 9000);
        // Unset values fall back to defaults.
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.site.base_url, "http://localhost:8080");
    }
}
