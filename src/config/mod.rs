//! Configuration management
//!
//! Loads configuration from an optional file at
//! ~/.config/gmaps-location/config.toml, then applies environment overrides.
//! The resulting value is built once at startup and only read afterwards.

pub mod defaults;

use crate::constants::api::GMAPS_BASE_URL;
use crate::constants::env::{GMAPS_API_KEY_VAR, HOSTNAME_FILE, HOSTNAME_VAR};
use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Google Maps settings
    #[serde(default)]
    pub gmaps: GmapsConfig,

    /// Local machine hostname, informational only
    #[serde(skip)]
    pub hostname: String,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Google Maps settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GmapsConfig {
    /// API key appended to every upstream URL
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the Google Maps web services
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_base_url() -> String {
    GMAPS_BASE_URL.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for GmapsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load the process configuration
    ///
    /// Reads the config file if present, then applies the environment.
    /// A missing API key is not an error; upstream calls will fail instead.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_env(|name| std::env::var(name).ok());
        config.hostname = resolve_hostname();
        Ok(config)
    }

    /// Load only the config file, without environment overrides
    pub fn load_file() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific path, falling back to defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Apply environment overrides using the given variable lookup
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(GMAPS_API_KEY_VAR) {
            self.gmaps.api_key = key;
        }
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),
            ["gmaps", "api_key"] => Some(self.gmaps.api_key.clone()),
            ["gmaps", "base_url"] => Some(self.gmaps.base_url.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid port value: {}", value)))?;
            }
            ["gmaps", "api_key"] => {
                self.gmaps.api_key = value.to_string();
            }
            ["gmaps", "base_url"] => {
                self.gmaps.base_url = value.trim_end_matches('/').to_string();
            }
            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec!["server.host", "server.port", "gmaps.api_key", "gmaps.base_url"]
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Resolve the machine hostname from `HOSTNAME`, then `/etc/hostname`
///
/// Returns an empty string when neither is available.
pub fn resolve_hostname() -> String {
    resolve_hostname_with(|name| std::env::var(name).ok(), Path::new(HOSTNAME_FILE))
}

/// Resolve the hostname from a variable lookup, falling back to `hostname_file`
pub fn resolve_hostname_with<F>(lookup: F, hostname_file: &Path) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(HOSTNAME_VAR)
        .filter(|h| !h.is_empty())
        .or_else(|| {
            fs::read_to_string(hostname_file)
                .ok()
                .map(|h| h.trim().to_string())
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.gmaps.base_url, "https://maps.googleapis.com/maps/api");
        assert!(config.gmaps.api_key.is_empty());
    }

    #[test]
    fn test_server_addr() {
        let config = Config::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_env_overrides_api_key() {
        let mut config = Config::default();
        config.gmaps.api_key = "from-file".to_string();

        config.apply_env(|name| match name {
            "GMAPS_API" => Some("from-env".to_string()),
            _ => None,
        });

        assert_eq!(config.gmaps.api_key, "from-env");
    }

    #[test]
    fn test_env_without_key_keeps_file_value() {
        let mut config = Config::default();
        config.gmaps.api_key = "from-file".to_string();

        config.apply_env(|_| None);

        assert_eq!(config.gmaps.api_key, "from-file");
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        config.set("server.port", "9090").unwrap();
        assert_eq!(config.get("server.port"), Some("9090".to_string()));

        config.set("gmaps.base_url", "http://127.0.0.1:9000/").unwrap();
        assert_eq!(config.gmaps.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_set_invalid() {
        let mut config = Config::default();
        assert!(config.set("invalid.key", "value").is_err());
        assert!(config.set("server.port", "not_a_port").is_err());
        assert_eq!(config.get("invalid.key"), None);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.server.port, 8080);
        assert!(!path.exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.server.port = 3000;
        config.gmaps.api_key = "abc".to_string();
        config.hostname = "not-saved".to_string();
        config.save_to(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[server]"));
        assert!(content.contains("[gmaps]"));
        assert!(!content.contains("not-saved"));

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.server.port, 3000);
        assert_eq!(loaded.gmaps.api_key, "abc");
        assert!(loaded.hostname.is_empty());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[gmaps]\napi_key = \"k\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.gmaps.api_key, "k");
        assert_eq!(config.gmaps.base_url, "https://maps.googleapis.com/maps/api");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_hostname_from_env() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("hostname");
        fs::write(&file, "from-file\n").unwrap();

        let hostname = resolve_hostname_with(
            |name| (name == "HOSTNAME").then(|| "from-env".to_string()),
            &file,
        );
        assert_eq!(hostname, "from-env");
    }

    #[test]
    fn test_hostname_falls_back_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("hostname");
        fs::write(&file, "  from-file\n").unwrap();

        assert_eq!(resolve_hostname_with(|_| None, &file), "from-file");
        assert_eq!(
            resolve_hostname_with(|_| Some(String::new()), &file),
            "from-file"
        );
    }

    #[test]
    fn test_hostname_missing_everywhere() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("missing");

        assert_eq!(resolve_hostname_with(|_| None, &file), "");
    }

    #[test]
    fn test_unreadable_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();

        let err = Config::load_from(temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "server = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
