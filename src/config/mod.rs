//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/adresse-search/config.toml

pub mod defaults;

use crate::coord::Coordinate;
use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Address API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Search policy
    #[serde(default)]
    pub search: SearchSettings,

    /// Map view settings
    #[serde(default)]
    pub map: MapConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Address API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL; `search/` and `reverse/` are resolved against it
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Search policy passed to the adapters at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Suggestions requested per keystroke
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Results requested per forward search
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,

    /// Buffer radius around a result point, in meters
    #[serde(default = "default_buffer_meters")]
    pub buffer_meters: f64,

    /// Search box placeholder text
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

/// Map view settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// View center longitude, used as suggestion bias when none is given
    #[serde(default = "default_center_lon")]
    pub center_lon: f64,

    /// View center latitude
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
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

// Default value functions for serde
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}
fn default_result_limit() -> usize {
    DEFAULT_RESULT_LIMIT
}
fn default_buffer_meters() -> f64 {
    DEFAULT_BUFFER_METERS
}
fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}
fn default_center_lon() -> f64 {
    DEFAULT_CENTER_LON
}
fn default_center_lat() -> f64 {
    DEFAULT_CENTER_LAT
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            suggestion_limit: default_suggestion_limit(),
            result_limit: default_result_limit(),
            buffer_meters: default_buffer_meters(),
            placeholder: default_placeholder(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lon: default_center_lon(),
            center_lat: default_center_lat(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl MapConfig {
    /// The configured view center as a validated coordinate
    pub fn center(&self) -> Result<Coordinate> {
        Coordinate::new(self.center_lon, self.center_lat)
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

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, creating it if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            let config: Config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Check the values `set` would refuse
    pub fn validate(&self) -> Result<()> {
        check_limit("search.suggestion_limit", self.search.suggestion_limit)?;
        check_limit("search.result_limit", self.search.result_limit)?;
        check_buffer(self.search.buffer_meters)?;
        self.map
            .center()
            .map_err(|e| Error::Config(format!("Invalid map center: {}", e)))?;
        Ok(())
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
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

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["api", "base_url"] => Some(self.api.base_url.clone()),

            ["search", "suggestion_limit"] => Some(self.search.suggestion_limit.to_string()),
            ["search", "result_limit"] => Some(self.search.result_limit.to_string()),
            ["search", "buffer_meters"] => Some(self.search.buffer_meters.to_string()),
            ["search", "placeholder"] => Some(self.search.placeholder.clone()),

            ["map", "center_lon"] => Some(self.map.center_lon.to_string()),
            ["map", "center_lat"] => Some(self.map.center_lat.to_string()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["api", "base_url"] => {
                self.api.base_url = value.to_string();
            }

            ["search", "suggestion_limit"] => {
                self.search.suggestion_limit = parse_limit(key, value)?;
            }
            ["search", "result_limit"] => {
                self.search.result_limit = parse_limit(key, value)?;
            }
            ["search", "buffer_meters"] => {
                let meters: f64 = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid buffer value: {}", value))
                })?;
                self.search.buffer_meters = check_buffer(meters)?;
            }
            ["search", "placeholder"] => {
                self.search.placeholder = value.to_string();
            }

            ["map", "center_lon"] => {
                let lon = parse_degrees(value)?;
                Coordinate::new(lon, self.map.center_lat)
                    .map_err(|e| Error::Config(e.to_string()))?;
                self.map.center_lon = lon;
            }
            ["map", "center_lat"] => {
                let lat = parse_degrees(value)?;
                Coordinate::new(self.map.center_lon, lat)
                    .map_err(|e| Error::Config(e.to_string()))?;
                self.map.center_lat = lat;
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid port value: {}", value))
                })?;
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "api.base_url",
            "search.suggestion_limit",
            "search.result_limit",
            "search.buffer_meters",
            "search.placeholder",
            "map.center_lon",
            "map.center_lat",
            "server.host",
            "server.port",
        ]
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_limit(key: &str, value: &str) -> Result<usize> {
    let limit = value.parse::<usize>().map_err(|_| {
        Error::Config(format!("{} must be a positive integer: {}", key, value))
    })?;
    check_limit(key, limit)
}

fn check_limit(key: &str, limit: usize) -> Result<usize> {
    if limit == 0 {
        return Err(Error::Config(format!(
            "{} must be a positive integer: {}",
            key, limit
        )));
    }
    Ok(limit)
}

fn check_buffer(meters: f64) -> Result<f64> {
    if !meters.is_finite() || meters < 0.0 {
        return Err(Error::Config(format!(
            "Buffer must be a non-negative distance: {}",
            meters
        )));
    }
    Ok(meters)
}

fn parse_degrees(value: &str) -> Result<f64> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("Invalid coordinate value: {}", value)))
}
