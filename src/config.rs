//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Launch dataset location
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_path")]
    pub path: String,
}

fn default_data_path() -> String {
    "data/spacex_launch_dash.csv".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Page layout settings
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Payload slider lower bound; dataset minimum when unset
    #[serde(default)]
    pub slider_min: Option<f64>,

    /// Payload slider upper bound; dataset maximum when unset
    #[serde(default)]
    pub slider_max: Option<f64>,

    #[serde(default = "default_slider_step")]
    pub slider_step: f64,
}

fn default_title() -> String {
    "SpaceX Launch Records Dashboard".to_string()
}

fn default_slider_step() -> f64 {
    1000.0
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            slider_min: None,
            slider_max: None,
            slider_step: default_slider_step(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// First existing config file among the default locations
    pub fn default_path() -> Option<PathBuf> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("launch-dash").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        config_paths.into_iter().flatten().find(|p| p.exists())
    }

    /// Apply command-line overrides; these win over file and environment
    pub fn apply_cli_overrides(
        &mut self,
        data: Option<&Path>,
        host: Option<String>,
        port: Option<u16>,
    ) {
        if let Some(data) = data {
            self.data.path = data.to_string_lossy().to_string();
        }
        if let Some(host) = host {
            self.api.host = host;
        }
        if let Some(port) = port {
            self.api.port = port;
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Data overrides
        if let Ok(path) = std::env::var("LAUNCH_DASH_DATA_PATH") {
            self.data.path = path;
        }

        // API overrides
        if let Ok(host) = std::env::var("LAUNCH_DASH_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("LAUNCH_DASH_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("LAUNCH_DASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("LAUNCH_DASH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Launch Dash Configuration
#
# Environment variables override these settings:
# - LAUNCH_DASH_DATA_PATH
# - LAUNCH_DASH_HOST
# - LAUNCH_DASH_PORT
# - LAUNCH_DASH_LOG_LEVEL
# - LAUNCH_DASH_LOG_FORMAT

[data]
# Launch records CSV, read once at startup
path = "data/spacex_launch_dash.csv"

[api]
# Dashboard server host
host = "127.0.0.1"

# Dashboard server port
port = 8050

[layout]
# Page heading
title = "SpaceX Launch Records Dashboard"

# Payload slider bounds in kg. Defaults to the dataset's min/max.
# slider_min = 0
# slider_max = 10000

# Payload slider step in kg
slider_step = 1000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.data.path, "data/spacex_launch_dash.csv");
        assert_eq!(config.api.addr(), "127.0.0.1:8050");
        assert_eq!(config.layout.slider_min, None);
        assert_eq!(config.layout.slider_step, 1000.0);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.port, 8050);
        assert_eq!(config.layout.title, "SpaceX Launch Records Dashboard");
        assert_eq!(config.layout.slider_max, None);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[api]\nport = 9000\n\n[layout]\nslider_min = 0\nslider_max = 10000").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.layout.slider_min, Some(0.0));
        assert_eq!(config.layout.slider_max, Some(10_000.0));
        assert_eq!(config.data.path, "data/spacex_launch_dash.csv");
    }

    // Single test for all env handling, since env vars are process-wide
    #[test]
    fn test_env_and_cli_overrides() {
        std::env::set_var("LAUNCH_DASH_DATA_PATH", "/srv/launches.csv");
        std::env::set_var("LAUNCH_DASH_PORT", "9100");
        std::env::set_var("LAUNCH_DASH_LOG_FORMAT", "json");

        let config = Config::from_env();
        assert_eq!(config.data.path, "/srv/launches.csv");
        assert_eq!(config.api.port, 9100);
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.logging.format, "json");

        let mut config = config;
        config.apply_cli_overrides(Some(Path::new("local.csv")), None, Some(8080));
        assert_eq!(config.data.path, "local.csv");
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.api.host, "127.0.0.1");

        // Unparsable port keeps the default
        std::env::set_var("LAUNCH_DASH_PORT", "not-a-port");
        assert_eq!(Config::from_env().api.port, 8050);

        for var in [
            "LAUNCH_DASH_DATA_PATH",
            "LAUNCH_DASH_PORT",
            "LAUNCH_DASH_LOG_FORMAT",
        ] {
            std::env::remove_var(var);
        }
        assert_eq!(Config::from_env().data.path, "data/spacex_launch_dash.csv");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[api\nport = ").unwrap();
        assert!(matches!(Config::load(&broken), Err(ConfigError::Parse { .. })));
    }
}
