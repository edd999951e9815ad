use menucat_core::client::DEFAULT_TIMEOUT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Collection URL used when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080/api/entities";
/// Request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = DEFAULT_TIMEOUT.as_secs();

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Client configuration with source tracking
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// URL of the menu item collection
    pub server_url: ConfigValue<String>,
    /// File holding local UI preferences (theme)
    pub prefs_path: ConfigValue<PathBuf>,
    /// Per-request timeout in seconds
    pub timeout_secs: ConfigValue<u64>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    server_url: Option<String>,
    prefs_path: Option<PathBuf>,
    timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut server_url =
            ConfigValue::new(DEFAULT_SERVER_URL.to_string(), ConfigSource::Default);
        let mut prefs_path = ConfigValue::new(
            Self::default_data_dir().join("prefs.yaml"),
            ConfigSource::Default,
        );
        let mut timeout_secs = ConfigValue::new(DEFAULT_TIMEOUT_SECS, ConfigSource::Default);
        let mut config_file = None;

        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            config_file = Some(path.clone());

            if let Some(url) = file_config.server_url {
                server_url = ConfigValue::new(url, ConfigSource::File);
            }
            if let Some(prefs) = file_config.prefs_path {
                // Resolve relative paths against config file's directory
                let resolved = if prefs.is_relative() {
                    path.parent().map(|p| p.join(&prefs)).unwrap_or(prefs)
                } else {
                    prefs
                };
                prefs_path = ConfigValue::new(resolved, ConfigSource::File);
            }
            if let Some(secs) = file_config.timeout_secs {
                let secs = nonzero_timeout("timeout_secs", secs)?;
                timeout_secs = ConfigValue::new(secs, ConfigSource::File);
            }
        }

        if let Ok(url) = std::env::var("MENUCAT_SERVER_URL") {
            server_url = ConfigValue::new(url, ConfigSource::Environment);
        }
        if let Ok(prefs) = std::env::var("MENUCAT_PREFS_PATH") {
            prefs_path = ConfigValue::new(PathBuf::from(prefs), ConfigSource::Environment);
        }
        if let Ok(secs) = std::env::var("MENUCAT_TIMEOUT_SECS") {
            let parsed = secs
                .parse()
                .map_err(|_| ConfigError::InvalidValue("MENUCAT_TIMEOUT_SECS", secs))?;
            let secs = nonzero_timeout("MENUCAT_TIMEOUT_SECS", parsed)?;
            timeout_secs = ConfigValue::new(secs, ConfigSource::Environment);
        }

        Ok(Self {
            server_url,
            prefs_path,
            timeout_secs,
            config_file,
        })
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/menucat/
    /// - macOS: ~/Library/Application Support/menucat/
    /// - Windows: %APPDATA%/menucat/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("menucat")
    }

    /// Default data directory (platform-specific):
    /// - Linux: ~/.local/share/menucat/
    /// - macOS: ~/Library/Application Support/menucat/
    /// - Windows: %APPDATA%/menucat/
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("menucat")
    }

    /// Default config file path (platform-specific config dir + config.yaml)
    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

/// A zero timeout would fail every request before it is sent.
fn nonzero_timeout(name: &'static str, secs: u64) -> Result<u64, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::InvalidValue(name, secs.to_string()));
    }
    Ok(secs)
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
    InvalidValue(&'static str, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
            ConfigError::InvalidValue(name, value) => {
                write!(f, "Invalid value for {}: '{}'", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
