use crate::error::{Result, WowError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable whose presence turns on color in `auto` mode
pub const COLOR_ENV_VAR: &str = "CLICOLOR";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Character sheet endpoint
    #[serde(default)]
    pub armory: ArmoryConfig,

    /// Realm status feed endpoint
    #[serde(default)]
    pub status: StatusConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArmoryConfig {
    #[serde(default = "default_armory_host")]
    pub host: String,

    #[serde(default = "default_armory_path")]
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusConfig {
    #[serde(default = "default_status_host")]
    pub host: String,

    #[serde(default = "default_status_path")]
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Sent with every request; the armory serves HTML to unknown agents
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorChoice,
}

/// When to color human-readable output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color if `CLICOLOR` is set, whatever its value
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve to a yes/no answer given whether `CLICOLOR` is present.
    pub fn resolve(self, clicolor_present: bool) -> bool {
        match self {
            ColorChoice::Auto => clicolor_present,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }

    /// Resolve against the current process environment.
    pub fn resolve_from_env(self) -> bool {
        self.resolve(std::env::var_os(COLOR_ENV_VAR).is_some())
    }
}

// Default value functions
fn default_armory_host() -> String {
    "eu.wowarmory.com".to_string()
}

fn default_armory_path() -> String {
    "/character-sheet.xml".to_string()
}

fn default_status_host() -> String {
    "www.wow-europe.com".to_string()
}

fn default_status_path() -> String {
    "/en/serverstatus/index.xml".to_string()
}

fn default_user_agent() -> String {
    "Firefox/2.0.0.1".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ArmoryConfig {
    fn default() -> Self {
        Self {
            host: default_armory_host(),
            path: default_armory_path(),
        }
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            host: default_status_host(),
            path: default_status_path(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            WowError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            WowError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from XDG config directory (~/.config/wowtool/config.toml)
    /// Falls back to default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::xdg_config_path() {
            if config_path.exists() {
                return Self::from_file(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration with optional custom path
    /// If custom_path is provided, load from there
    /// Otherwise, fall back to XDG config path
    pub fn load_with_custom_path(custom_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = custom_path {
            return Self::from_file(path);
        }

        Self::load()
    }

    /// Get the XDG config path (~/.config/wowtool/config.toml)
    pub fn xdg_config_path() -> Option<PathBuf> {
        if let Ok(config_dir) = std::env::var("XDG_CONFIG_HOME") {
            Some(PathBuf::from(config_dir).join("wowtool").join("config.toml"))
        } else if let Ok(home) = std::env::var("HOME") {
            Some(
                PathBuf::from(home)
                    .join(".config")
                    .join("wowtool")
                    .join("config.toml"),
            )
        } else {
            None
        }
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        let endpoints = [
            ("armory", &self.armory.host, &self.armory.path),
            ("status", &self.status.host, &self.status.path),
        ];
        for (section, host, path) in endpoints {
            if host.trim().is_empty() {
                return Err(WowError::Config(format!("[{section}] host must not be empty")));
            }
            if !path.starts_with('/') {
                return Err(WowError::Config(format!(
                    "Invalid [{section}] path '{path}'. Must start with '/'"
                )));
            }
        }

        if self.http.user_agent.trim().is_empty() {
            return Err(WowError::Config(
                "Invalid user_agent: must not be empty".to_string(),
            ));
        }

        if self.http.timeout_secs == 0 {
            return Err(WowError::Config(
                "Invalid timeout_secs: must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}
