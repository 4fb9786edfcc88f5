//! Configuration Management
//!
//! Loads verifier settings from TOML. Precedence, lowest to highest:
//! built-in defaults, config file, `DEPLOYCHECK_*` environment variables,
//! command-line flags (applied by `cli`).

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const CONFIG_FILE_NAME: &str = "deploycheck.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Timeout for page, API and login requests.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// The real-time endpoint aggregates more work server-side.
    #[serde(default = "default_realtime_timeout_secs")]
    pub realtime_timeout_secs: u64,
    /// Politeness delay after each page and API request.
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
    #[serde(default = "default_pass_threshold_percent")]
    pub pass_threshold_percent: u32,

    #[serde(default)]
    pub credentials: Credentials,

    #[serde(default)]
    pub ui: UiConfig,
}

/// Login used by the authentication check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_password")]
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Plain ASCII status tags instead of emoji
    #[serde(default)]
    pub ascii: bool,
    #[serde(default)]
    pub no_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            realtime_timeout_secs: default_realtime_timeout_secs(),
            pause_ms: default_pause_ms(),
            pass_threshold_percent: default_pass_threshold_percent(),
            credentials: Credentials::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            email: default_email(),
            password: default_password(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_realtime_timeout_secs() -> u64 {
    15
}
fn default_pause_ms() -> u64 {
    1000
}
fn default_pass_threshold_percent() -> u32 {
    80
}
fn default_email() -> String {
    "test@example.com".to_string()
}
fn default_password() -> String {
    "password123".to_string()
}

impl Config {
    /// Load from an explicit path, or from the first default location that
    /// exists, then apply environment overrides.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(Path::new(p))?,
            None => {
                let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
                if let Some(home) = dirs::home_dir() {
                    candidates.push(home.join(".config/deploycheck/config.toml"));
                }

                match candidates.iter().find(|p| p.is_file()) {
                    Some(p) => Self::from_file(p)?,
                    None => {
                        tracing::debug!("No config file found, using defaults");
                        Self::default()
                    }
                }
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Apply `DEPLOYCHECK_*` overrides. Unparseable numbers are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DEPLOYCHECK_BASE_URL") {
            self.base_url = url;
        }
        if let Some(timeout) = lookup("DEPLOYCHECK_TIMEOUT") {
            if let Ok(t) = timeout.parse::<u64>() {
                self.timeout_secs = t;
            }
        }
        if let Some(pause) = lookup("DEPLOYCHECK_PAUSE_MS") {
            if let Ok(p) = pause.parse::<u64>() {
                self.pause_ms = p;
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::InvalidUrl {
                url: self.base_url.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        if self.pass_threshold_percent > 100 {
            return Err(ConfigError::InvalidThreshold(self.pass_threshold_percent));
        }
        Ok(())
    }
}
