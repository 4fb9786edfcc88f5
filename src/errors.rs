use std::path::PathBuf;
use thiserror::Error;

/// The central error type for deploycheck.
///
/// Per-check failures (`CheckError`) never reach this type during a run: the
/// verifier renders them into FAIL lines. Only configuration and scaffold
/// errors escape to the binaries.
#[derive(Error, Debug)]
pub enum DeploycheckError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scaffold error: {0}")]
    Scaffold(#[from] ScaffoldError),
}

/// Why a single probe against the target failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Transport(String),

    #[error("invalid JSON body: {0}")]
    Payload(String),
}

impl CheckError {
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CheckError {
    fn from(err: serde_json::Error) -> Self {
        Self::Payload(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("pass threshold must be between 0 and 100 percent, got {0}")]
    InvalidThreshold(u32),
}

pub type Result<T> = std::result::Result<T, DeploycheckError>;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 2;

/// Determine the appropriate process exit code for an error.
pub fn get_exit_code(e: &anyhow::Error) -> u8 {
    if let Some(err) = e.downcast_ref::<DeploycheckError>() {
        return match err {
            DeploycheckError::Config(_) => EXIT_CONFIG_ERROR,
            DeploycheckError::Scaffold(_) => EXIT_FAILURE,
        };
    }

    if e.downcast_ref::<ConfigError>().is_some() {
        return EXIT_CONFIG_ERROR;
    }

    EXIT_FAILURE
}
