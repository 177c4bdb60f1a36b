use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Create a config error
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Config",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a server error
    #[track_caller]
    pub fn server<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Server",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an upstream (relay target) error
    #[track_caller]
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Upstream",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a logging error
    #[track_caller]
    pub fn logging<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Logging",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
