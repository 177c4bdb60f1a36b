use crate::{DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Enable colored output (ignored when logging to file)
    pub colored: bool,
    /// Log file name; None = stdout
    pub file: Option<String>,
    /// Directory for log files, relative to the config dir
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            colored: true,
            file: None,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
        }
    }
}
