mod asset_cache_config;
mod config;
mod error;
mod generative_config;
mod identity_config;
mod log_level;
mod logging_config;
mod messaging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use asset_cache_config::AssetCacheConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use generative_config::GenerativeConfig;
pub use identity_config::IdentityConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use messaging_config::MessagingConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_GENERATIVE_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GENERATIVE_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_GENERATIVE_TIMEOUT_SECS: u64 = 30;

const DEFAULT_MESSAGING_BASE_URL: &str = "https://api.line.me";
const DEFAULT_MESSAGING_TIMEOUT_SECS: u64 = 10;

const DEFAULT_CACHE_VERSION: &str = "suzi-cache-v1";
