use crate::{
    AssetCacheConfig, ConfigError, ConfigErrorResult, GenerativeConfig, IdentityConfig,
    LoggingConfig, MessagingConfig, ServerConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub generative: GenerativeConfig,
    pub messaging: MessagingConfig,
    pub identity: IdentityConfig,
    pub asset_cache: AssetCacheConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for RELAY_CONFIG_DIR env var, else use ./.relay/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply RELAY_* environment variable overrides
    /// 5. Apply legacy env var fallbacks (PORT, GEMINI_API_KEY,
    ///    LINE_CHANNEL_ACCESS_TOKEN) kept for deployment compatibility
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.apply_legacy_env_fallbacks();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: RELAY_CONFIG_DIR env var > ./.relay/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("RELAY_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".relay"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.generative.validate()?;
        self.messaging.validate()?;
        self.asset_cache.validate()?;

        Ok(())
    }

    /// Get absolute path to the identity seed file, if configured.
    /// Relative paths resolve against the config dir.
    pub fn seed_file_path(&self) -> Result<Option<PathBuf>, ConfigError> {
        let Some(ref file) = self.identity.seed_file else {
            return Ok(None);
        };

        let path = PathBuf::from(file);
        if path.is_absolute() {
            return Ok(Some(path));
        }

        let config_dir = Self::config_dir()?;
        Ok(Some(config_dir.join(path)))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);

        info!(
            "  static: {}",
            self.server.static_dir.as_deref().unwrap_or("disabled")
        );

        info!(
            "  generative: {} model={} key={} timeout={}s",
            self.generative.base_url,
            self.generative.model,
            if self.generative.api_key.is_some() {
                "set"
            } else {
                "MISSING"
            },
            self.generative.timeout_secs
        );

        info!(
            "  messaging: {} token={} timeout={}s",
            self.messaging.base_url,
            if self.messaging.channel_token.is_some() {
                "set"
            } else {
                "MISSING"
            },
            self.messaging.timeout_secs
        );

        info!(
            "  identity: seed_file={}",
            self.identity.seed_file.as_deref().unwrap_or("none")
        );

        info!(
            "  asset_cache: {} ({} assets, {} bypass markers)",
            self.asset_cache.version,
            self.asset_cache.assets.len(),
            self.asset_cache.bypass_markers.len()
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("RELAY_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("RELAY_SERVER_PORT", &mut self.server.port);
        Self::apply_env_option_string("RELAY_STATIC_DIR", &mut self.server.static_dir);

        // Logging
        Self::apply_env_parse("RELAY_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("RELAY_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("RELAY_LOG_FILE", &mut self.logging.file);

        // Generative upstream
        Self::apply_env_string("RELAY_GENERATIVE_BASE_URL", &mut self.generative.base_url);
        Self::apply_env_string("RELAY_GENERATIVE_MODEL", &mut self.generative.model);
        Self::apply_env_option_string("RELAY_GENERATIVE_API_KEY", &mut self.generative.api_key);
        Self::apply_env_parse(
            "RELAY_GENERATIVE_TIMEOUT_SECS",
            &mut self.generative.timeout_secs,
        );

        // Messaging upstream
        Self::apply_env_string("RELAY_MESSAGING_BASE_URL", &mut self.messaging.base_url);
        Self::apply_env_option_string(
            "RELAY_MESSAGING_CHANNEL_TOKEN",
            &mut self.messaging.channel_token,
        );
        Self::apply_env_parse(
            "RELAY_MESSAGING_TIMEOUT_SECS",
            &mut self.messaging.timeout_secs,
        );

        // Identity
        Self::apply_env_option_string("RELAY_IDENTITY_SEED_FILE", &mut self.identity.seed_file);

        // Asset cache
        Self::apply_env_string("RELAY_CACHE_VERSION", &mut self.asset_cache.version);
    }

    /// Legacy env vars kept for older deployments, honored only when the
    /// RELAY_* equivalent did not already set a value.
    fn apply_legacy_env_fallbacks(&mut self) {
        if std::env::var("RELAY_SERVER_PORT").is_err() {
            Self::apply_env_parse("PORT", &mut self.server.port);
        }

        if self.generative.api_key.is_none() {
            Self::apply_env_option_string("GEMINI_API_KEY", &mut self.generative.api_key);
        }

        if self.messaging.channel_token.is_none() {
            Self::apply_env_option_string(
                "LINE_CHANNEL_ACCESS_TOKEN",
                &mut self.messaging.channel_token,
            );
        }
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
