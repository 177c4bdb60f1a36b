use crate::{ConfigError, ConfigErrorResult, DEFAULT_CACHE_VERSION};

use serde::Deserialize;

/// Settings for the front-end service-worker cache
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetCacheConfig {
    /// Cache name; bumping it invalidates previously cached assets
    pub version: String,
    /// Asset paths precached at worker install time
    pub assets: Vec<String>,
    /// URL substrings that must never be cached (API and cloud endpoints)
    pub bypass_markers: Vec<String>,
}

impl Default for AssetCacheConfig {
    fn default() -> Self {
        Self {
            version: String::from(DEFAULT_CACHE_VERSION),
            assets: vec![
                String::from("/"),
                String::from("/index.html"),
                String::from("/sw.js"),
                String::from("/suzi-profile.png"),
            ],
            bypass_markers: vec![
                String::from("/api/"),
                String::from("firebase"),
                String::from("googleapis"),
                String::from("onrender.com"),
            ],
        }
    }
}

impl AssetCacheConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.version.is_empty() {
            return Err(ConfigError::config("asset_cache.version must not be empty"));
        }

        for asset in &self.assets {
            if !asset.starts_with('/') {
                return Err(ConfigError::config(format!(
                    "asset_cache.assets entries must start with '/', got {:?}",
                    asset
                )));
            }
        }

        Ok(())
    }
}
