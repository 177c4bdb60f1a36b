use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] relay_config::ConfigError),

    #[error("Core error: {0}")]
    Core(#[from] relay_core::CoreError),

    #[error("Failed to build HTTP client: {source}")]
    HttpClient {
        #[source]
        source: reqwest::Error,
    },

    #[error("Environment variable error: {message}")]
    EnvVar { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
