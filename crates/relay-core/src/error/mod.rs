use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to read seed file {path}: {source}")]
    SeedFileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Seed file {path} is not a flat JSON object of email -> user id: {source}")]
    SeedFileFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
