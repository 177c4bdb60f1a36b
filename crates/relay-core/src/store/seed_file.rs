use crate::{CoreError, Result};

use std::collections::HashMap;
use std::path::Path;

use log::info;

/// Load the flat email -> platform user id mapping.
///
/// The file is maintained by hand outside this service and read once at
/// startup. A missing file is not an error; the store just runs without
/// a seed.
pub fn load_seed_file(path: &Path) -> Result<HashMap<String, String>> {
    if !path.exists() {
        info!("Seed file {} not found, starting without one", path.display());
        return Ok(HashMap::new());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| CoreError::SeedFileIo {
        path: path.to_path_buf(),
        source: e,
    })?;

    let seed: HashMap<String, String> =
        serde_json::from_str(&contents).map_err(|e| CoreError::SeedFileFormat {
            path: path.to_path_buf(),
            source: e,
        })?;

    info!("Loaded {} seed identity links from {}", seed.len(), path.display());
    Ok(seed)
}
