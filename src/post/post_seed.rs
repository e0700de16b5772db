use std::path::Path;

use crate::post::post_model::PostSeed;
use crate::utils::error::CustomError;

const DEFAULT_SEED: &str = include_str!("../../seed/posts.json");

/// Load the feed seed from `path`, or the bundled seed when none is given
pub fn load_seed(path: Option<&Path>) -> Result<Vec<PostSeed>, CustomError> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|e| {
                CustomError::InternalServerError(format!(
                    "Failed to read seed file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            log::info!("Loading feed seed from {}", path.display());
            parse_seed(&raw)
        }
        None => {
            log::info!("Loading bundled feed seed");
            parse_seed(DEFAULT_SEED)
        }
    }
}

pub fn parse_seed(raw: &str) -> Result<Vec<PostSeed>, CustomError> {
    serde_json::from_str(raw)
        .map_err(|e| CustomError::BadRequestError(format!("Invalid feed seed: {}", e)))
}
