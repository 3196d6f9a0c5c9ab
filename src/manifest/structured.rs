use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::core::WalkError;

/// The two recognized properties of a `deploy.json` manifest.
///
/// Any other property in the object is ignored, so newer manifests with
/// extra fields keep loading.
#[derive(Debug, Clone, Deserialize)]
pub struct StructuredManifest {
    /// Relative path to the expression manifest listing scripts and
    /// stylesheets.
    pub packagejs: String,
    /// Relative paths of asset files or directories, in declaration order.
    pub assets: Vec<String>,
}

impl StructuredManifest {
    /// Read and deserialize the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self, WalkError> {
        let content = fs::read_to_string(path).map_err(|err| WalkError::Parse {
            path: path.to_path_buf(),
            reason: format!("could not read file: {}", err),
        })?;

        serde_json::from_str(&content).map_err(|err| WalkError::Parse {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }
}
