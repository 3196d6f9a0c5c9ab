use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Output format for the resolved dependency listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Main configuration for depwalk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Directory containing the top-level manifest
    pub path: PathBuf,
    /// Where to write the listing; stdout when unset
    pub output: Option<PathBuf>,
    /// Output format (Text or Json)
    pub output_format: OutputFormat,
    /// Enables verbose trace logging to stdout
    pub verbose: bool,
}

impl WalkConfig {
    /// Validates the configuration, ensuring the path exists.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.path.exists() {
            anyhow::bail!("Path does not exist: {:?}", self.path);
        }
        Ok(())
    }

    /// Attempts to load configuration from `depwalk.toml` in the current directory.
    pub fn load_from_file() -> Option<Self> {
        std::fs::read_to_string("depwalk.toml")
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            output: None,
            output_format: OutputFormat::Text,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = WalkConfig {
            path: PathBuf::from("non_existent_path_xyz_123"),
            ..WalkConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_file_content_loads() {
        let config: WalkConfig = toml::from_str("path = \"web/app\"\nverbose = true").unwrap();
        assert_eq!(config.path, PathBuf::from("web/app"));
        assert!(config.verbose);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(config.output.is_none());
    }
}
