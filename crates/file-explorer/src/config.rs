//! Explorer configuration loaded from JSON

use crate::preview::DEFAULT_IMAGE_EXTENSIONS;
use crate::tree::SeedNode;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for an [`Explorer`](crate::Explorer)
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplorerConfig {
    /// Extensions (without the dot) previewed as images
    pub image_extensions: Vec<String>,
    /// Initial tree
    pub seed: SeedNode,
    /// Default `env_logger` filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            image_extensions: DEFAULT_IMAGE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            seed: SeedNode::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl ExplorerConfig {
    /// Parse a configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse explorer configuration")
    }

    /// Load a configuration file, falling back to defaults if it doesn't exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!("Loaded config from {:?}: {:?}", path, config);
        Ok(config)
    }

    /// Replace the seed with one read from a standalone JSON file
    pub fn with_seed_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        self.seed = serde_json::from_str(&text)
            .with_context(|| format!("Invalid seed file {}", path.display()))?;
        info!("Using seed from {:?}", path);
        Ok(self)
    }
}
