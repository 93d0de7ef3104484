use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AssetConfig {
    /// Seed mixed into every asset id, so two hosts sharing a process can
    /// namespace their registrations.
    #[serde(default = "AssetConfig::default_id_seed")]
    pub id_seed: u32,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self { id_seed: Self::default_id_seed() }
    }
}

impl AssetConfig {
    const fn default_id_seed() -> u32 {
        0
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let cfg = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(cfg)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                log::warn!("config load error: {err:?}, falling back to defaults");
                Self::default()
            }
        }
    }
}
