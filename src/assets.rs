use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;

use crate::asset_id::AssetId;
use crate::config::AssetConfig;
use crate::loader::AssetLoader;
use crate::registry::{AssetRegistry, Registration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    Sprite,
}

impl AssetKind {
    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Image => "image",
            AssetKind::Sprite => "sprite",
        }
    }
}

/// Opaque token callers pass back into later engine operations. Internals are
/// not meant to be inspected beyond `id` and `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetHandle {
    Image(AssetId),
    Sprite(AssetId),
}

impl AssetHandle {
    fn new(kind: AssetKind, id: AssetId) -> Self {
        match kind {
            AssetKind::Image => AssetHandle::Image(id),
            AssetKind::Sprite => AssetHandle::Sprite(id),
        }
    }

    pub fn id(self) -> AssetId {
        match self {
            AssetHandle::Image(id) | AssetHandle::Sprite(id) => id,
        }
    }

    pub fn kind(self) -> AssetKind {
        match self {
            AssetHandle::Image(_) => AssetKind::Image,
            AssetHandle::Sprite(_) => AssetKind::Sprite,
        }
    }
}

/// Frame metadata forwarded to the engine loader for spritesheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SheetFrames {
    pub frame_width: u32,
    pub frame_height: u32,
    #[serde(default)]
    pub frame_count: Option<u32>,
    #[serde(default)]
    pub margin: u32,
    #[serde(default)]
    pub spacing: u32,
}

impl SheetFrames {
    pub fn grid(frame_width: u32, frame_height: u32) -> Self {
        Self { frame_width, frame_height, frame_count: None, margin: 0, spacing: 0 }
    }

    fn validate(&self, path: &str) -> Result<()> {
        if self.frame_width == 0 || self.frame_height == 0 {
            bail!(
                "Spritesheet '{path}' has zero frame dimensions ({}x{})",
                self.frame_width,
                self.frame_height
            );
        }
        if self.frame_count == Some(0) {
            bail!("Spritesheet '{path}' declares a frame count of zero");
        }
        Ok(())
    }
}

/// Entry points the host scene code calls instead of the engine loader.
///
/// Every load is routed through the identity registry first; only a fresh
/// registration reaches the loader seam, duplicates come back as the original
/// handle with a warning.
pub struct AssetServer {
    registry: AssetRegistry,
    loader: Box<dyn AssetLoader>,
}

impl AssetServer {
    pub fn new(loader: Box<dyn AssetLoader>) -> Self {
        Self::with_registry(AssetRegistry::new(), loader)
    }

    pub fn with_registry(registry: AssetRegistry, loader: Box<dyn AssetLoader>) -> Self {
        Self { registry, loader }
    }

    pub fn from_config(config: &AssetConfig, loader: Box<dyn AssetLoader>) -> Self {
        Self::with_registry(AssetRegistry::with_seed(config.id_seed), loader)
    }

    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    pub fn load_image(&mut self, path: &str) -> Result<AssetHandle> {
        let Registration { id, is_new, kind } = self.registry.register(path, AssetKind::Image)?;
        if is_new {
            self.loader
                .load_image(id, path)
                .with_context(|| format!("Failed to load image '{path}'"))?;
        }
        Ok(AssetHandle::new(kind, id))
    }

    pub fn load_spritesheet(&mut self, path: &str, frames: SheetFrames) -> Result<AssetHandle> {
        frames.validate(path)?;
        let Registration { id, is_new, kind } = self.registry.register(path, AssetKind::Sprite)?;
        if is_new {
            self.loader
                .load_spritesheet(id, path, &frames)
                .with_context(|| format!("Failed to load spritesheet '{path}'"))?;
        }
        Ok(AssetHandle::new(kind, id))
    }

    /// Loads every asset listed in a JSON manifest, in file order, through the
    /// same registry as the typed entry points.
    pub fn load_manifest(&mut self, manifest_path: impl AsRef<Path>) -> Result<Vec<AssetHandle>> {
        let manifest_path = manifest_path.as_ref();
        let bytes = fs::read(manifest_path)
            .with_context(|| format!("Failed to read asset manifest {}", manifest_path.display()))?;
        let manifest: ManifestFile = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse asset manifest {}", manifest_path.display()))?;
        let mut handles = Vec::with_capacity(manifest.assets.len());
        for entry in manifest.assets {
            let handle = match entry.kind {
                AssetKind::Image => {
                    if entry.frames.is_some() {
                        log::warn!(
                            "manifest entry '{}' is an image, ignoring its frame metadata",
                            entry.path
                        );
                    }
                    self.load_image(&entry.path)?
                }
                AssetKind::Sprite => {
                    let frames = entry.frames.ok_or_else(|| {
                        anyhow!("Manifest entry '{}' is a sprite but carries no frame metadata", entry.path)
                    })?;
                    self.load_spritesheet(&entry.path, frames)?
                }
            };
            handles.push(handle);
        }
        Ok(handles)
    }
}

#[derive(Deserialize)]
struct ManifestFile {
    #[serde(default)]
    assets: Vec<ManifestEntryFile>,
}

#[derive(Deserialize)]
struct ManifestEntryFile {
    path: String,
    kind: AssetKind,
    #[serde(default)]
    frames: Option<SheetFrames>,
}
