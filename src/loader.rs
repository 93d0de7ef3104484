use anyhow::Result;

use crate::asset_id::AssetId;
use crate::assets::SheetFrames;

/// Seam to the wrapped engine's loader. The facade calls this exactly once
/// per unique path; duplicates never reach it.
pub trait AssetLoader {
    fn load_image(&mut self, id: AssetId, path: &str) -> Result<()>;

    fn load_spritesheet(&mut self, id: AssetId, path: &str, frames: &SheetFrames) -> Result<()>;
}

/// Loader that accepts everything and loads nothing. Useful for hosts that
/// only want identity bookkeeping, and for tests.
#[derive(Default)]
pub struct NullLoader;

impl AssetLoader for NullLoader {
    fn load_image(&mut self, _id: AssetId, _path: &str) -> Result<()> {
        Ok(())
    }

    fn load_spritesheet(&mut self, _id: AssetId, _path: &str, _frames: &SheetFrames) -> Result<()> {
        Ok(())
    }
}
