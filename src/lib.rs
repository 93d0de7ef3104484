pub mod asset_id;
pub mod assets;
pub mod config;
pub mod loader;
pub mod registry;

pub use asset_id::{compute_id, AssetId};
pub use assets::{AssetHandle, AssetKind, AssetServer, SheetFrames};
pub use config::AssetConfig;
pub use loader::{AssetLoader, NullLoader};
pub use registry::{AssetRegistry, Registration};
