use std::collections::HashMap;

use anyhow::{bail, Result};

use crate::asset_id::{compute_id, AssetId};
use crate::assets::AssetKind;

/// Insertion-ordered set of issued asset ids.
///
/// The registry only tracks identity; the actual fetch and decode belong to
/// the engine loader behind the facade. Entries are never removed.
#[derive(Default)]
pub struct AssetRegistry {
    seed: u32,
    entries: HashMap<AssetId, RegisteredAsset>,
    order: Vec<AssetId>,
}

struct RegisteredAsset {
    path: String,
    kind: AssetKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    pub id: AssetId,
    /// False when the path (or a colliding one) was registered before; the
    /// caller must skip re-issuing the underlying load request.
    pub is_new: bool,
    /// The kind the id is registered under. On a duplicate this is the
    /// original registration's kind, which wins over the requested one.
    pub kind: AssetKind,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    pub fn with_seed(seed: u32) -> Self {
        Self { seed, entries: HashMap::new(), order: Vec::new() }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn register(&mut self, path: &str, kind: AssetKind) -> Result<Registration> {
        if path.is_empty() {
            bail!("Asset path must not be empty");
        }
        let id = compute_id(path, self.seed);
        if let Some(existing) = self.entries.get(&id) {
            if existing.path != path {
                log::warn!(
                    "id {id} collision: '{path}' hashes to the same id as '{}', reusing the existing registration",
                    existing.path
                );
            } else if existing.kind != kind {
                log::warn!(
                    "duplicate load of '{path}' as {} (already registered as {}), skipping",
                    kind.label(),
                    existing.kind.label()
                );
            } else {
                log::warn!("duplicate load of '{path}' (id {id}), skipping");
            }
            return Ok(Registration { id, is_new: false, kind: existing.kind });
        }
        self.entries.insert(id, RegisteredAsset { path: path.to_string(), kind });
        self.order.push(id);
        log::debug!("registered '{path}' as {} (id {id})", kind.label());
        Ok(Registration { id, is_new: true, kind })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: AssetId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn path_of(&self, id: AssetId) -> Option<&str> {
        self.entries.get(&id).map(|entry| entry.path.as_str())
    }

    pub fn kind_of(&self, id: AssetId) -> Option<AssetKind> {
        self.entries.get(&id).map(|entry| entry.kind)
    }

    /// Issued ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = AssetId> + '_ {
        self.order.iter().copied()
    }
}
