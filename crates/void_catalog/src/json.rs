//! JSON content catalogs
//!
//! A catalog lists the resources a pack provides:
//!
//! ```json
//! {
//!   "locator_id": "rare_sword_pack",
//!   "entries": [
//!     {
//!       "keys": ["player_model"],
//!       "internal_id": "models/knight.glb",
//!       "provider": "mesh",
//!       "dependencies": ["textures/knight.png"]
//!     }
//!   ]
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Serialize, Deserialize};

use crate::loader::{CatalogError, CatalogLoader, CatalogResult};
use crate::location::ResourceLocation;
use crate::locator::{CatalogLocator, ResourceLocator};

/// Provider used when an entry does not name one
pub const DEFAULT_PROVIDER: &str = "asset";

/// On-disk catalog document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Catalog identifier (defaults to the file stem)
    #[serde(default)]
    pub locator_id: Option<String>,
    /// Resource entries
    #[serde(default)]
    pub entries: Vec<CatalogEntry>,
}

/// One resource in a catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Keys this resource can be requested by
    pub keys: Vec<String>,
    /// Provider-specific identifier
    pub internal_id: String,
    /// Provider name
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Internal ids of dependencies
    #[serde(default)]
    pub dependencies: Vec<String>,
}

fn default_provider() -> String {
    DEFAULT_PROVIDER.to_string()
}

impl CatalogDocument {
    /// Parse a catalog from JSON bytes
    pub fn from_slice(path: &Path, data: &[u8]) -> CatalogResult<Self> {
        serde_json::from_slice(data).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate entries and build a locator.
    ///
    /// Later entries win when two entries share a key.
    pub fn into_locator(self, path: &Path) -> CatalogResult<CatalogLocator> {
        let id = match self.locator_id {
            Some(id) if !id.trim().is_empty() => id,
            _ => path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string(),
        };

        let mut locator = CatalogLocator::new(id);

        for (index, entry) in self.entries.into_iter().enumerate() {
            if entry.internal_id.trim().is_empty() {
                return Err(CatalogError::Invalid {
                    path: path.to_path_buf(),
                    reason: format!("entry {} has an empty internal_id", index),
                });
            }

            let keys: Vec<_> = entry.keys.iter().filter(|k| !k.is_empty()).collect();
            if keys.is_empty() {
                return Err(CatalogError::Invalid {
                    path: path.to_path_buf(),
                    reason: format!("entry {} has no keys", index),
                });
            }

            for key in keys {
                let replaced = locator.insert(ResourceLocation {
                    key: key.clone(),
                    internal_id: entry.internal_id.clone(),
                    provider: entry.provider.clone(),
                    dependencies: entry.dependencies.clone(),
                });
                if replaced.is_some() {
                    log::debug!("Catalog {:?}: key '{}' redefined by entry {}", path, key, index);
                }
            }
        }

        Ok(locator)
    }
}

/// Loads JSON catalogs from the filesystem
#[derive(Debug, Clone, Default)]
pub struct JsonCatalogLoader;

impl JsonCatalogLoader {
    /// Create a new JSON catalog loader
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CatalogLoader for JsonCatalogLoader {
    fn extensions(&self) -> &[&str] {
        &["json"]
    }

    async fn load_catalog(&self, path: &Path) -> CatalogResult<Arc<dyn ResourceLocator>> {
        if !self.accepts(path) {
            return Err(CatalogError::Unsupported(path.to_path_buf()));
        }

        let data = tokio::fs::read(path).await.map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let locator = CatalogDocument::from_slice(path, &data)?.into_locator(path)?;
        log::debug!("Loaded catalog {:?} with {} keys", path, locator.len());

        Ok(Arc::new(locator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn temp_dir() -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!("void_catalog_test_{}_{}", std::process::id(), id));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_parse_catalog() {
        let json = br#"{
            "locator_id": "knights",
            "entries": [
                { "keys": ["player_model", "hero"], "internal_id": "models/knight.glb", "provider": "mesh" },
                { "keys": ["music"], "internal_id": "audio/theme.ogg" }
            ]
        }"#;

        let path = Path::new("knights.json");
        let locator = CatalogDocument::from_slice(path, json)
            .unwrap()
            .into_locator(path)
            .unwrap();

        assert_eq!(locator.locator_id(), "knights");
        assert_eq!(locator.len(), 3);
        assert_eq!(locator.locate("hero").unwrap().internal_id, "models/knight.glb");
        assert_eq!(locator.locate("music").unwrap().provider, DEFAULT_PROVIDER);
    }

    #[test]
    fn test_locator_id_defaults_to_stem() {
        let path = Path::new("mods/rare_sword_pack.json");
        let locator = CatalogDocument::from_slice(path, br#"{ "entries": [] }"#)
            .unwrap()
            .into_locator(path)
            .unwrap();

        assert_eq!(locator.locator_id(), "rare_sword_pack");
        assert!(locator.is_empty());
    }

    #[test]
    fn test_later_entry_wins() {
        let json = br#"{ "entries": [
            { "keys": ["sword"], "internal_id": "old.glb" },
            { "keys": ["sword"], "internal_id": "new.glb" }
        ] }"#;
        let path = Path::new("pack.json");
        let locator = CatalogDocument::from_slice(path, json).unwrap().into_locator(path).unwrap();
        assert_eq!(locator.locate("sword").unwrap().internal_id, "new.glb");
    }

    #[test]
    fn test_invalid_entries() {
        let path = Path::new("pack.json");

        let empty_id = br#"{ "entries": [ { "keys": ["a"], "internal_id": "" } ] }"#;
        let result = CatalogDocument::from_slice(path, empty_id).unwrap().into_locator(path);
        assert!(matches!(result, Err(CatalogError::Invalid { .. })));

        let no_keys = br#"{ "entries": [ { "keys": [], "internal_id": "a.glb" } ] }"#;
        let result = CatalogDocument::from_slice(path, no_keys).unwrap().into_locator(path);
        assert!(matches!(result, Err(CatalogError::Invalid { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let result = CatalogDocument::from_slice(Path::new("broken.json"), b"{ not json");
        assert!(matches!(result, Err(CatalogError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_load_from_disk() {
        let root = temp_dir();
        let path = root.join("pack.json");
        std::fs::write(
            &path,
            br#"{ "entries": [ { "keys": ["player_model"], "internal_id": "models/p.glb" } ] }"#,
        )
        .unwrap();

        let locator = JsonCatalogLoader::new().load_catalog(&path).await.unwrap();
        assert_eq!(locator.locator_id(), "pack");
        assert!(locator.contains("player_model"));

        std::fs::remove_dir_all(root).ok();
    }

    #[tokio::test]
    async fn test_rejects_other_extensions() {
        let result = JsonCatalogLoader::new().load_catalog(Path::new("pack.toml")).await;
        assert!(matches!(result, Err(CatalogError::Unsupported(_))));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let root = temp_dir();
        let result = JsonCatalogLoader::new().load_catalog(&root.join("absent.json")).await;
        assert!(matches!(result, Err(CatalogError::Io { .. })));

        std::fs::remove_dir_all(root).ok();
    }
}
