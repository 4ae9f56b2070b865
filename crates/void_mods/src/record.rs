//! Mod records - one per discoverable content set

use std::path::{Path, PathBuf};
use std::sync::Arc;

use void_catalog::{Resolution, ResourceLocator};

/// Name of the built-in content set
pub const DEFAULT_MOD_NAME: &str = "Default";

/// Catalog load outcome for a record
#[derive(Debug, Clone)]
pub enum CatalogState {
    /// Catalog loaded, keys resolve through the locator
    Ready(Arc<dyn ResourceLocator>),
    /// Catalog failed to load; every key is unresolved
    Failed(String),
}

/// A registered mod
#[derive(Debug, Clone)]
pub struct ModRecord {
    /// Display name (table key)
    pub name: String,
    /// Absolute path of the backing catalog, `None` for the default content
    pub source_path: Option<PathBuf>,
    /// Only the built-in content set has this set
    pub is_default: bool,
    /// Catalog load outcome
    pub catalog: CatalogState,
}

impl ModRecord {
    /// Create the built-in default record
    pub fn default_content(locator: Arc<dyn ResourceLocator>) -> Self {
        Self {
            name: DEFAULT_MOD_NAME.to_string(),
            source_path: None,
            is_default: true,
            catalog: CatalogState::Ready(locator),
        }
    }

    /// Create a record for a successfully loaded catalog file
    pub fn loaded(name: impl Into<String>, path: impl Into<PathBuf>, locator: Arc<dyn ResourceLocator>) -> Self {
        Self {
            name: name.into(),
            source_path: Some(path.into()),
            is_default: false,
            catalog: CatalogState::Ready(locator),
        }
    }

    /// Create a record for a catalog file that failed to load
    pub fn failed(name: impl Into<String>, path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_path: Some(path.into()),
            is_default: false,
            catalog: CatalogState::Failed(reason.into()),
        }
    }

    /// Source path, if file-backed
    pub fn path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// The locator, if the catalog loaded
    pub fn locator(&self) -> Option<&Arc<dyn ResourceLocator>> {
        match &self.catalog {
            CatalogState::Ready(locator) => Some(locator),
            CatalogState::Failed(_) => None,
        }
    }

    /// Check if the catalog loaded
    pub fn is_available(&self) -> bool {
        matches!(self.catalog, CatalogState::Ready(_))
    }

    /// Load error, if the catalog failed
    pub fn error(&self) -> Option<&str> {
        match &self.catalog {
            CatalogState::Failed(reason) => Some(reason),
            CatalogState::Ready(_) => None,
        }
    }

    /// Resolve a key against this record's catalog
    pub fn resolve(&self, key: &str) -> Resolution {
        match self.locator() {
            Some(locator) => locator.locate(key).into(),
            None => Resolution::Unresolved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use void_catalog::{CatalogLocator, ResourceLocation};

    fn locator() -> Arc<dyn ResourceLocator> {
        Arc::new(
            CatalogLocator::new("pack")
                .with_location(ResourceLocation::new("player_model", "models/p.glb", "mesh")),
        )
    }

    #[test]
    fn test_default_record() {
        let record = ModRecord::default_content(locator());
        assert_eq!(record.name, DEFAULT_MOD_NAME);
        assert!(record.is_default);
        assert!(record.path().is_none());
        assert!(record.is_available());
    }

    #[test]
    fn test_loaded_record_resolves() {
        let record = ModRecord::loaded("Pack", "/mods/pack.json", locator());
        assert!(!record.is_default);
        assert_eq!(record.path(), Some(Path::new("/mods/pack.json")));
        assert!(record.resolve("player_model").is_resolved());
        assert_eq!(record.resolve("missing"), Resolution::Unresolved);
    }

    #[test]
    fn test_failed_record_is_unresolved() {
        let record = ModRecord::failed("Broken", "/mods/broken.json", "Parse error");
        assert!(!record.is_available());
        assert!(record.locator().is_none());
        assert_eq!(record.error(), Some("Parse error"));
        assert_eq!(record.resolve("player_model"), Resolution::Unresolved);
    }
}
