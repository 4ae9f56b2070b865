//! Resource locators - key to location lookup for a loaded catalog

use std::collections::BTreeMap;
use std::fmt;

use crate::location::ResourceLocation;

/// Resolves asset keys to resource locations.
///
/// A locator is produced by a [`CatalogLoader`](crate::CatalogLoader) and is
/// treated as opaque by everything that consumes it.
pub trait ResourceLocator: Send + Sync + fmt::Debug {
    /// Identifier of the catalog this locator was built from
    fn locator_id(&self) -> &str;

    /// Find the location for a key
    fn locate(&self, key: &str) -> Option<ResourceLocation>;

    /// All keys this locator can resolve
    fn keys(&self) -> Vec<String>;

    /// Check if a key can be resolved
    fn contains(&self, key: &str) -> bool {
        self.locate(key).is_some()
    }
}

/// In-memory locator backed by a sorted key map
#[derive(Debug, Clone, Default)]
pub struct CatalogLocator {
    id: String,
    locations: BTreeMap<String, ResourceLocation>,
}

impl CatalogLocator {
    /// Create an empty locator
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            locations: BTreeMap::new(),
        }
    }

    /// Add a location under its own key
    pub fn with_location(mut self, location: ResourceLocation) -> Self {
        self.insert(location);
        self
    }

    /// Insert a location, replacing any previous one with the same key
    pub fn insert(&mut self, location: ResourceLocation) -> Option<ResourceLocation> {
        self.locations.insert(location.key.clone(), location)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl ResourceLocator for CatalogLocator {
    fn locator_id(&self) -> &str {
        &self.id
    }

    fn locate(&self, key: &str) -> Option<ResourceLocation> {
        self.locations.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        self.locations.keys().cloned().collect()
    }
}
