//! Resource locations and resolution results

use std::fmt;
use serde::{Serialize, Deserialize};

/// Where a resolved asset lives and how to load it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLocation {
    /// Key the location was resolved from
    pub key: String,
    /// Provider-specific identifier (usually a path inside the pack)
    pub internal_id: String,
    /// Name of the provider that knows how to load this resource
    pub provider: String,
    /// Internal ids this resource depends on
    pub dependencies: Vec<String>,
}

impl ResourceLocation {
    /// Create a location with no dependencies
    pub fn new(
        key: impl Into<String>,
        internal_id: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            internal_id: internal_id.into(),
            provider: provider.into(),
            dependencies: Vec::new(),
        }
    }

    /// Add a dependency
    pub fn with_dependency(mut self, internal_id: impl Into<String>) -> Self {
        self.dependencies.push(internal_id.into());
        self
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.key, self.internal_id, self.provider)
    }
}

/// Outcome of resolving a key against a mod.
///
/// `Unresolved` is a normal result: mods are allowed to cover only part of
/// the required keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The key maps to a concrete location
    Resolved(ResourceLocation),
    /// The key is not available
    Unresolved,
}

impl Resolution {
    /// Check if the key resolved
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Get the location, if resolved
    pub fn location(&self) -> Option<&ResourceLocation> {
        match self {
            Self::Resolved(location) => Some(location),
            Self::Unresolved => None,
        }
    }
}

impl From<Option<ResourceLocation>> for Resolution {
    fn from(location: Option<ResourceLocation>) -> Self {
        match location {
            Some(location) => Self::Resolved(location),
            None => Self::Unresolved,
        }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::Unresolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_from_option() {
        let location = ResourceLocation::new("player_model", "models/player.glb", "mesh");
        let resolved: Resolution = Some(location.clone()).into();
        assert!(resolved.is_resolved());
        assert_eq!(resolved.location(), Some(&location));

        let unresolved: Resolution = None.into();
        assert_eq!(unresolved, Resolution::Unresolved);
        assert!(unresolved.location().is_none());
    }

    #[test]
    fn test_location_display() {
        let location = ResourceLocation::new("sword", "items/sword.glb", "mesh")
            .with_dependency("textures/sword.png");
        assert_eq!(location.to_string(), "sword -> items/sword.glb (mesh)");
        assert_eq!(location.dependencies, vec!["textures/sword.png".to_string()]);
    }
}
