//! Registry configuration
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables: `VOID_MODS_DIR`, `VOID_MODS_DATA_DIR`,
//!    `VOID_MODS_REQUIRED` (comma separated keys)
//! 2. Config file: `mods.toml` or `config/mods.toml`
//! 3. Built-in defaults
//!
//! # Example Config File
//!
//! ```toml
//! data_dir = "/opt/game/data"
//! mod_dir = "mods"
//! default_catalog = "builtin.json"
//! required_assets = ["player_model", "enemy_model"]
//! ```

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::RegistryResult;

/// Config file locations searched by [`RegistryConfig::load`]
pub const CONFIG_PATHS: &[&str] = &["mods.toml", "config/mods.toml"];

/// Mod registry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Base data directory
    pub data_dir: PathBuf,
    /// Mod directory, relative to `data_dir` unless absolute
    pub mod_dir: PathBuf,
    /// Keys every mod is expected to resolve
    pub required_assets: Vec<String>,
    /// Catalog for the built-in content, relative to `data_dir` unless absolute
    pub default_catalog: Option<PathBuf>,
    /// Config file path (for reloading)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            mod_dir: PathBuf::from("mods"),
            required_assets: Vec::new(),
            default_catalog: None,
            config_path: None,
        }
    }
}

impl RegistryConfig {
    /// Load configuration from all sources
    pub fn load() -> Self {
        let mut config = Self::default();

        for path in CONFIG_PATHS {
            let path = Path::new(path);
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(path) {
                Ok(loaded) => {
                    config = loaded;
                    log::info!("Loaded mod config from {:?}", path);
                    break;
                }
                Err(e) => log::warn!("Ignoring mod config {:?}: {}", path, e),
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> RegistryResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> RegistryResult<Self> {
        let mut config: Self = toml::from_str(content)?;
        config.normalize();
        Ok(config)
    }

    /// Apply `VOID_MODS_*` overrides from a variable lookup
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = var("VOID_MODS_DATA_DIR").filter(|v| !v.is_empty()) {
            self.data_dir = PathBuf::from(dir);
            log::info!("Data dir from env: {:?}", self.data_dir);
        }

        if let Some(dir) = var("VOID_MODS_DIR").filter(|v| !v.is_empty()) {
            self.mod_dir = PathBuf::from(dir);
            log::info!("Mod dir from env: {:?}", self.mod_dir);
        }

        if let Some(keys) = var("VOID_MODS_REQUIRED") {
            self.required_assets = keys.split(',').map(|k| k.trim().to_string()).collect();
        }

        self.normalize();
    }

    /// Set the required asset keys
    pub fn with_required_assets<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_assets = keys.into_iter().map(Into::into).collect();
        self.normalize();
        self
    }

    /// Full path of the mod directory
    pub fn mod_path(&self) -> PathBuf {
        self.data_dir.join(&self.mod_dir)
    }

    /// Full path of the built-in content catalog, if configured
    pub fn default_catalog_path(&self) -> Option<PathBuf> {
        self.default_catalog.as_ref().map(|path| self.data_dir.join(path))
    }

    /// Drop empty and duplicate keys, keeping first-seen order
    pub(crate) fn normalize(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.required_assets
            .retain(|key| !key.is_empty() && seen.insert(key.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = RegistryConfig::default();
        assert_eq!(config.mod_path(), PathBuf::from("./mods"));
        assert!(config.required_assets.is_empty());
        assert!(config.default_catalog_path().is_none());
    }

    #[test]
    fn test_parse_toml() {
        let config = RegistryConfig::from_toml_str(
            r#"
            data_dir = "/opt/game"
            mod_dir = "content/mods"
            default_catalog = "builtin.json"
            required_assets = ["player_model", "", "enemy_model", "player_model"]
            "#,
        )
        .unwrap();

        assert_eq!(config.mod_path(), PathBuf::from("/opt/game/content/mods"));
        assert_eq!(config.default_catalog_path(), Some(PathBuf::from("/opt/game/builtin.json")));
        assert_eq!(config.required_assets, vec!["player_model", "enemy_model"]);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = RegistryConfig::from_toml_str(r#"required_assets = ["sword"]"#).unwrap();
        assert_eq!(config.mod_dir, PathBuf::from("mods"));
        assert_eq!(config.required_assets, vec!["sword"]);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(RegistryConfig::from_toml_str("required_assets = 3").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("VOID_MODS_DIR", "/srv/mods"),
            ("VOID_MODS_REQUIRED", "player_model, enemy_model ,,"),
        ]
        .into_iter()
        .collect();

        let mut config = RegistryConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        // Absolute mod dir replaces the data dir prefix
        assert_eq!(config.mod_path(), PathBuf::from("/srv/mods"));
        assert_eq!(config.required_assets, vec!["player_model", "enemy_model"]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("void_mods_config_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("mods.toml");
        std::fs::write(&path, "mod_dir = \"packs\"\n").unwrap();

        let config = RegistryConfig::load_from_file(&path).unwrap();
        assert_eq!(config.mod_dir, PathBuf::from("packs"));
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));

        std::fs::remove_dir_all(dir).ok();
    }
}
