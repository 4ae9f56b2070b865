//! Mod registry errors

use std::path::PathBuf;
use thiserror::Error;

/// Mod registry errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Unknown mod: {0}")]
    UnknownMod(String),

    #[error("Mod directory unreadable {path:?}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
