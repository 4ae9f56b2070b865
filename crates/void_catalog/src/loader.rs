//! Catalog Loader - turns a catalog file into a resource locator
//!
//! Loaders are the seam to whatever asset system backs a mod. The registry
//! only ever sees the [`CatalogLoader`] trait and the locators it returns.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::locator::ResourceLocator;

/// Error during catalog loading
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid catalog {path:?}: {reason}")]
    Invalid { path: PathBuf, reason: String },

    #[error("Unsupported catalog format: {0:?}")]
    Unsupported(PathBuf),

    #[error("Catalog load aborted: {0}")]
    Aborted(String),
}

/// Result type for catalog loading
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Trait for catalog loaders
#[async_trait]
pub trait CatalogLoader: Send + Sync {
    /// File extensions this loader handles (without the leading dot)
    fn extensions(&self) -> &[&str];

    /// Load the catalog at `path`
    async fn load_catalog(&self, path: &Path) -> CatalogResult<Arc<dyn ResourceLocator>>;

    /// Check if a file looks like a catalog this loader can read
    fn accepts(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => self.extensions().iter().any(|known| known.eq_ignore_ascii_case(ext)),
            None => false,
        }
    }
}
