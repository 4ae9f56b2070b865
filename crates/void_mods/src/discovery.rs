//! Catalog discovery
//!
//! Scans a directory for catalog files and loads each one as its own task.
//! Loads complete in any order; every completion appends its record and
//! rebuilds the name table in one critical section.

use std::path::{Path, PathBuf};

use tokio::task::JoinSet;
use void_catalog::CatalogError;

use crate::error::{RegistryError, RegistryResult};
use crate::naming;
use crate::record::ModRecord;
use crate::registry::{ModRegistry, RegistryPhase};

/// A catalog file found by a directory scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogCandidate {
    /// Derived display name
    pub name: String,
    /// Absolute path of the catalog
    pub path: PathBuf,
}

/// Outcome of a discovery run
#[derive(Debug, Clone, Default)]
pub struct DiscoveryReport {
    /// Scanned directory
    pub directory: PathBuf,
    /// Mods whose catalogs loaded, in completion order
    pub loaded: Vec<String>,
    /// Mods whose catalogs failed, with the error message
    pub failed: Vec<(String, String)>,
}

impl DiscoveryReport {
    /// Number of records registered by this run
    pub fn total(&self) -> usize {
        self.loaded.len() + self.failed.len()
    }

    /// Check if every catalog loaded
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

impl ModRegistry {
    /// List catalog files in `dir` that the loader accepts, sorted by path.
    ///
    /// Subdirectories and unrecognised files are skipped.
    pub async fn scan(&self, dir: impl AsRef<Path>) -> RegistryResult<Vec<CatalogCandidate>> {
        let dir = dir.as_ref();
        let unreadable = |source| RegistryError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source,
        };

        let root = tokio::fs::canonicalize(dir).await.map_err(unreadable)?;
        let mut entries = tokio::fs::read_dir(&root).await.map_err(unreadable)?;
        let mut found = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(unreadable)? {
            let path = entry.path();

            match tokio::fs::metadata(&path).await {
                Ok(meta) if meta.is_file() => {}
                Ok(_) => continue,
                Err(e) => {
                    log::warn!("Skipping {:?}: {}", path, e);
                    continue;
                }
            }

            if !self.inner.loader.accepts(&path) {
                continue;
            }

            let Some(name) = naming::display_name_for_path(&path) else {
                log::warn!("Skipping {:?}: file name is not valid UTF-8", path);
                continue;
            };

            found.push(CatalogCandidate { name, path });
        }

        found.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(found)
    }

    /// Discover and load every catalog in `dir`.
    ///
    /// Each catalog loads on its own task. A failed load still registers a
    /// record (with every key unresolved) and never stops its siblings. Only
    /// an unreadable directory is an error.
    pub async fn discover(&self, dir: impl AsRef<Path>) -> RegistryResult<DiscoveryReport> {
        let dir = dir.as_ref();
        let candidates = self.scan(dir).await?;

        self.begin_discovery();
        log::info!("Discovering {} catalog(s) in {:?}", candidates.len(), dir);

        let mut tasks = JoinSet::new();
        for candidate in candidates {
            let loader = self.inner.loader.clone();
            tasks.spawn(async move {
                let path = candidate.path.clone();
                // Inner task so a panicking loader still yields a named failure
                let result = match tokio::spawn(async move { loader.load_catalog(&path).await }).await {
                    Ok(result) => result,
                    Err(e) => Err(CatalogError::Aborted(e.to_string())),
                };
                (candidate, result)
            });
        }

        let mut report = DiscoveryReport {
            directory: dir.to_path_buf(),
            ..Default::default()
        };

        while let Some(joined) = tasks.join_next().await {
            let (candidate, result) = match joined {
                Ok(done) => done,
                Err(e) => {
                    log::error!("Catalog task failed: {}", e);
                    continue;
                }
            };

            match result {
                Ok(locator) => {
                    log::info!("Loaded mod '{}' from {:?}", candidate.name, candidate.path);
                    self.insert_record(ModRecord::loaded(candidate.name.clone(), candidate.path, locator));
                    report.loaded.push(candidate.name);
                }
                Err(e) => {
                    log::warn!("Failed to load mod '{}' from {:?}: {}", candidate.name, candidate.path, e);
                    let message = e.to_string();
                    self.insert_record(ModRecord::failed(candidate.name.clone(), candidate.path, message.clone()));
                    report.failed.push((candidate.name, message));
                }
            }
        }

        self.end_discovery();
        log::info!(
            "Discovery finished: {} loaded, {} failed",
            report.loaded.len(),
            report.failed.len()
        );

        Ok(report)
    }

    fn begin_discovery(&self) {
        let mut state = self.inner.state.lock();
        state.discoveries += 1;
        state.phase = RegistryPhase::Discovering;
    }

    fn end_discovery(&self) {
        let mut state = self.inner.state.lock();
        state.discoveries = state.discoveries.saturating_sub(1);
        if state.discoveries == 0 {
            state.phase = RegistryPhase::Ready;
        }
    }
}
