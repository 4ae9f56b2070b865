//! Registry events and listener handles

use std::path::PathBuf;
use std::sync::Arc;

/// Event from the mod registry
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryEvent {
    /// Built-in content was registered (or replaced)
    DefaultRegistered,
    /// A catalog finished loading
    ModLoaded { name: String, path: PathBuf },
    /// A catalog failed to load
    ModFailed { name: String, path: PathBuf, error: String },
    /// The active mod changed
    Switched { name: String, resolved: usize, unresolved: usize },
}

/// Callback invoked after every completed switch
pub type Listener = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by listener registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID
    pub fn id(&self) -> u64 {
        self.0
    }
}
