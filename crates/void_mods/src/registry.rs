//! Mod Registry - known mods, the active selection and its resolved assets
//!
//! The registry owns:
//! - the ordered list of [`ModRecord`]s (append-only within a run; a
//!   re-registered default is moved to the end)
//! - a name table rebuilt from that list on every insert
//! - the active selection and its `key -> Resolution` cache
//! - listeners notified after every switch
//!
//! All of it sits behind a single lock. Listeners run after the lock is
//! released, so they may call back into the registry.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use parking_lot::Mutex;
use void_catalog::{CatalogLoader, Resolution, ResourceLocator};

use crate::config::RegistryConfig;
use crate::error::{RegistryError, RegistryResult};
use crate::event::{Listener, ListenerId, RegistryEvent};
use crate::record::{ModRecord, DEFAULT_MOD_NAME};

/// Oldest events are dropped once this many are waiting to be drained
pub const MAX_QUEUED_EVENTS: usize = 1024;

/// Registry lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryPhase {
    /// Created, no discovery run yet
    Created,
    /// A directory scan is in flight
    Discovering,
    /// Discovery finished
    Ready,
}

/// Result of a completed switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchSummary {
    /// Name of the now-active mod
    pub name: String,
    /// Required keys that resolved
    pub resolved: usize,
    /// Required keys that did not
    pub unresolved: usize,
}

pub(crate) struct RegistryState {
    pub(crate) phase: RegistryPhase,
    records: Vec<ModRecord>,
    /// Name -> index into `records`
    index: HashMap<String, usize>,
    active: Option<String>,
    resolved: HashMap<String, Resolution>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
    pub(crate) discoveries: usize,
    events: VecDeque<RegistryEvent>,
}

impl RegistryState {
    fn new() -> Self {
        Self {
            phase: RegistryPhase::Created,
            records: Vec::new(),
            index: HashMap::new(),
            active: None,
            resolved: HashMap::new(),
            listeners: Vec::new(),
            next_listener: 1,
            discoveries: 0,
            events: VecDeque::new(),
        }
    }

    /// Clear the name table and reinsert every record in order (last wins)
    fn rebuild_index(&mut self) {
        self.index.clear();
        for (i, record) in self.records.iter().enumerate() {
            self.index.insert(record.name.clone(), i);
        }
    }

    pub(crate) fn push_record(&mut self, record: ModRecord) {
        let event = match (&record.source_path, record.error()) {
            (Some(path), Some(error)) => RegistryEvent::ModFailed {
                name: record.name.clone(),
                path: path.clone(),
                error: error.to_string(),
            },
            (Some(path), None) => RegistryEvent::ModLoaded {
                name: record.name.clone(),
                path: path.clone(),
            },
            (None, _) => RegistryEvent::DefaultRegistered,
        };

        if self.index.contains_key(&record.name) {
            log::warn!("Mod '{}' shadows an earlier mod with the same name", record.name);
        }

        self.records.push(record);
        self.rebuild_index();
        self.push_event(event);
    }

    fn push_event(&mut self, event: RegistryEvent) {
        if self.events.len() == MAX_QUEUED_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    fn lookup(&self, name: &str) -> Option<&ModRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }
}

pub(crate) struct RegistryInner {
    pub(crate) loader: Arc<dyn CatalogLoader>,
    pub(crate) config: RegistryConfig,
    pub(crate) state: Mutex<RegistryState>,
}

/// The mod registry.
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct ModRegistry {
    pub(crate) inner: Arc<RegistryInner>,
}

impl ModRegistry {
    /// Create a registry that loads catalogs with `loader`
    pub fn new(loader: Arc<dyn CatalogLoader>, mut config: RegistryConfig) -> Self {
        config.normalize();
        Self {
            inner: Arc::new(RegistryInner {
                loader,
                config,
                state: Mutex::new(RegistryState::new()),
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.inner.config
    }

    /// Keys resolved on every switch
    pub fn required_assets(&self) -> &[String] {
        &self.inner.config.required_assets
    }

    /// Register the built-in content set.
    ///
    /// A second call removes the previous default record and appends the new
    /// one, so it wins the name table like any later registration. If no mod
    /// is active yet, or the default is, the default becomes active.
    pub fn register_default(&self, locator: Arc<dyn ResourceLocator>) -> RegistryResult<()> {
        let activate = {
            let mut state = self.inner.state.lock();

            if let Some(i) = state.records.iter().position(|r| r.is_default) {
                state.records.remove(i);
                state.rebuild_index();
            }
            state.push_record(ModRecord::default_content(locator));

            state.active.as_deref().map_or(true, |name| name == DEFAULT_MOD_NAME)
        };

        log::info!("Registered default content");

        if activate {
            self.switch_to(DEFAULT_MOD_NAME)?;
        }
        Ok(())
    }

    /// Make `name` the active mod.
    ///
    /// Clears the resolved cache, resolves every required key against the
    /// mod's catalog, then calls every listener in registration order.
    pub fn switch_to(&self, name: &str) -> RegistryResult<SwitchSummary> {
        let record = self.inner.state.lock().lookup(name).cloned();
        let Some(record) = record else {
            log::warn!("Cannot switch to unknown mod '{}'", name);
            return Err(RegistryError::UnknownMod(name.to_string()));
        };

        // Locators are external code; query them without holding the state lock
        let mut cache = HashMap::with_capacity(self.inner.config.required_assets.len());
        let (mut resolved, mut unresolved) = (0, 0);
        for key in &self.inner.config.required_assets {
            let resolution = record.resolve(key);
            if resolution.is_resolved() {
                resolved += 1;
            } else {
                log::debug!("Mod '{}' does not provide '{}'", record.name, key);
                unresolved += 1;
            }
            cache.insert(key.clone(), resolution);
        }

        let (summary, listeners) = {
            let mut state = self.inner.state.lock();
            state.active = Some(record.name.clone());
            state.resolved = cache;

            let summary = SwitchSummary {
                name: record.name.clone(),
                resolved,
                unresolved,
            };

            state.push_event(RegistryEvent::Switched {
                name: summary.name.clone(),
                resolved: summary.resolved,
                unresolved: summary.unresolved,
            });

            let listeners: Vec<Listener> = state.listeners.iter().map(|(_, l)| l.clone()).collect();
            (summary, listeners)
        };

        log::info!(
            "Switched to mod '{}' ({} resolved, {} unresolved)",
            summary.name,
            summary.resolved,
            summary.unresolved
        );

        for listener in listeners {
            listener();
        }

        Ok(summary)
    }

    /// Register a callback to run after every switch
    pub fn register_listener(&self, listener: impl Fn() + Send + Sync + 'static) -> ListenerId {
        let mut state = self.inner.state.lock();
        let id = ListenerId::new(state.next_listener);
        state.next_listener += 1;
        state.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unregister_listener(&self, id: ListenerId) -> bool {
        let mut state = self.inner.state.lock();
        let before = state.listeners.len();
        state.listeners.retain(|(lid, _)| *lid != id);
        state.listeners.len() != before
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.inner.state.lock().listeners.len()
    }

    /// Resolved location of `key` for the active mod
    pub fn resolve(&self, key: &str) -> Resolution {
        self.inner
            .state
            .lock()
            .resolved
            .get(key)
            .cloned()
            .unwrap_or(Resolution::Unresolved)
    }

    /// Resolutions for every required key, in configured order
    pub fn resolved_assets(&self) -> Vec<(String, Resolution)> {
        let state = self.inner.state.lock();
        self.inner
            .config
            .required_assets
            .iter()
            .filter_map(|key| state.resolved.get(key).map(|r| (key.clone(), r.clone())))
            .collect()
    }

    /// Name of the active mod
    pub fn active(&self) -> Option<String> {
        self.inner.state.lock().active.clone()
    }

    /// The active mod's record
    pub fn active_record(&self) -> Option<ModRecord> {
        let state = self.inner.state.lock();
        let name = state.active.as_deref()?;
        state.lookup(name).cloned()
    }

    /// Look up a mod by name
    pub fn get(&self, name: &str) -> Option<ModRecord> {
        self.inner.state.lock().lookup(name).cloned()
    }

    /// Check if a name is in the table
    pub fn contains(&self, name: &str) -> bool {
        self.inner.state.lock().index.contains_key(name)
    }

    /// Snapshot of all records, in registration order
    pub fn records(&self) -> Vec<ModRecord> {
        self.inner.state.lock().records.clone()
    }

    /// Record names in registration order (one entry per record)
    pub fn mod_names(&self) -> Vec<String> {
        self.inner.state.lock().records.iter().map(|r| r.name.clone()).collect()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.inner.state.lock().records.len()
    }

    /// Check if no records are registered
    pub fn is_empty(&self) -> bool {
        self.inner.state.lock().records.is_empty()
    }

    /// Number of distinct names in the table
    pub fn table_len(&self) -> usize {
        self.inner.state.lock().index.len()
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> RegistryPhase {
        self.inner.state.lock().phase
    }

    /// Drain events (at most [`MAX_QUEUED_EVENTS`], oldest first)
    pub fn drain_events(&self) -> Vec<RegistryEvent> {
        self.inner.state.lock().events.drain(..).collect()
    }

    /// Append a record and rebuild the name table
    pub(crate) fn insert_record(&self, record: ModRecord) {
        self.inner.state.lock().push_record(record);
    }
}

impl std::fmt::Debug for ModRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("ModRegistry")
            .field("phase", &state.phase)
            .field("records", &state.records.len())
            .field("active", &state.active)
            .finish()
    }
}
