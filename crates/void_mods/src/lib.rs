//! # void_mods - Mod Registry
//!
//! Tracks content packs ("mods") and which one is active:
//! - Built-in default content plus any number of catalog-backed mods
//! - Concurrent catalog discovery from a directory
//! - Active-mod switching with required-asset resolution
//! - Listeners notified after every switch
//!
//! ## Lifecycle
//!
//! `create -> discover -> ready`, owned by the host process:
//!
//! ```ignore
//! use void_mods::prelude::*;
//!
//! let config = RegistryConfig::load();
//! let registry = ModRegistry::new(Arc::new(JsonCatalogLoader::new()), config);
//!
//! registry.register_default(builtin_locator)?;
//! registry.register_listener(|| log::info!("mod changed"));
//!
//! let report = registry.discover(registry.config().mod_path()).await?;
//! registry.switch_to("Rare Sword Pack")?;
//!
//! if let Resolution::Resolved(location) = registry.resolve("player_model") {
//!     spawn_from(location);
//! }
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod event;
pub mod naming;
pub mod record;
pub mod registry;

pub use config::RegistryConfig;
pub use discovery::{CatalogCandidate, DiscoveryReport};
pub use error::{RegistryError, RegistryResult};
pub use event::{Listener, ListenerId, RegistryEvent};
pub use naming::{display_name, display_name_for_path};
pub use record::{CatalogState, ModRecord, DEFAULT_MOD_NAME};
pub use registry::{ModRegistry, RegistryPhase, SwitchSummary, MAX_QUEUED_EVENTS};

pub use void_catalog::{Resolution, ResourceLocation, ResourceLocator};

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::config::RegistryConfig;
    pub use crate::error::{RegistryError, RegistryResult};
    pub use crate::record::{ModRecord, DEFAULT_MOD_NAME};
    pub use crate::registry::{ModRegistry, RegistryPhase};
    pub use void_catalog::prelude::*;
}
