//! Void Mod Host
//!
//! Owns the mod registry for the lifetime of the process:
//! - Loads configuration (`mods.toml`, `VOID_MODS_*`)
//! - Registers the built-in content
//! - Discovers catalogs in the mod directory
//! - Optionally switches to the mod named on the command line
//!
//! Run with: cargo run -p void_mod_host -- "Rare Sword Pack"

use std::sync::Arc;

use void_catalog::{CatalogLoader, CatalogLocator, JsonCatalogLoader, ResourceLocator};
use void_mods::{ModRegistry, RegistryConfig, RegistryError, RegistryResult, Resolution};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let config = RegistryConfig::load();

    // First non-flag argument is the mod to activate
    let target = std::env::args().skip(1).find(|arg| !arg.starts_with("--"));

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Failed to create runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run(config, target)) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: RegistryConfig, target: Option<String>) -> RegistryResult<()> {
    let loader: Arc<dyn CatalogLoader> = Arc::new(JsonCatalogLoader::new());
    let builtin = load_builtin(loader.as_ref(), &config).await;
    let mod_path = config.mod_path();

    let registry = ModRegistry::new(loader, config);

    let observer = registry.clone();
    registry.register_listener(move || {
        if let Some(name) = observer.active() {
            log::info!("Active mod is now '{}'", name);
        }
    });

    registry.register_default(builtin)?;

    match registry.discover(&mod_path).await {
        Ok(report) => {
            for (name, error) in &report.failed {
                log::warn!("Mod '{}' is unavailable: {}", name, error);
            }
        }
        Err(RegistryError::DirectoryUnreadable { path, source }) => {
            log::warn!("No mods loaded, cannot read {:?}: {}", path, source);
        }
        Err(e) => return Err(e),
    }
    log_events(&registry);

    println!("Mods:");
    for record in registry.records() {
        let status = match record.error() {
            Some(_) => "failed",
            None if record.is_default => "built-in",
            None => "ready",
        };
        println!("  {:<32} {}", record.name, status);
    }

    if let Some(name) = target {
        registry.switch_to(&name)?;
        log_events(&registry);
    }

    if let Some(active) = registry.active() {
        println!();
        println!("Assets for '{}':", active);
        for (key, resolution) in registry.resolved_assets() {
            match resolution {
                Resolution::Resolved(location) => println!("  {:<24} {}", key, location.internal_id),
                Resolution::Unresolved => println!("  {:<24} (unresolved)", key),
            }
        }
    }

    Ok(())
}

/// Load the configured built-in catalog, or fall back to empty content
async fn load_builtin(loader: &dyn CatalogLoader, config: &RegistryConfig) -> Arc<dyn ResourceLocator> {
    if let Some(path) = config.default_catalog_path() {
        match loader.load_catalog(&path).await {
            Ok(locator) => return locator,
            Err(e) => log::warn!("Built-in catalog unavailable: {}", e),
        }
    }
    Arc::new(CatalogLocator::new("builtin"))
}

/// Drain queued registry events into the log
fn log_events(registry: &ModRegistry) {
    for event in registry.drain_events() {
        log::debug!("Registry event: {:?}", event);
    }
}
