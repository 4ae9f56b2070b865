//! # void_catalog - Content Catalogs
//!
//! The asset-system side of mod loading:
//! - [`CatalogLoader`] turns a catalog file into a [`ResourceLocator`]
//! - [`ResourceLocator`] maps asset keys to [`ResourceLocation`]s
//! - [`JsonCatalogLoader`] reads the JSON catalog format from disk
//!
//! ## Example
//!
//! ```ignore
//! use void_catalog::prelude::*;
//!
//! let loader = JsonCatalogLoader::new();
//! let locator = loader.load_catalog(Path::new("mods/rare_sword_pack.json")).await?;
//!
//! match Resolution::from(locator.locate("player_model")) {
//!     Resolution::Resolved(location) => println!("{}", location),
//!     Resolution::Unresolved => println!("not provided by this pack"),
//! }
//! ```

pub mod location;
pub mod locator;
pub mod loader;
pub mod json;

pub use location::{ResourceLocation, Resolution};
pub use locator::{ResourceLocator, CatalogLocator};
pub use loader::{CatalogLoader, CatalogError, CatalogResult};
pub use json::{JsonCatalogLoader, CatalogDocument, CatalogEntry};

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::location::{ResourceLocation, Resolution};
    pub use crate::locator::{ResourceLocator, CatalogLocator};
    pub use crate::loader::{CatalogLoader, CatalogError, CatalogResult};
    pub use crate::json::JsonCatalogLoader;
}
