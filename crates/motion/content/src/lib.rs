//! Data-driven motion content and its loaders.
//!
//! This crate reads the files a map owner feeds to `motion-core`:
//! - Move-route libraries (RON)
//! - Replay scenarios: map geometry, characters, scripted routes (RON)
//! - Engine configuration (TOML)
//!
//! Content is converted into `motion-core` types and never appears in
//! character state directly.

#[cfg(feature = "serde")]
pub mod formats;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "serde")]
pub use formats::{
    CharacterKindSpec, CharacterSpec, ForcedRouteSpec, MapSpec, RouteSpec, RouteTable,
    ScenarioSpec,
};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, RouteLibrary, RouteLoader, ScenarioLoader,
};
