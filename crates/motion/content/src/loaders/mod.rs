//! Content loaders for reading motion data from files.
//!
//! Loaders parse the shapes defined in [`crate::formats`] and validate them
//! before handing out `motion-core` types.

pub mod config;
pub mod factory;
pub mod route;
pub mod scenario;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use route::{RouteLibrary, RouteLoader};
pub use scenario::ScenarioLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
