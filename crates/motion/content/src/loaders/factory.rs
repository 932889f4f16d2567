//! Content factory for loading everything from one data directory.

use std::path::{Path, PathBuf};

use motion_core::MotionConfig;

use crate::formats::ScenarioSpec;
use crate::loaders::{ConfigLoader, LoadResult, RouteLibrary, RouteLoader, ScenarioLoader};

/// Content factory that loads motion content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── routes.ron
/// └── scenarios/
///     ├── patrol.ron
///     └── ferry.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load `config.toml`, falling back to defaults when it is absent.
    pub fn load_config(&self) -> LoadResult<MotionConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(MotionConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the shared route library from `routes.ron`.
    pub fn load_routes(&self) -> LoadResult<RouteLibrary> {
        RouteLoader::load(&self.data_dir.join("routes.ron"))
    }

    /// Load `scenarios/{name}.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<ScenarioSpec> {
        let path = self
            .data_dir
            .join("scenarios")
            .join(format!("{}.ron", name));
        ScenarioLoader::load(&path)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
