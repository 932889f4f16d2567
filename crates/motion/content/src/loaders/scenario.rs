//! Scenario loader.
//!
//! A scenario bundles a map, its route table, the starting characters and
//! the routes scripts force onto them. Route references are checked here so
//! the runtime never sees a dangling name.

use std::path::Path;

use crate::formats::ScenarioSpec;
use crate::loaders::{LoadResult, read_file};

pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<ScenarioSpec> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("scenario {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<ScenarioSpec> {
        let scenario: ScenarioSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        let missing = scenario.missing_routes();
        if !missing.is_empty() {
            anyhow::bail!("unknown route(s): {}", missing.join(", "));
        }
        if scenario.map.width == 0 || scenario.map.height == 0 {
            anyhow::bail!("map must be at least 1x1");
        }

        tracing::debug!(
            characters = scenario.characters.len(),
            routes = scenario.routes.len(),
            "scenario parsed"
        );
        Ok(scenario)
    }
}
