//! Engine configuration loader.

use std::path::Path;

use motion_core::MotionConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`MotionConfig`] from TOML files.
///
/// Every key is optional; missing keys keep their defaults.
///
/// ```toml
/// unknown_command = "stall"
/// rng_seed = 42
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<MotionConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<MotionConfig> {
        let config: MotionConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motion_core::UnknownCommandPolicy;

    #[test]
    fn missing_keys_keep_defaults() {
        let config = ConfigLoader::parse("rng_seed = 9").unwrap();
        assert_eq!(config.rng_seed, 9);
        assert_eq!(config.unknown_command, UnknownCommandPolicy::Skip);
    }

    #[test]
    fn policy_is_read_in_snake_case() {
        let config = ConfigLoader::parse("unknown_command = \"fail\"").unwrap();
        assert_eq!(config.unknown_command, UnknownCommandPolicy::Fail);
        assert!(ConfigLoader::parse("unknown_command = \"explode\"").is_err());
    }
}
