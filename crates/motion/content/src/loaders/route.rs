//! Move-route library loader.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use motion_core::MoveRoute;

use crate::formats::RouteTable;
use crate::loaders::{LoadResult, read_file};

/// Decoded routes shared by name. Cloning a route out is an `Arc` bump.
#[derive(Clone, Debug, Default)]
pub struct RouteLibrary {
    routes: BTreeMap<String, Arc<MoveRoute>>,
}

impl RouteLibrary {
    /// Decodes a table, keeping unknown command codes.
    pub fn from_table(table: &RouteTable) -> Self {
        let routes = table
            .iter()
            .map(|(name, spec)| (name.clone(), Arc::new(spec.to_route())))
            .collect();
        Self { routes }
    }

    /// Decodes a table, failing on the first unknown command code.
    pub fn from_table_strict(table: &RouteTable) -> LoadResult<Self> {
        let mut routes = BTreeMap::new();
        for (name, spec) in table {
            let route = spec.to_route_strict().map_err(|(index, err)| {
                anyhow::anyhow!("route '{}' command {}: {}", name, index, err)
            })?;
            routes.insert(name.clone(), Arc::new(route));
        }
        Ok(Self { routes })
    }

    pub fn get(&self, name: &str) -> Option<Arc<MoveRoute>> {
        self.routes.get(name).cloned()
    }

    pub fn insert(&mut self, name: impl Into<String>, route: MoveRoute) {
        self.routes.insert(name.into(), Arc::new(route));
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Loader for route libraries from RON files.
///
/// The file is a map from route name to route:
///
/// ```ron
/// {
///     "patrol": (
///         commands: [(command_id: 1), (command_id: 1), (command_id: 3), (command_id: 3)],
///         repeat: true,
///     ),
/// }
/// ```
pub struct RouteLoader;

impl RouteLoader {
    pub fn load(path: &Path) -> LoadResult<RouteLibrary> {
        let table = Self::load_table(path)?;
        Ok(RouteLibrary::from_table(&table))
    }

    /// Like [`RouteLoader::load`], but unknown command codes are an error.
    pub fn load_strict(path: &Path) -> LoadResult<RouteLibrary> {
        let table = Self::load_table(path)?;
        RouteLibrary::from_table_strict(&table)
    }

    pub fn load_table(path: &Path) -> LoadResult<RouteTable> {
        let content = read_file(path)?;
        Self::parse_table(&content)
    }

    pub fn parse_table(content: &str) -> LoadResult<RouteTable> {
        let table: RouteTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse route RON: {}", e))?;
        tracing::debug!(routes = table.len(), "route table parsed");
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motion_core::{Direction, MoveCommand, MoveTarget};

    const PATROL: &str = r#"{
        "patrol": (
            commands: [(command_id: 1), (command_id: 3)],
            repeat: true,
        ),
        "broken": (
            commands: [(command_id: 23), (command_id: 77)],
        ),
    }"#;

    #[test]
    fn lenient_library_keeps_unknown_codes() {
        let table = RouteLoader::parse_table(PATROL).unwrap();
        let library = RouteLibrary::from_table(&table);

        let patrol = library.get("patrol").unwrap();
        assert!(patrol.repeat);
        assert_eq!(
            patrol.commands[0],
            MoveCommand::Move(MoveTarget::Toward(Direction::Right))
        );
        let broken = library.get("broken").unwrap();
        assert_eq!(broken.commands[1], MoveCommand::Unknown { code: 77 });
    }

    #[test]
    fn strict_library_names_the_route() {
        let table = RouteLoader::parse_table(PATROL).unwrap();
        let error = RouteLibrary::from_table_strict(&table).unwrap_err();
        assert!(error.to_string().contains("'broken' command 1"));
    }
}
