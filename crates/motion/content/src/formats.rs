//! On-disk shapes of route libraries and scenarios.
//!
//! These mirror the RON files one to one and are converted into
//! `motion-core` types by the loaders. Every field that has an obvious
//! default may be omitted from the file.

use std::collections::BTreeMap;

use motion_core::{
    AnimType, CharacterKind, CommandDecodeError, EventId, Facing, Layer, MoveCommand, MoveRoute,
    RawMoveCommand, VehicleKind,
};
use serde::{Deserialize, Serialize};

/// A move route as stored in data files.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteSpec {
    pub commands: Vec<RawMoveCommand>,
    pub repeat: bool,
    pub skippable: bool,
}

impl RouteSpec {
    /// Unknown command codes are kept for the interpreter's policy.
    pub fn to_route(&self) -> MoveRoute {
        MoveRoute::from_raw(&self.commands, self.repeat, self.skippable)
    }

    /// Rejects the route at the first unknown command code.
    pub fn to_route_strict(&self) -> Result<MoveRoute, (usize, CommandDecodeError)> {
        let commands = self
            .commands
            .iter()
            .enumerate()
            .map(|(index, raw)| MoveCommand::decode_strict(raw).map_err(|err| (index, err)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MoveRoute {
            commands,
            repeat: self.repeat,
            skippable: self.skippable,
        })
    }
}

/// Named routes, keyed by the name scenarios refer to.
pub type RouteTable = BTreeMap<String, RouteSpec>;

/// Geometry and passability of a scenario map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSpec {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub loop_horizontal: bool,
    #[serde(default)]
    pub loop_vertical: bool,
    /// Impassable tiles as `(x, y)`.
    #[serde(default)]
    pub blocked: Vec<(i32, i32)>,
    /// Bush tiles as `(x, y, depth)`.
    #[serde(default)]
    pub bush: Vec<(i32, i32, i32)>,
}

/// Character kind as written in scenario files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterKindSpec {
    Player,
    Event(u32),
    Vehicle(VehicleKind),
}

impl From<CharacterKindSpec> for CharacterKind {
    fn from(spec: CharacterKindSpec) -> Self {
        match spec {
            CharacterKindSpec::Player => CharacterKind::Player,
            CharacterKindSpec::Event(id) => CharacterKind::Event(EventId(id)),
            CharacterKindSpec::Vehicle(vehicle) => CharacterKind::Vehicle(vehicle),
        }
    }
}

/// A character placed when the scenario starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSpec {
    pub kind: CharacterKindSpec,
    pub position: (i32, i32),
    #[serde(default)]
    pub facing: Facing,
    #[serde(default)]
    pub speed: Option<u8>,
    #[serde(default)]
    pub frequency: Option<u8>,
    #[serde(default)]
    pub layer: Layer,
    #[serde(default)]
    pub anim: AnimType,
    #[serde(default)]
    pub through: bool,
    #[serde(default)]
    pub flying: bool,
    /// Name of a route in the scenario's table, run as the character's own
    /// movement.
    #[serde(default)]
    pub route: Option<String>,
}

/// A route forced onto a character at a given tick, as an event script would.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForcedRouteSpec {
    pub at_tick: u64,
    /// Legacy character code: 10001 player, 10002..=10004 vehicles, or an
    /// event id.
    pub character: i32,
    pub route: String,
    pub frequency: u8,
}

/// A complete replayable setup: map, routes, characters, scripted forces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub map: MapSpec,
    #[serde(default)]
    pub routes: RouteTable,
    pub characters: Vec<CharacterSpec>,
    #[serde(default)]
    pub forced: Vec<ForcedRouteSpec>,
}

impl ScenarioSpec {
    /// Route names referenced by characters or forced entries but missing
    /// from the table.
    pub fn missing_routes(&self) -> Vec<&str> {
        let referenced = self
            .characters
            .iter()
            .filter_map(|character| character.route.as_deref())
            .chain(self.forced.iter().map(|forced| forced.route.as_str()));
        let mut missing: Vec<&str> = referenced
            .filter(|name| !self.routes.contains_key(*name))
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }
}
