//! Map owner that drives every character once per tick.
//!
//! [`MapRuntime`] owns the characters of one map together with everything
//! the motion engine borrows from its surroundings: the grid, the pending
//! move registry, the switch bank and the random source. Each tick it lends
//! those to one character at a time, in legacy order (player, vehicles,
//! events).

use std::collections::BTreeMap;
use std::sync::Arc;

use motion_core::{
    CharacterEngine, CharacterId, CharacterKind, CharacterLookup, CharacterRef, CharacterState,
    CoordinateProjector, Direction, EventId, Facing, MotionConfig, MotionError, MoveRoute,
    OracleError, PcgRng, PendingMoveRegistry, Position, RouteError, SceneStatus, Tick,
    TickContext,
};
use serde::Serialize;

use crate::effects::MapEffects;
use crate::error::{Result, RuntimeError};
use crate::oracle::{GridMap, OccupancyGate, Occupant};
use crate::pending::PendingMoves;

/// Settings shared by every character on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuntimeConfig {
    pub motion: MotionConfig,
    /// Map id stamped on spawned characters.
    pub map_id: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            motion: MotionConfig::default(),
            map_id: 1,
        }
    }
}

/// Outcome of one [`MapRuntime::tick`].
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub frame: Tick,
    /// Route failures surfaced by the unknown-command policy.
    pub errors: Vec<(CharacterId, RouteError)>,
    pub refresh_requested: bool,
}

/// Observable state of one character after a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterSnapshot {
    pub frame: Tick,
    pub id: CharacterId,
    pub kind: CharacterKind,
    pub position: Position,
    pub direction: Direction,
    pub facing: Facing,
    pub remaining_step: i32,
    pub jumping: bool,
    pub screen_x: i32,
    pub screen_y: i32,
    pub screen_z: i32,
    pub opacity: i32,
    pub anim_frame: u8,
    pub route_index: Option<usize>,
}

pub struct MapRuntime {
    config: RuntimeConfig,
    map: GridMap,
    characters: BTreeMap<CharacterId, CharacterState>,
    next_id: u32,
    pending: PendingMoves,
    effects: MapEffects,
    scene: SceneStatus,
    rng: PcgRng,
    frame: Tick,
}

impl MapRuntime {
    pub fn new(map: GridMap, config: RuntimeConfig) -> Self {
        Self {
            config,
            map,
            characters: BTreeMap::new(),
            next_id: CharacterId::PLAYER.0 + 1,
            pending: PendingMoves::new(),
            effects: MapEffects::new(),
            scene: SceneStatus::default(),
            rng: PcgRng,
            frame: Tick::ZERO,
        }
    }

    pub fn builder(map: GridMap) -> MapRuntimeBuilder {
        MapRuntimeBuilder::new(map)
    }

    /// Places a character with default movement settings.
    pub fn spawn(&mut self, kind: CharacterKind, position: Position) -> Result<CharacterId> {
        self.spawn_with(kind, position, |character| character)
    }

    /// Places a character, letting `configure` adjust it before it joins
    /// the map. The player always receives [`CharacterId::PLAYER`].
    pub fn spawn_with(
        &mut self,
        kind: CharacterKind,
        position: Position,
        configure: impl FnOnce(CharacterState) -> CharacterState,
    ) -> Result<CharacterId> {
        let id = match kind {
            CharacterKind::Player if self.characters.contains_key(&CharacterId::PLAYER) => {
                return Err(RuntimeError::DuplicatePlayer);
            }
            CharacterKind::Player => CharacterId::PLAYER,
            _ => {
                let id = CharacterId(self.next_id);
                self.next_id += 1;
                id
            }
        };

        let mut character = configure(
            CharacterState::new(id, kind, position).with_map_id(self.config.map_id),
        );
        character.id = id;
        tracing::debug!(character = %id, ?kind, %position, "character spawned");
        self.characters.insert(id, character);
        Ok(id)
    }

    /// Removes a character, dropping it from the pending-move registry.
    pub fn despawn(&mut self, id: CharacterId) -> Result<CharacterState> {
        let character = self
            .characters
            .remove(&id)
            .ok_or(RuntimeError::CharacterNotFound(id))?;
        self.pending.remove(id);
        tracing::debug!(character = %id, "character despawned");
        Ok(character)
    }

    pub fn character(&self, id: CharacterId) -> Option<&CharacterState> {
        self.characters.get(&id)
    }

    pub fn character_mut(&mut self, id: CharacterId) -> Option<&mut CharacterState> {
        self.characters.get_mut(&id)
    }

    pub fn characters(&self) -> impl Iterator<Item = &CharacterState> {
        self.characters.values()
    }

    pub fn player(&self) -> Option<&CharacterState> {
        self.characters.get(&CharacterId::PLAYER)
    }

    /// Resolves a script reference to the id of a character on this map.
    pub fn id_of(
        &self,
        reference: CharacterRef,
        context_event: Option<EventId>,
    ) -> Result<CharacterId> {
        Ok(self.resolve(reference, context_event)?.id)
    }

    pub fn map(&self) -> &GridMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut GridMap {
        &mut self.map
    }

    pub fn pending(&self) -> &PendingMoves {
        &self.pending
    }

    /// True once no forced route is still running.
    pub fn is_movement_settled(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn effects(&self) -> &MapEffects {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut MapEffects {
        &mut self.effects
    }

    pub fn scene(&self) -> SceneStatus {
        self.scene
    }

    pub fn set_scene(&mut self, scene: SceneStatus) {
        self.scene = scene;
    }

    pub fn frame(&self) -> Tick {
        self.frame
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Advances every character by one tick.
    ///
    /// A route failure on one character is logged and reported; the other
    /// characters still update.
    pub fn tick(&mut self) -> TickReport {
        let frame = self.frame;
        let span = tracing::info_span!("tick", %frame);
        let _guard = span.enter();

        for character in self.characters.values_mut() {
            character.set_processed(false);
        }

        let mut errors = Vec::new();
        for id in self.update_order() {
            if let Some(Err(err)) = self.run_engine(id, |engine| engine.update()) {
                tracing::warn!(
                    character = %id,
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    "{err}"
                );
                errors.push((id, err));
            }
        }

        let refresh_requested = self.effects.take_refresh();
        if refresh_requested {
            tracing::info!("map refresh requested");
        }

        self.frame = frame.next();
        TickReport {
            frame,
            errors,
            refresh_requested,
        }
    }

    /// Runs `count` ticks and returns their reports.
    pub fn run(&mut self, count: usize) -> Vec<TickReport> {
        (0..count).map(|_| self.tick()).collect()
    }

    /// Forces `route` onto the referenced character, as a script command
    /// would.
    pub fn force_move_route(
        &mut self,
        reference: CharacterRef,
        context_event: Option<EventId>,
        route: Arc<MoveRoute>,
        frequency: u8,
    ) -> Result<CharacterId> {
        let id = self.id_of(reference, context_event)?;
        self.with_engine(id, |engine| engine.force_move_route(route, frequency))?;
        Ok(id)
    }

    pub fn cancel_move_route(
        &mut self,
        reference: CharacterRef,
        context_event: Option<EventId>,
    ) -> Result<CharacterId> {
        let id = self.id_of(reference, context_event)?;
        self.with_engine(id, |engine| engine.cancel_move_route())?;
        Ok(id)
    }

    /// Lends an engine for `id` outside the tick, e.g. to start a step or
    /// a jump from a script.
    pub fn with_engine<R>(
        &mut self,
        id: CharacterId,
        f: impl FnOnce(&mut CharacterEngine<'_, '_>) -> R,
    ) -> Result<R> {
        self.run_engine(id, f)
            .ok_or(RuntimeError::CharacterNotFound(id))
    }

    pub fn snapshot(&self, id: CharacterId) -> Option<CharacterSnapshot> {
        let character = self.characters.get(&id)?;
        let projector = CoordinateProjector::new(&self.map);
        Some(CharacterSnapshot {
            frame: self.frame,
            id,
            kind: character.kind,
            position: character.position,
            direction: character.direction,
            facing: character.sprite_facing,
            remaining_step: character.remaining_step,
            jumping: character.is_jumping(),
            screen_x: projector.screen_x(character, false),
            screen_y: projector.screen_y(character, false, true),
            screen_z: projector.screen_z(character, false),
            opacity: character.opacity(),
            anim_frame: character.animation.frame as u8,
            route_index: character.active_route.as_ref().map(|active| active.index),
        })
    }

    pub fn snapshots(&self) -> Vec<CharacterSnapshot> {
        self.characters
            .keys()
            .filter_map(|id| self.snapshot(*id))
            .collect()
    }

    fn update_order(&self) -> Vec<CharacterId> {
        let mut order: Vec<(u8, CharacterId)> = self
            .characters
            .values()
            .map(|character| {
                let rank = match character.kind {
                    CharacterKind::Player => 0,
                    CharacterKind::Vehicle(_) => 1,
                    CharacterKind::Event(_) => 2,
                };
                (rank, character.id)
            })
            .collect();
        order.sort_unstable();
        order.into_iter().map(|(_, id)| id).collect()
    }

    fn target_position(&self) -> Position {
        self.player()
            .map(|player| player.position)
            .unwrap_or(Position::ORIGIN)
    }

    fn run_engine<R>(
        &mut self,
        id: CharacterId,
        f: impl FnOnce(&mut CharacterEngine<'_, '_>) -> R,
    ) -> Option<R> {
        let occupants: Vec<Occupant> = self
            .characters
            .values()
            .filter(|character| character.id != id)
            .map(Occupant::of)
            .collect();
        let target = self.target_position();

        let Self {
            config,
            map,
            characters,
            pending,
            effects,
            scene,
            rng,
            frame,
            ..
        } = self;
        let character = characters.get_mut(&id)?;
        let gate = OccupancyGate::new(&*map, &occupants);
        let mut ctx = TickContext::new(&*map, &gate, &target, &*rng, pending, effects)
            .with_scene(*scene)
            .with_config(config.motion)
            .at_frame(*frame);
        let mut engine = CharacterEngine::new(character, &mut ctx);
        Some(f(&mut engine))
    }

    fn wanted_kind(
        reference: CharacterRef,
        context_event: Option<EventId>,
    ) -> std::result::Result<CharacterKind, OracleError> {
        Ok(match reference {
            CharacterRef::Player => CharacterKind::Player,
            CharacterRef::Vehicle(vehicle) => CharacterKind::Vehicle(vehicle),
            CharacterRef::Event(event) => CharacterKind::Event(event),
            CharacterRef::ThisEvent => {
                CharacterKind::Event(context_event.ok_or(OracleError::NoContextEvent)?)
            }
        })
    }
}

fn not_found(kind: CharacterKind) -> OracleError {
    match kind {
        CharacterKind::Player => OracleError::PlayerNotFound,
        CharacterKind::Vehicle(vehicle) => OracleError::VehicleNotFound(vehicle),
        CharacterKind::Event(event) => OracleError::EventNotFound(event.0),
    }
}

impl CharacterLookup for MapRuntime {
    fn resolve(
        &self,
        reference: CharacterRef,
        context_event: Option<EventId>,
    ) -> std::result::Result<&CharacterState, OracleError> {
        let wanted = Self::wanted_kind(reference, context_event)?;
        self.characters
            .values()
            .find(|character| character.kind == wanted)
            .ok_or_else(|| not_found(wanted))
    }

    fn resolve_mut(
        &mut self,
        reference: CharacterRef,
        context_event: Option<EventId>,
    ) -> std::result::Result<&mut CharacterState, OracleError> {
        let wanted = Self::wanted_kind(reference, context_event)?;
        self.characters
            .values_mut()
            .find(|character| character.kind == wanted)
            .ok_or_else(|| not_found(wanted))
    }
}

/// Builder for [`MapRuntime`].
pub struct MapRuntimeBuilder {
    config: RuntimeConfig,
    map: GridMap,
    scene: SceneStatus,
}

impl MapRuntimeBuilder {
    pub fn new(map: GridMap) -> Self {
        Self {
            config: RuntimeConfig::default(),
            map,
            scene: SceneStatus::default(),
        }
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn motion(mut self, motion: MotionConfig) -> Self {
        self.config.motion = motion;
        self
    }

    pub fn map_id(mut self, map_id: u32) -> Self {
        self.config.map_id = map_id;
        self
    }

    pub fn scene(mut self, scene: SceneStatus) -> Self {
        self.scene = scene;
        self
    }

    pub fn build(self) -> MapRuntime {
        let mut runtime = MapRuntime::new(self.map, self.config);
        runtime.scene = self.scene;
        runtime
    }
}
