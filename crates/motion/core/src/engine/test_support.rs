//! Fake collaborators for engine tests.

use std::cell::{Cell, RefCell};

use crate::config::MotionConfig;
use crate::engine::{CharacterEngine, RouteError};
use crate::env::{
    CollisionGate, EffectSink, MapDimensions, MapGeometry, MoveKind, MoveProbe, PcgRng,
    PendingMoveRegistry, SceneStatus, TickContext,
};
use crate::route::{MoveCommand, MoveRoute, SoundEffect};
use crate::state::{CharacterId, CharacterKind, CharacterState, EventId, Position, Tick};

pub(crate) fn event_at(x: i32, y: i32) -> CharacterState {
    CharacterState::new(
        CharacterId(1),
        CharacterKind::Event(EventId(1)),
        Position::new(x, y),
    )
}

pub(crate) fn route(commands: Vec<MoveCommand>) -> MoveRoute {
    MoveRoute::new(commands)
}

pub(crate) struct TestMap {
    dimensions: MapDimensions,
    looping: bool,
    bush: Vec<Position>,
}

impl MapGeometry for TestMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn loops_horizontally(&self) -> bool {
        self.looping
    }

    fn loops_vertically(&self) -> bool {
        self.looping
    }

    fn bush_depth(&self, position: Position) -> i32 {
        if self.bush.contains(&position) { 12 } else { 0 }
    }
}

/// Grid gate that records every probe.
pub(crate) struct RecordingGate {
    dimensions: MapDimensions,
    looping: bool,
    blocked: Vec<Position>,
    reject_first: Cell<u32>,
    probes: RefCell<Vec<(MoveKind, Position)>>,
}

impl RecordingGate {
    pub(crate) fn probed(&self) -> Vec<Position> {
        self.probes.borrow().iter().map(|(_, to)| *to).collect()
    }

    pub(crate) fn kinds(&self) -> Vec<MoveKind> {
        self.probes.borrow().iter().map(|(kind, _)| *kind).collect()
    }
}

impl CollisionGate for RecordingGate {
    fn make_way(&self, probe: &MoveProbe, _from: Position, to: Position) -> bool {
        self.probes.borrow_mut().push((probe.kind, to));
        if self.reject_first.get() > 0 {
            self.reject_first.set(self.reject_first.get() - 1);
            return false;
        }
        if probe.through {
            return true;
        }
        if !self.looping && !self.dimensions.contains(to) {
            return false;
        }
        !self.blocked.contains(&to)
    }
}

#[derive(Default)]
pub(crate) struct RecordingRegistry {
    pending: Vec<CharacterId>,
    removals: usize,
}

impl RecordingRegistry {
    pub(crate) fn pending(&self) -> Vec<CharacterId> {
        self.pending.clone()
    }

    pub(crate) fn removals(&self) -> usize {
        self.removals
    }
}

impl PendingMoveRegistry for RecordingRegistry {
    fn add(&mut self, character: CharacterId) {
        if !self.pending.contains(&character) {
            self.pending.push(character);
        }
    }

    fn remove(&mut self, character: CharacterId) {
        self.pending.retain(|pending| *pending != character);
        self.removals += 1;
    }
}

#[derive(Default)]
pub(crate) struct RecordingEffects {
    pub(crate) sounds: Vec<SoundEffect>,
    pub(crate) switches: Vec<(i32, bool)>,
    pub(crate) refreshes: u32,
}

impl EffectSink for RecordingEffects {
    fn play_sound(&mut self, sound: &SoundEffect) {
        self.sounds.push(sound.clone());
    }

    fn set_switch(&mut self, switch_id: i32, value: bool) {
        self.switches.push((switch_id, value));
    }

    fn request_refresh(&mut self) {
        self.refreshes += 1;
    }
}

/// Owns one of each collaborator and lends them to the engine.
pub(crate) struct Harness {
    pub(crate) map: TestMap,
    pub(crate) gate: RecordingGate,
    pub(crate) target: Position,
    pub(crate) rng: PcgRng,
    pub(crate) registry: RecordingRegistry,
    pub(crate) effects: RecordingEffects,
    pub(crate) scene: SceneStatus,
    pub(crate) config: MotionConfig,
    pub(crate) frame: Tick,
}

impl Harness {
    pub(crate) fn open(width: u32, height: u32) -> Self {
        Self::build(width, height, false)
    }

    pub(crate) fn looping(width: u32, height: u32) -> Self {
        Self::build(width, height, true)
    }

    fn build(width: u32, height: u32, looping: bool) -> Self {
        let dimensions = MapDimensions::new(width, height);
        Self {
            map: TestMap {
                dimensions,
                looping,
                bush: Vec::new(),
            },
            gate: RecordingGate {
                dimensions,
                looping,
                blocked: Vec::new(),
                reject_first: Cell::new(0),
                probes: RefCell::new(Vec::new()),
            },
            target: Position::ORIGIN,
            rng: PcgRng,
            registry: RecordingRegistry::default(),
            effects: RecordingEffects::default(),
            scene: SceneStatus::default(),
            config: MotionConfig::default(),
            frame: Tick::ZERO,
        }
    }

    pub(crate) fn with_blocked(mut self, tiles: &[(i32, i32)]) -> Self {
        self.gate
            .blocked
            .extend(tiles.iter().map(|&(x, y)| Position::new(x, y)));
        self
    }

    pub(crate) fn with_bush(mut self, tiles: &[(i32, i32)]) -> Self {
        self.map
            .bush
            .extend(tiles.iter().map(|&(x, y)| Position::new(x, y)));
        self
    }

    pub(crate) fn rejecting_first_probes(self, count: u32) -> Self {
        self.gate.reject_first.set(count);
        self
    }

    pub(crate) fn with_target(mut self, target: Position) -> Self {
        self.target = target;
        self
    }

    pub(crate) fn with_interpreter_running(mut self) -> Self {
        self.scene.interpreter_running = true;
        self
    }

    pub(crate) fn with_config(mut self, config: MotionConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs `f` against an engine for `character` without advancing time.
    pub(crate) fn run<R>(
        &mut self,
        character: &mut CharacterState,
        f: impl FnOnce(&mut CharacterEngine<'_, '_>) -> R,
    ) -> R {
        let mut ctx = TickContext::new(
            &self.map,
            &self.gate,
            &self.target,
            &self.rng,
            &mut self.registry,
            &mut self.effects,
        )
        .with_scene(self.scene)
        .with_config(self.config)
        .at_frame(self.frame);
        let mut engine = CharacterEngine::new(character, &mut ctx);
        f(&mut engine)
    }

    /// One full tick, as the map driver runs it.
    pub(crate) fn tick(&mut self, character: &mut CharacterState) -> Result<(), RouteError> {
        character.set_processed(false);
        self.tick_without_reset(character)
    }

    pub(crate) fn tick_without_reset(
        &mut self,
        character: &mut CharacterState,
    ) -> Result<(), RouteError> {
        let outcome = self.run(character, |engine| engine.update());
        self.frame = self.frame.next();
        outcome
    }

    pub(crate) fn ticks(&mut self, character: &mut CharacterState, count: usize) {
        for _ in 0..count {
            let _ = self.tick(character);
        }
    }
}
