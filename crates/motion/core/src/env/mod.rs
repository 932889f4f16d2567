//! Collaborators consulted during a character update.
//!
//! The engine owns no map data. Everything it reads about the world (map
//! geometry, passability, the target character, randomness) and everything
//! it changes outside the character (pending-move registry, switches,
//! sounds) goes through the traits here. [`TickContext`] bundles them for
//! one character's update.
mod effects;
mod error;
mod gate;
mod lookup;
mod map;
mod registry;
mod rng;
mod target;

pub use effects::EffectSink;
pub use error::OracleError;
pub use gate::{CollisionGate, MoveKind, MoveProbe};
pub use lookup::{CharacterLookup, CharacterRef};
pub use map::{MapDimensions, MapGeometry};
pub use registry::PendingMoveRegistry;
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use target::TargetLocator;

use crate::config::MotionConfig;
use crate::state::Tick;

/// Scene-level flags that gate the stop counter of idle characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneStatus {
    /// A message box lets events keep moving while it is open.
    pub continue_events: bool,
    /// The map's foreground interpreter is running a script.
    pub interpreter_running: bool,
}

/// Everything one character update borrows from its surroundings.
pub struct TickContext<'a> {
    pub map: &'a dyn MapGeometry,
    pub gate: &'a dyn CollisionGate,
    pub target: &'a dyn TargetLocator,
    pub rng: &'a dyn RngOracle,
    pub registry: &'a mut dyn PendingMoveRegistry,
    pub effects: &'a mut dyn EffectSink,
    pub scene: SceneStatus,
    pub config: MotionConfig,
    pub frame: Tick,
}

impl<'a> TickContext<'a> {
    pub fn new(
        map: &'a dyn MapGeometry,
        gate: &'a dyn CollisionGate,
        target: &'a dyn TargetLocator,
        rng: &'a dyn RngOracle,
        registry: &'a mut dyn PendingMoveRegistry,
        effects: &'a mut dyn EffectSink,
    ) -> Self {
        Self {
            map,
            gate,
            target,
            rng,
            registry,
            effects,
            scene: SceneStatus::default(),
            config: MotionConfig::default(),
            frame: Tick::ZERO,
        }
    }

    pub fn with_scene(mut self, scene: SceneStatus) -> Self {
        self.scene = scene;
        self
    }

    pub fn with_config(mut self, config: MotionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn at_frame(mut self, frame: Tick) -> Self {
        self.frame = frame;
        self
    }
}
