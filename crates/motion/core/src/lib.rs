//! Deterministic character movement and move-route engine.
//!
//! `motion-core` reproduces a legacy tile-RPG engine's per-tick character
//! motion: stepping and jumping with sub-tile interpolation, the move-route
//! interpreter, sprite animation, and screen projection on looping maps.
//! All mutation of a character flows through [`engine::CharacterEngine`];
//! the world around it is reached through the oracle traits in [`env`].
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod geometry;
pub mod route;
pub mod state;

pub use config::{MotionConfig, UnknownCommandPolicy};
pub use engine::{CharacterEngine, RouteError, RouteSlot, advance_animation};
pub use env::{
    CharacterLookup, CharacterRef, CollisionGate, EffectSink, MapDimensions, MapGeometry,
    MoveKind, MoveProbe, OracleError, PcgRng, PendingMoveRegistry, RngOracle, SceneStatus,
    TargetLocator, TickContext, compute_seed,
};
pub use error::{ErrorSeverity, MotionError};
pub use geometry::{CoordinateProjector, Direction, DrawPriority, Facing, jump_height};
pub use route::{
    CommandCode, CommandDecodeError, CommandGroup, FaceTarget, MoveCommand, MoveRoute,
    MoveTarget, RawMoveCommand, SoundEffect, SpriteGraphic,
};
pub use state::{
    ActiveRoute, AnimFrame, AnimType, AnimationState, AutonomousMovement, CharacterId,
    CharacterKind, CharacterState, EventId, FlashColor, FlashState, Layer, MovementFlags,
    Position, Tick, VehicleKind,
};
