//! Per-character state.
//!
//! Everything here is plain data plus small accessors; tick logic lives in
//! [`crate::engine`].
mod animation;
mod character;
mod common;
mod flags;
mod flash;

pub use animation::{AnimFrame, AnimType, AnimationState};
pub use character::{
    ActiveRoute, AutonomousMovement, CharacterKind, CharacterState, Layer, VehicleKind,
};
pub use common::{CharacterId, EventId, Position, Tick};
pub use flags::MovementFlags;
pub use flash::{FlashColor, FlashState};
