//! External move-route record format and its numeric command codes.

use crate::geometry::{Direction, Facing};
use crate::route::{FaceTarget, MoveCommand, MoveTarget, SoundEffect, SpriteGraphic};

/// One move-route record exactly as stored in map/event data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawMoveCommand {
    pub command_id: i32,
    pub parameter_a: i32,
    pub parameter_b: i32,
    pub parameter_c: i32,
    pub parameter_string: String,
}

impl RawMoveCommand {
    pub fn new(command_id: i32) -> Self {
        Self {
            command_id,
            ..Self::default()
        }
    }

    pub fn with_parameters(mut self, a: i32, b: i32, c: i32) -> Self {
        self.parameter_a = a;
        self.parameter_b = b;
        self.parameter_c = c;
        self
    }

    pub fn with_string(mut self, value: impl Into<String>) -> Self {
        self.parameter_string = value.into();
        self
    }
}

/// Legacy command code table.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::FromRepr,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum CommandCode {
    MoveUp = 0,
    MoveRight,
    MoveDown,
    MoveLeft,
    MoveUpRight,
    MoveDownRight,
    MoveDownLeft,
    MoveUpLeft,
    MoveRandom,
    MoveTowardTarget,
    MoveAwayFromTarget,
    MoveForward,
    FaceUp,
    FaceRight,
    FaceDown,
    FaceLeft,
    Turn90DegreeRight,
    Turn90DegreeLeft,
    Turn180Degree,
    Turn90DegreeRandom,
    FaceRandomDirection,
    FaceTarget,
    FaceAwayFromTarget,
    Wait,
    BeginJump,
    EndJump,
    LockFacing,
    UnlockFacing,
    IncreaseMoveSpeed,
    DecreaseMoveSpeed,
    IncreaseMoveFrequency,
    DecreaseMoveFrequency,
    SwitchOn,
    SwitchOff,
    ChangeGraphic,
    PlaySoundEffect,
    WalkEverywhereOn,
    WalkEverywhereOff,
    StopAnimation,
    StartAnimation,
    IncreaseTransparency,
    DecreaseTransparency,
}

impl CommandCode {
    pub fn from_id(command_id: i32) -> Option<Self> {
        u8::try_from(command_id).ok().and_then(Self::from_repr)
    }
}

/// Raised by strict decoding for codes outside the legacy table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown move command code {code}")]
pub struct CommandDecodeError {
    pub code: i32,
}

impl crate::error::MotionError for CommandDecodeError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "ROUTE_UNKNOWN_COMMAND_CODE"
    }
}

impl MoveCommand {
    /// Decodes a record. Unknown codes become [`MoveCommand::Unknown`] so the
    /// interpreter's policy decides what happens to them.
    pub fn decode(raw: &RawMoveCommand) -> Self {
        match CommandCode::from_id(raw.command_id) {
            Some(code) => Self::from_code(code, raw),
            None => MoveCommand::Unknown {
                code: raw.command_id,
            },
        }
    }

    /// Decodes a record, rejecting unknown codes.
    pub fn decode_strict(raw: &RawMoveCommand) -> Result<Self, CommandDecodeError> {
        CommandCode::from_id(raw.command_id)
            .map(|code| Self::from_code(code, raw))
            .ok_or(CommandDecodeError {
                code: raw.command_id,
            })
    }

    fn from_code(code: CommandCode, raw: &RawMoveCommand) -> Self {
        use CommandCode as C;
        match code {
            C::MoveUp
            | C::MoveRight
            | C::MoveDown
            | C::MoveLeft
            | C::MoveUpRight
            | C::MoveDownRight
            | C::MoveDownLeft
            | C::MoveUpLeft => match Direction::from_repr(code as u8) {
                Some(direction) => MoveCommand::Move(MoveTarget::Toward(direction)),
                None => MoveCommand::Unknown {
                    code: raw.command_id,
                },
            },
            C::MoveRandom => MoveCommand::Move(MoveTarget::Random),
            C::MoveTowardTarget => MoveCommand::Move(MoveTarget::TowardTarget),
            C::MoveAwayFromTarget => MoveCommand::Move(MoveTarget::AwayFromTarget),
            C::MoveForward => MoveCommand::Move(MoveTarget::Forward),
            C::FaceUp => MoveCommand::Turn(FaceTarget::Face(Facing::Up)),
            C::FaceRight => MoveCommand::Turn(FaceTarget::Face(Facing::Right)),
            C::FaceDown => MoveCommand::Turn(FaceTarget::Face(Facing::Down)),
            C::FaceLeft => MoveCommand::Turn(FaceTarget::Face(Facing::Left)),
            C::Turn90DegreeRight => MoveCommand::Turn(FaceTarget::TurnRight),
            C::Turn90DegreeLeft => MoveCommand::Turn(FaceTarget::TurnLeft),
            C::Turn180Degree => MoveCommand::Turn(FaceTarget::TurnAround),
            C::Turn90DegreeRandom => MoveCommand::Turn(FaceTarget::TurnRandomSide),
            C::FaceRandomDirection => MoveCommand::Turn(FaceTarget::Random),
            C::FaceTarget => MoveCommand::Turn(FaceTarget::TowardTarget),
            C::FaceAwayFromTarget => MoveCommand::Turn(FaceTarget::AwayFromTarget),
            C::Wait => MoveCommand::Wait,
            C::BeginJump => MoveCommand::BeginJump,
            C::EndJump => MoveCommand::EndJump,
            C::LockFacing => MoveCommand::LockFacing,
            C::UnlockFacing => MoveCommand::UnlockFacing,
            C::IncreaseMoveSpeed => MoveCommand::IncreaseSpeed,
            C::DecreaseMoveSpeed => MoveCommand::DecreaseSpeed,
            C::IncreaseMoveFrequency => MoveCommand::IncreaseFrequency,
            C::DecreaseMoveFrequency => MoveCommand::DecreaseFrequency,
            C::SwitchOn => MoveCommand::SwitchOn(raw.parameter_a),
            C::SwitchOff => MoveCommand::SwitchOff(raw.parameter_a),
            C::ChangeGraphic => MoveCommand::ChangeGraphic(SpriteGraphic::new(
                raw.parameter_string.clone(),
                raw.parameter_a,
            )),
            C::PlaySoundEffect => MoveCommand::PlaySound(SoundEffect {
                name: raw.parameter_string.clone(),
                volume: raw.parameter_a,
                tempo: raw.parameter_b,
                balance: raw.parameter_c,
            }),
            C::WalkEverywhereOn => MoveCommand::WalkEverywhereOn,
            C::WalkEverywhereOff => MoveCommand::WalkEverywhereOff,
            C::StopAnimation => MoveCommand::StopAnimation,
            C::StartAnimation => MoveCommand::StartAnimation,
            C::IncreaseTransparency => MoveCommand::IncreaseTransparency,
            C::DecreaseTransparency => MoveCommand::DecreaseTransparency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn table_covers_codes_zero_through_forty_one() {
        assert_eq!(CommandCode::iter().count(), 42);
        assert_eq!(CommandCode::from_id(41), Some(CommandCode::DecreaseTransparency));
        assert_eq!(CommandCode::from_id(42), None);
        assert_eq!(CommandCode::from_id(-1), None);
    }

    #[test]
    fn move_codes_map_onto_directions() {
        let command = MoveCommand::decode(&RawMoveCommand::new(5));
        assert_eq!(
            command,
            MoveCommand::Move(MoveTarget::Toward(Direction::DownRight))
        );
    }

    #[test]
    fn sound_effect_carries_all_parameters() {
        let raw = RawMoveCommand::new(35)
            .with_parameters(80, 110, 40)
            .with_string("Cursor1");
        let MoveCommand::PlaySound(sound) = MoveCommand::decode(&raw) else {
            panic!("expected a sound command");
        };
        assert_eq!(sound.name, "Cursor1");
        assert_eq!((sound.volume, sound.tempo, sound.balance), (80, 110, 40));
    }

    #[test]
    fn lenient_decoding_keeps_unknown_codes() {
        assert_eq!(
            MoveCommand::decode(&RawMoveCommand::new(99)),
            MoveCommand::Unknown { code: 99 }
        );
    }

    #[test]
    fn strict_decoding_rejects_unknown_codes() {
        let error = MoveCommand::decode_strict(&RawMoveCommand::new(-3)).unwrap_err();
        assert_eq!(error.code, -3);
    }
}
