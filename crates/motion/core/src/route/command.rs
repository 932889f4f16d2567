use crate::geometry::{Direction, Facing};

/// Decoded move-route command.
///
/// Commands fall into three pacing groups (see [`CommandGroup`]); the group
/// decides which gate threshold the interpreter applies after running it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveCommand {
    /// Step one tile.
    Move(MoveTarget),
    /// Change heading without moving.
    Turn(FaceTarget),
    Wait,
    /// Opens a jump block; moves up to the matching [`MoveCommand::EndJump`]
    /// are summed into a single jump.
    BeginJump,
    EndJump,
    LockFacing,
    UnlockFacing,
    IncreaseSpeed,
    DecreaseSpeed,
    IncreaseFrequency,
    DecreaseFrequency,
    SwitchOn(i32),
    SwitchOff(i32),
    ChangeGraphic(SpriteGraphic),
    PlaySound(SoundEffect),
    WalkEverywhereOn,
    WalkEverywhereOff,
    StopAnimation,
    StartAnimation,
    IncreaseTransparency,
    DecreaseTransparency,
    /// A code outside the legacy table, kept verbatim.
    Unknown { code: i32 },
}

/// Where a [`MoveCommand::Move`] heads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveTarget {
    Toward(Direction),
    Random,
    TowardTarget,
    AwayFromTarget,
    /// Keep the current direction.
    Forward,
}

/// Where a [`MoveCommand::Turn`] faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceTarget {
    Face(Facing),
    TurnRight,
    TurnLeft,
    TurnAround,
    /// 90° to a random side.
    TurnRandomSide,
    Random,
    TowardTarget,
    AwayFromTarget,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum CommandGroup {
    Move,
    Turn,
    Other,
}

impl MoveCommand {
    pub fn group(&self) -> CommandGroup {
        match self {
            MoveCommand::Move(_) => CommandGroup::Move,
            MoveCommand::Turn(_) => CommandGroup::Turn,
            _ => CommandGroup::Other,
        }
    }
}

/// Sound request carried by a route. Parameters pass through untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundEffect {
    pub name: String,
    pub volume: i32,
    pub tempo: i32,
    pub balance: i32,
}

impl SoundEffect {
    /// Names the editor writes for "no sound" (English and Polish builds).
    pub const SILENT_NAMES: [&'static str; 2] = ["(OFF)", "(Brak)"];

    pub fn is_silent(&self) -> bool {
        Self::SILENT_NAMES.contains(&self.name.as_str())
    }
}

/// Character sheet name plus the index of the sprite within it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpriteGraphic {
    pub name: String,
    pub index: i32,
}

impl SpriteGraphic {
    pub fn new(name: impl Into<String>, index: i32) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}
