//! Move routes: ordered command scripts driving a character.
mod code;
mod command;

pub use code::{CommandCode, CommandDecodeError, RawMoveCommand};
pub use command::{CommandGroup, FaceTarget, MoveCommand, MoveTarget, SoundEffect, SpriteGraphic};

/// An ordered, optionally repeating, optionally skippable command script.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveRoute {
    pub commands: Vec<MoveCommand>,
    /// Restart from the first command when the list is exhausted.
    pub repeat: bool,
    /// Abandon blocked moves instead of retrying them every tick.
    pub skippable: bool,
}

impl MoveRoute {
    pub fn new(commands: Vec<MoveCommand>) -> Self {
        Self {
            commands,
            repeat: false,
            skippable: false,
        }
    }

    /// Builds a route from external records; unknown codes are kept.
    pub fn from_raw(records: &[RawMoveCommand], repeat: bool, skippable: bool) -> Self {
        Self {
            commands: records.iter().map(MoveCommand::decode).collect(),
            repeat,
            skippable,
        }
    }

    pub fn repeating(mut self) -> Self {
        self.repeat = true;
        self
    }

    pub fn skippable(mut self) -> Self {
        self.skippable = true;
        self
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
