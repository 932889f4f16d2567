use crate::state::{CharacterId, Layer, Position};

/// Whether a probe is for a one-tile step or a jump landing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum MoveKind {
    Step,
    Jump,
}

/// What the collision gate needs to know about the mover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveProbe {
    pub character: CharacterId,
    pub kind: MoveKind,
    pub layer: Layer,
    pub through: bool,
    pub flying: bool,
}

impl MoveProbe {
    pub fn is_jump(&self) -> bool {
        self.kind == MoveKind::Jump
    }
}

/// Answers whether a character may move from one tile to another.
///
/// Implemented by the map owner. The engine never inspects tiles itself.
/// For diagonal steps the engine issues two axis-aligned probes, both
/// starting from the mover's current tile.
pub trait CollisionGate {
    fn make_way(&self, probe: &MoveProbe, from: Position, to: Position) -> bool;
}
