//! Passability plus character occupancy, answered for one mover at a time.
use arrayvec::ArrayVec;
use motion_core::{
    CharacterId, CharacterState, CollisionGate, Layer, MapGeometry, MoveProbe, Position,
};

use super::GridMap;

/// Most characters reported as sharing one tile.
pub const MAX_STACKED: usize = 4;

/// Where a character stood when the gate was built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occupant {
    pub id: CharacterId,
    pub position: Position,
    pub layer: Layer,
    pub solid: bool,
}

impl Occupant {
    pub fn of(character: &CharacterState) -> Self {
        Self {
            id: character.id,
            position: character.position,
            layer: character.layer,
            solid: character.is_active() && !character.is_through() && !character.is_flying(),
        }
    }
}

/// Collision gate over a [`GridMap`] and a snapshot of the other characters.
///
/// A move succeeds when the destination lies on the map (after wrapping
/// looping axes), is not a blocked tile unless the mover flies, and is not
/// held by a solid character on the same layer. Through movers skip every
/// check except the map bounds.
pub struct OccupancyGate<'a> {
    map: &'a GridMap,
    occupants: &'a [Occupant],
}

impl<'a> OccupancyGate<'a> {
    pub fn new(map: &'a GridMap, occupants: &'a [Occupant]) -> Self {
        Self { map, occupants }
    }

    /// Solid same-layer characters on `position`, other than `mover`.
    pub fn blockers_at(
        &self,
        position: Position,
        mover: CharacterId,
    ) -> ArrayVec<CharacterId, MAX_STACKED> {
        self.occupants
            .iter()
            .filter(|occupant| {
                occupant.id != mover
                    && occupant.solid
                    && occupant.layer == Layer::Same
                    && self.map.wrap(occupant.position) == position
            })
            .map(|occupant| occupant.id)
            .take(MAX_STACKED)
            .collect()
    }
}

impl CollisionGate for OccupancyGate<'_> {
    fn make_way(&self, probe: &MoveProbe, _from: Position, to: Position) -> bool {
        let to = self.map.wrap(to);
        if !self.map.contains(to) {
            return false;
        }
        if probe.through {
            return true;
        }
        if !probe.flying && !self.map.is_passable(to) {
            return false;
        }
        if probe.flying || probe.layer != Layer::Same {
            return true;
        }
        let blockers = self.blockers_at(to, probe.character);
        if !blockers.is_empty() {
            tracing::trace!(
                mover = %probe.character,
                kind = %probe.kind,
                %to,
                blockers = blockers.len(),
                "tile occupied"
            );
        }
        blockers.is_empty()
    }
}
