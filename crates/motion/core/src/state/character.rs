use std::sync::Arc;

use crate::config::MotionConfig;
use crate::env::{MapGeometry, MoveKind, MoveProbe};
use crate::geometry::{Direction, Facing, jump_height};
use crate::route::{MoveRoute, SpriteGraphic};
use crate::state::{
    AnimType, AnimationState, CharacterId, EventId, FlashColor, FlashState, MovementFlags,
    Position,
};

/// What kind of map object a character is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterKind {
    Player,
    Event(EventId),
    Vehicle(VehicleKind),
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum VehicleKind {
    Boat,
    Ship,
    Airship,
}

/// Drawing layer relative to the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Layer {
    Below,
    #[default]
    Same,
    Above,
}

/// Route forced onto a character by an external script.
///
/// Present only while the route overwrites the character's own movement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveRoute {
    pub route: Arc<MoveRoute>,
    /// Next command to run; equals `route.len()` once the list is exhausted.
    pub index: usize,
    /// Set each time the command list has been run to its end.
    pub repeated: bool,
}

impl ActiveRoute {
    pub fn new(route: Arc<MoveRoute>) -> Self {
        Self {
            route,
            index: 0,
            repeated: false,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.index >= self.route.len()
    }
}

/// The character's own movement when no route is forced onto it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AutonomousMovement {
    #[default]
    Stationary,
    /// Custom route authored on the event page, with its own cursor.
    Custom { route: Arc<MoveRoute>, index: usize },
}

/// Complete per-character movement state.
///
/// Fields are mutated only during the character's own update (through
/// [`crate::engine::CharacterEngine`]) or by the map owner between ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterState {
    pub id: CharacterId,
    pub kind: CharacterKind,
    pub map_id: u32,
    pub position: Position,
    /// Interpolation left in the current move or jump, `0..=TILE_UNIT`.
    pub remaining_step: i32,
    pub direction: Direction,
    pub sprite_facing: Facing,
    pub flags: MovementFlags,
    pub stop_count: i32,
    pub max_stop_count: i32,
    pub move_speed: u8,
    pub move_frequency: u8,
    /// Frequency to restore when a forced route ends.
    pub original_move_frequency: u8,
    pub active_route: Option<ActiveRoute>,
    pub autonomous: AutonomousMovement,
    /// Tile the current jump started from (may lie off a looping map).
    pub jump_origin: Position,
    pub animation: AnimationState,
    pub layer: Layer,
    pub sprite: SpriteGraphic,
    pub transparency: u8,
    pub flash: FlashState,
    /// Random draws made so far; feeds the per-draw seed.
    pub roll_count: u32,
}

impl CharacterState {
    pub fn new(id: CharacterId, kind: CharacterKind, position: Position) -> Self {
        let frequency = MotionConfig::DEFAULT_FREQUENCY;
        Self {
            id,
            kind,
            map_id: 0,
            position,
            remaining_step: 0,
            direction: Direction::Down,
            sprite_facing: Facing::Down,
            flags: MovementFlags::ACTIVE,
            stop_count: 0,
            max_stop_count: MotionConfig::stop_count_for_step(frequency),
            move_speed: MotionConfig::DEFAULT_SPEED,
            move_frequency: frequency,
            original_move_frequency: frequency,
            active_route: None,
            autonomous: AutonomousMovement::Stationary,
            jump_origin: position,
            animation: AnimationState::default(),
            layer: Layer::Same,
            sprite: SpriteGraphic::default(),
            transparency: 0,
            flash: FlashState::default(),
            roll_count: 0,
        }
    }

    pub fn player(position: Position) -> Self {
        Self::new(CharacterId::PLAYER, CharacterKind::Player, position)
    }

    pub fn with_map_id(mut self, map_id: u32) -> Self {
        self.map_id = map_id;
        self
    }

    pub fn with_speed(mut self, speed: u8) -> Self {
        self.set_move_speed(speed);
        self
    }

    pub fn with_frequency(mut self, frequency: u8) -> Self {
        self.set_move_frequency(frequency);
        self.original_move_frequency = self.move_frequency;
        self.set_max_stop_count_for_step();
        self
    }

    pub fn with_facing(mut self, facing: Facing) -> Self {
        self.face(facing);
        self
    }

    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_anim_type(mut self, kind: AnimType) -> Self {
        self.animation = AnimationState::new(kind);
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteGraphic) -> Self {
        self.sprite = sprite;
        self
    }

    pub fn with_custom_route(mut self, route: Arc<MoveRoute>) -> Self {
        self.autonomous = AutonomousMovement::Custom { route, index: 0 };
        self
    }

    pub fn with_flags(mut self, flags: MovementFlags) -> Self {
        self.flags.insert(flags);
        self
    }

    // ===== motion state =====

    pub fn is_active(&self) -> bool {
        self.flags.contains(MovementFlags::ACTIVE)
    }

    pub fn is_processed(&self) -> bool {
        self.flags.contains(MovementFlags::PROCESSED)
    }

    pub fn set_processed(&mut self, processed: bool) {
        self.flags.set(MovementFlags::PROCESSED, processed);
    }

    pub fn is_jumping(&self) -> bool {
        self.flags.contains(MovementFlags::JUMPING)
    }

    pub fn is_moving(&self) -> bool {
        !self.is_jumping() && self.remaining_step > 0
    }

    /// Neither walking nor jumping: the route gate may open.
    pub fn is_stopping(&self) -> bool {
        !(self.is_moving() || self.is_jumping())
    }

    pub fn is_paused(&self) -> bool {
        self.flags.contains(MovementFlags::PAUSED)
    }

    pub fn is_facing_locked(&self) -> bool {
        self.flags.contains(MovementFlags::FACING_LOCKED)
    }

    pub fn is_through(&self) -> bool {
        self.flags.contains(MovementFlags::THROUGH)
    }

    pub fn is_flying(&self) -> bool {
        self.flags.contains(MovementFlags::FLYING)
    }

    pub fn is_anim_paused(&self) -> bool {
        self.flags.contains(MovementFlags::ANIM_PAUSED)
    }

    pub fn is_spinning(&self) -> bool {
        self.animation.kind.is_spinning()
    }

    /// Frames still animate: not paused and not a frozen animation type.
    pub fn is_animated(&self) -> bool {
        !self.is_anim_paused() && !self.animation.kind.is_frozen()
    }

    /// True while the gate is still counting toward its threshold.
    pub fn is_stop_count_active(&self) -> bool {
        self.stop_count < self.max_stop_count
    }

    pub fn is_move_route_overwritten(&self) -> bool {
        self.active_route.is_some()
    }

    pub fn is_move_route_repeated(&self) -> bool {
        self.active_route.as_ref().is_some_and(|active| active.repeated)
    }

    // ===== pacing =====

    pub fn set_max_stop_count_for_step(&mut self) {
        self.max_stop_count = MotionConfig::stop_count_for_step(self.move_frequency);
    }

    pub fn set_max_stop_count_for_turn(&mut self) {
        self.max_stop_count = MotionConfig::stop_count_for_turn(self.move_frequency);
    }

    pub fn set_max_stop_count_for_wait(&mut self) {
        self.max_stop_count = MotionConfig::stop_count_for_wait(self.move_frequency);
    }

    pub fn wait(&mut self) {
        self.stop_count = 0;
        self.set_max_stop_count_for_wait();
    }

    // ===== placement =====

    /// Teleports without a collision check. Cancels any move or jump in
    /// progress, including a jump left over from the previous map.
    pub fn move_to(&mut self, map_id: u32, x: i32, y: i32) {
        self.map_id = map_id;
        self.position = Position::new(x, y);
        self.remaining_step = 0;
        self.flags.remove(MovementFlags::JUMPING);
    }

    pub fn is_in_position(&self, x: i32, y: i32) -> bool {
        self.position.x == x && self.position.y == y
    }

    // ===== heading =====

    /// Sets both the logical direction and the sprite facing.
    pub fn face(&mut self, facing: Facing) {
        self.direction = facing.into();
        self.sprite_facing = facing;
    }

    /// Derives the sprite facing from the current direction after a step.
    pub fn update_facing(&mut self) {
        if self.is_facing_locked() || self.is_spinning() {
            return;
        }
        self.sprite_facing = self.sprite_facing.after_step(self.direction);
    }

    pub fn turn_90_degree_left(&mut self) {
        self.direction = self.sprite_facing.turn_left().into();
    }

    pub fn turn_90_degree_right(&mut self) {
        self.direction = self.sprite_facing.turn_right().into();
    }

    pub fn turn_180_degree(&mut self) {
        self.direction = self.sprite_facing.turn_around().into();
    }

    // ===== tunables =====

    pub fn set_move_speed(&mut self, speed: u8) {
        self.move_speed = MotionConfig::clamp_speed(speed);
    }

    pub fn set_move_frequency(&mut self, frequency: u8) {
        self.move_frequency = MotionConfig::clamp_frequency(frequency);
    }

    pub fn set_transparency(&mut self, transparency: i32) {
        self.transparency = transparency.clamp(0, i32::from(MotionConfig::MAX_TRANSPARENCY)) as u8;
    }

    pub fn set_facing_locked(&mut self, locked: bool) {
        self.flags.set(MovementFlags::FACING_LOCKED, locked);
    }

    pub fn set_anim_paused(&mut self, paused: bool) {
        self.flags.set(MovementFlags::ANIM_PAUSED, paused);
    }

    /// Toggles collision bypass on behalf of a move route.
    pub fn set_route_through(&mut self, through: bool) {
        self.flags.set(MovementFlags::THROUGH, through);
        self.flags.set(MovementFlags::ROUTE_THROUGH, through);
    }

    pub fn flash(&mut self, color: FlashColor, power: f64, frames: i32) {
        self.flash.start(color, power, frames);
    }

    // ===== queries =====

    /// 0..=255, derived from transparency 0..=8.
    pub fn opacity(&self) -> i32 {
        ((8 - i32::from(self.transparency)) * 32 - 1).clamp(0, 255)
    }

    /// Visual jump arc in pixels; zero unless jumping.
    pub fn jump_height(&self) -> i32 {
        if self.is_jumping() {
            jump_height(self.remaining_step)
        } else {
            0
        }
    }

    /// How deep the sprite sinks into bush tiles.
    pub fn bush_depth(&self, map: &dyn MapGeometry) -> i32 {
        if self.layer != Layer::Same || self.is_jumping() || self.is_flying() {
            return 0;
        }
        map.bush_depth(self.position)
    }

    /// Snapshot handed to the collision gate.
    pub fn probe(&self, kind: MoveKind) -> MoveProbe {
        MoveProbe {
            character: self.id,
            kind,
            layer: self.layer,
            through: self.is_through(),
            flying: self.is_flying(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_at(x: i32, y: i32) -> CharacterState {
        CharacterState::new(CharacterId(3), CharacterKind::Event(EventId(3)), Position::new(x, y))
    }

    #[test]
    fn opacity_follows_transparency() {
        let mut character = event_at(0, 0);
        assert_eq!(character.opacity(), 255);
        character.set_transparency(1);
        assert_eq!(character.opacity(), 223);
        character.set_transparency(8);
        assert_eq!(character.opacity(), 0);
        character.set_transparency(42);
        assert_eq!(character.transparency, 8);
        character.set_transparency(-1);
        assert_eq!(character.transparency, 0);
    }

    #[test]
    fn move_to_clears_interpolation_and_jump() {
        let mut character = event_at(1, 1);
        character.remaining_step = 128;
        character.flags.insert(MovementFlags::JUMPING);

        character.move_to(7, 10, 12);

        assert_eq!(character.map_id, 7);
        assert!(character.is_in_position(10, 12));
        assert_eq!(character.remaining_step, 0);
        assert!(!character.is_jumping());
        assert!(character.is_stopping());
    }

    #[test]
    fn turns_rotate_from_the_sprite_facing() {
        let mut character = event_at(0, 0).with_facing(Facing::Left);
        character.direction = Direction::UpRight;

        character.turn_90_degree_right();
        assert_eq!(character.direction, Direction::Up);
        character.turn_90_degree_left();
        assert_eq!(character.direction, Direction::Down);
        character.turn_180_degree();
        assert_eq!(character.direction, Direction::Right);
    }

    #[test]
    fn facing_lock_freezes_the_sprite() {
        let mut character = event_at(0, 0).with_facing(Facing::Up);
        character.set_facing_locked(true);
        character.direction = Direction::Left;
        character.update_facing();
        assert_eq!(character.sprite_facing, Facing::Up);
    }

    #[test]
    fn tunables_are_clamped() {
        let mut character = event_at(0, 0).with_speed(9).with_frequency(0);
        assert_eq!(character.move_speed, 6);
        assert_eq!(character.move_frequency, 1);
        character.set_move_speed(0);
        assert_eq!(character.move_speed, 1);
    }
}
